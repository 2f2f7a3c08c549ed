//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: Command execution logic
//! - config_layer: Configuration layer management and merging

pub mod args;
pub mod commands;
pub mod config_layer;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
