//! CLI Command Implementations
//!
//! - rename: frame-index and sequential run commands
//! - config: Configuration management commands

pub mod config;
pub mod rename;

pub use config::{init_config, print_default_config, validate_config};
pub use rename::{rename_command, sequence_command};
