//! # frame-renamer: Canonical Names for Numbered Image Frames
//!
//! Copies a directory of frame images into a target directory under
//! zero-padded canonical names, leaving the source untouched.
//!
//! - **Frame-index naming**: `clip_frame_12_delay.jpg` becomes `012.jpg`
//! - **Sequential naming**: the n-th `.jpg` in sorted order becomes `00n.jpg`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use frame_renamer::{NamingScheme, RenameEngine, RenamerConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RenamerConfig::new("join-zip", "public/join");
//!     let engine = RenameEngine::new(config, NamingScheme::FrameIndex)?;
//!
//!     let summary = engine.run_with(|record| println!("{}", record.progress_line()))?;
//!     println!("{}", summary.summary_line());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core naming, configuration, and filesystem modules
pub mod core {
    //! Naming rules, configuration, errors, and filesystem helpers.

    pub mod config;
    pub mod errors;
    pub mod file_utils;
    pub mod naming;
}

// Public API and engine interface
pub mod api {
    //! High-level engine interface.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use api::engine::{PlannedCopy, RenameEngine, RenamePlan};
pub use api::results::{RenameRecord, RenameSummary};
pub use core::config::RenamerConfig;
pub use core::errors::{RenamerError, Result};
pub use core::naming::{FrameIndex, NamingScheme};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
