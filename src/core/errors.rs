//! Error types for the frame-renamer library.
//!
//! Every fallible operation in the crate returns [`Result`]. Filesystem
//! failures carry the path that triggered them so the binary can report a
//! useful message before exiting.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main result type for frame-renamer operations.
pub type Result<T> = std::result::Result<T, RenamerError>;

/// Error type for all frame-renamer operations.
#[derive(Error, Debug)]
pub enum RenamerError {
    /// I/O related errors (listing, directory creation, copying)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Path involved in the failing operation
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format being processed
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RenamerError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source,
        }
    }

    /// Create a new I/O error tied to a specific path
    pub fn io_at(message: impl Into<String>, path: &Path, source: io::Error) -> Self {
        Self::Io {
            message: format!("{}: {}", message.into(), path.display()),
            path: Some(path.to_path_buf()),
            source,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Path associated with an I/O failure, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

impl From<io::Error> for RenamerError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_yaml::Error> for RenamerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}
