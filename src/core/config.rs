//! Run configuration for the frame renamer.
//!
//! The source and target directories are the only tunable inputs. The naming
//! pattern itself is fixed and lives in [`crate::core::naming`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{RenamerError, Result};

/// Default directory holding the raw, frame-numbered images.
pub const DEFAULT_SOURCE_DIR: &str = "join-zip";

/// Default directory receiving the canonically named copies.
pub const DEFAULT_TARGET_DIR: &str = "public/join";

/// File names checked in the working directory when no `--config` is given.
pub const IMPLICIT_CONFIG_FILES: [&str; 2] = [".frame-renamer.yml", ".frame-renamer.yaml"];

/// Source and target directories for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamerConfig {
    /// Directory whose entries are scanned (non-recursively)
    pub source_dir: PathBuf,

    /// Directory that receives the renamed copies; created when missing
    pub target_dir: PathBuf,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
        }
    }
}

impl RenamerConfig {
    /// Build a configuration from explicit directories.
    pub fn new(source_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RenamerError::io_at("Failed to read config file", path, e))?;

        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text. Missing fields fall back to defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(Into::into)
    }

    /// Render the configuration as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_yaml_string()?;
        std::fs::write(path, content)
            .map_err(|e| RenamerError::io_at("Failed to write config file", path, e))
    }

    /// First implicit config file present in `dir`, if any.
    pub fn find_implicit(dir: &Path) -> Option<PathBuf> {
        IMPLICIT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Check that the directories are usable together.
    ///
    /// Existence is not checked here; a missing source surfaces as an I/O
    /// error when the run lists it.
    pub fn validate(&self) -> Result<()> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(RenamerError::config_field(
                "source_dir must not be empty",
                "source_dir",
            ));
        }
        if self.target_dir.as_os_str().is_empty() {
            return Err(RenamerError::config_field(
                "target_dir must not be empty",
                "target_dir",
            ));
        }
        if self.source_dir == self.target_dir {
            return Err(RenamerError::config_field(
                format!(
                    "source_dir and target_dir must differ (both are {})",
                    self.source_dir.display()
                ),
                "target_dir",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenamerConfig::default();
        assert_eq!(config.source_dir, PathBuf::from("join-zip"));
        assert_eq!(config.target_dir, PathBuf::from("public/join"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = RenamerConfig::from_yaml_str("source_dir: frames\n").unwrap();
        assert_eq!(config.source_dir, PathBuf::from("frames"));
        assert_eq!(config.target_dir, PathBuf::from(DEFAULT_TARGET_DIR));
    }

    #[test]
    fn test_malformed_yaml_is_serialization_error() {
        let err = RenamerConfig::from_yaml_str("source_dir: [unclosed").unwrap_err();
        assert!(matches!(err, RenamerError::Serialization { .. }));
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("renamer.yml");
        let config = RenamerConfig::new("in", "out");

        config.to_yaml_file(&path).unwrap();
        let loaded = RenamerConfig::from_yaml_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yml");

        let err = RenamerConfig::from_yaml_file(&path).unwrap_err();
        assert_eq!(err.path(), Some(path.as_path()));
    }

    #[test]
    fn test_validate_rejects_same_directories() {
        let err = RenamerConfig::new("frames", "frames").validate().unwrap_err();
        match err {
            RenamerError::Config { field, .. } => assert_eq!(field.as_deref(), Some("target_dir")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        assert!(RenamerConfig::new("", "out").validate().is_err());
        assert!(RenamerConfig::new("in", "").validate().is_err());
    }

    #[test]
    fn test_find_implicit_prefers_yml() {
        let dir = tempdir().unwrap();
        assert!(RenamerConfig::find_implicit(dir.path()).is_none());

        std::fs::write(dir.path().join(".frame-renamer.yaml"), "").unwrap();
        assert_eq!(
            RenamerConfig::find_implicit(dir.path()),
            Some(dir.path().join(".frame-renamer.yaml"))
        );

        std::fs::write(dir.path().join(".frame-renamer.yml"), "").unwrap();
        assert_eq!(
            RenamerConfig::find_implicit(dir.path()),
            Some(dir.path().join(".frame-renamer.yml"))
        );
    }
}
