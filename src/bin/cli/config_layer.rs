//! Configuration Layer Management
//!
//! Merges built-in defaults, an optional YAML file, and CLI overrides into the
//! final [`RenamerConfig`]. Later layers win.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::RunArgs;
use frame_renamer::RenamerConfig;

/// Trait for merging configuration layers
pub trait ConfigMerge<T> {
    /// Merge another configuration into this one, with the other taking priority
    fn merge_with(&mut self, other: T);
}

/// Convert CLI arguments to partial configuration overrides
pub trait FromCliArgs<T> {
    /// Create a partial configuration from CLI arguments
    fn from_cli_args(args: &T) -> Self;
}

/// Partially specified configuration; `None` leaves the lower layer untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub source_dir: Option<PathBuf>,
    pub target_dir: Option<PathBuf>,
}

impl FromCliArgs<RunArgs> for ConfigOverrides {
    fn from_cli_args(args: &RunArgs) -> Self {
        Self {
            source_dir: args.source.clone(),
            target_dir: args.target.clone(),
        }
    }
}

impl ConfigMerge<ConfigOverrides> for RenamerConfig {
    fn merge_with(&mut self, other: ConfigOverrides) {
        if let Some(source_dir) = other.source_dir {
            self.source_dir = source_dir;
        }
        if let Some(target_dir) = other.target_dir {
            self.target_dir = target_dir;
        }
    }
}

impl ConfigMerge<RenamerConfig> for RenamerConfig {
    fn merge_with(&mut self, other: RenamerConfig) {
        *self = other;
    }
}

/// Load a configuration file, or return defaults when `path` is `None`.
pub fn load_configuration(path: Option<&Path>) -> anyhow::Result<RenamerConfig> {
    let config = match path {
        Some(path) => RenamerConfig::from_yaml_file(path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to load configuration from {}: {}",
                path.display(),
                e
            )
        })?,
        None => RenamerConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

/// Build the run configuration for `args`, looking for implicit config files in `cwd`.
pub fn build_layered_config(args: &RunArgs, cwd: &Path) -> anyhow::Result<RenamerConfig> {
    let mut config = RenamerConfig::default();

    // Prefer an explicit --config, otherwise look for local defaults
    let implicit_config_path = if args.config.is_none() {
        RenamerConfig::find_implicit(cwd)
    } else {
        None
    };

    if let Some(config_path) = args.config.as_ref().or(implicit_config_path.as_ref()) {
        debug!("Loading configuration from {}", config_path.display());
        let file_config = RenamerConfig::from_yaml_file(config_path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to load configuration from {}: {}",
                config_path.display(),
                e
            )
        })?;
        config.merge_with(file_config);
    }

    config.merge_with(ConfigOverrides::from_cli_args(args));
    config.validate()?;

    Ok(config)
}
