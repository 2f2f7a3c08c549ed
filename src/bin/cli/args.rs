//! CLI Argument Structures
//!
//! All command definitions and argument structures used by the
//! frame-renamer binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Copy numbered image frames into canonical zero-padded names
#[derive(Parser)]
#[command(name = "frame-renamer")]
#[command(version = VERSION)]
#[command(about = "Copy numbered image frames into canonical zero-padded names")]
#[command(long_about = "
Copy every `*frame_<digits>_*.jpg` file of a source directory into a target
directory as `<digits padded to 3>.jpg`. The source directory is never modified.

Common Usage:

  # Rename using the default directories (join-zip -> public/join)
  frame-renamer rename

  # Explicit directories
  frame-renamer rename --source ./frames --target ./public/join

  # Number every .jpg by sorted position instead (001.jpg, 002.jpg, ...)
  frame-renamer sequence --source ./books-zip --target ./public/books

  # Keep directories in a config file
  frame-renamer init-config
  frame-renamer rename --config .frame-renamer.yml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy frames named by their embedded frame index
    Rename(RunArgs),

    /// Copy every .jpg numbered by its sorted position
    Sequence(RunArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// Directory selection shared by the run commands
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Configuration file (defaults to .frame-renamer.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source directory to scan
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Target directory to write into (created when missing)
    #[arg(short, long)]
    pub target: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".frame-renamer.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(short, long)]
    pub config: PathBuf,
}
