//! Run commands: frame-index renaming and sequential renumbering.
//!
//! Stdout carries exactly one progress line per copy and one summary line;
//! logging goes to stderr.

use std::env;

use tracing::info;

use crate::cli::args::RunArgs;
use crate::cli::config_layer::build_layered_config;
use frame_renamer::{NamingScheme, RenameEngine};

/// Copy frames under names derived from their embedded frame index
pub fn rename_command(args: RunArgs) -> anyhow::Result<()> {
    run_scheme(&args, NamingScheme::FrameIndex)
}

/// Copy every `.jpg` under names derived from its sorted position
pub fn sequence_command(args: RunArgs) -> anyhow::Result<()> {
    run_scheme(&args, NamingScheme::Sequential)
}

fn run_scheme(args: &RunArgs, scheme: NamingScheme) -> anyhow::Result<()> {
    let cwd = env::current_dir()?;
    let config = build_layered_config(args, &cwd)?;
    let engine = RenameEngine::new(config, scheme)?;

    let summary = engine.run_with(|record| println!("{}", record.progress_line()))?;
    println!("{}", summary.summary_line());

    info!(
        "Wrote {} distinct files to {}",
        summary.written_names().len(),
        engine.config().target_dir.display()
    );
    Ok(())
}
