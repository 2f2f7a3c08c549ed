//! Configuration management commands.
//!
//! Initialization, validation, and printing of the default configuration.

use owo_colors::OwoColorize;

use crate::cli::args::{InitConfigArgs, ValidateConfigArgs};
use crate::cli::config_layer::load_configuration;
use frame_renamer::RenamerConfig;

/// Print default configuration in YAML format
pub fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default frame-renamer configuration".dimmed());
    println!(
        "{}",
        "# Save this to a file and customize as needed".dimmed()
    );
    println!(
        "{}",
        "# Usage: frame-renamer rename --config your-config.yml".dimmed()
    );
    println!();

    let yaml_output = RenamerConfig::default().to_yaml_string()?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    RenamerConfig::default().to_yaml_file(&args.output)?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Set source_dir and target_dir in the configuration file");
    println!(
        "   2. Run with: {}",
        format!("frame-renamer rename --config {}", args.output.display()).cyan()
    );

    Ok(())
}

/// Validate a configuration file
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let config = match load_configuration(Some(&args.config)) {
        Ok(config) => {
            println!(
                "{}",
                "✅ Configuration file is valid!".bright_green().bold()
            );
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • source_dir and target_dir must be different, non-empty paths");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'frame-renamer print-default-config' to see valid format".dimmed()
            );
            return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
        }
    };

    println!("   source_dir: {}", config.source_dir.display());
    println!("   target_dir: {}", config.target_dir.display());
    if !config.source_dir.is_dir() {
        println!(
            "   {} source_dir does not exist yet; runs will fail until it does",
            "⚠️".yellow()
        );
    }

    Ok(())
}
