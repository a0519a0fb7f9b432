//! Config command implementation.
//!
//! Shows the effective CLI configuration and where it was read from.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::config::{default_path, CliConfig};
use crate::output::{print_header, print_info, print_table, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the effective settings as TOML, ready to save as a config file
    Template,

    /// Show configuration file location
    Path,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Template => {
            print!("{}", ctx.config.to_toml()?);
            Ok(())
        }
        ConfigCommand::Path => execute_path(ctx),
    }
}

fn settings(config: &CliConfig) -> Vec<KeyValue> {
    let files = if config.rate_files.is_empty() {
        "(none)".to_string()
    } else {
        config
            .rate_files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    vec![
        KeyValue::new("day_count", config.day_count.code()),
        KeyValue::new("rate_index", config.rate_index.code()),
        KeyValue::new("lookback_days", config.lookback_days.to_string()),
        KeyValue::new("carry_forward", config.carry_forward.to_string()),
        KeyValue::new("max_range_days", config.max_range_days.to_string()),
        KeyValue::new("precision", config.precision.to_string()),
        KeyValue::new("format", config.format.to_string()),
        KeyValue::new("rate_files", files),
    ]
}

/// Show current configuration.
fn execute_show(ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Current Configuration");
            }
            print_table(&settings(&ctx.config));
            if !ctx.quiet {
                match &ctx.config_path {
                    Some(path) => print_info(&format!("Loaded from {}", path.display())),
                    None => print_info("Using built-in defaults"),
                }
            }
        }
        OutputFormat::Json => crate::output::print_json(&ctx.config)?,
    }
    Ok(())
}

/// Show configuration file path.
fn execute_path(ctx: &Context) -> Result<()> {
    match (&ctx.config_path, default_path()) {
        (Some(path), _) => print_info(&format!("Config file: {} (loaded)", path.display())),
        (None, Some(path)) => {
            print_info(&format!("Config file: {}", path.display()));
            print_info("Status: not created yet (using defaults)");
        }
        (None, None) => print_info("No config directory on this platform; using defaults"),
    }
    Ok(())
}
