//! SOFR CLI - Command-line interface for daily simple SOFR accrual.
//!
//! # Usage
//!
//! ```bash
//! # Accrue a loan against the demo fixings
//! sofr calc --principal 1000000 --spread-bps 250 --start 2026-01-06 --end 2026-01-10 --demo
//!
//! # Accrue against a CSV of published fixings, no lookback, JSON output
//! sofr -f json calc -p 5000000 -s 175 --start 2026-01-02 --end 2026-03-31 -l 0 --rates sofr.csv
//!
//! # Inspect which days have fixings
//! sofr rates --start 2026-01-01 --end 2026-01-31 --rates nyfed.json
//!
//! # Show the effective configuration
//! sofr config show
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod rates_source;

use cli::{Cli, Commands};
use commands::Context;
use config::CliConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    let (config, config_path) = CliConfig::load(cli.config.as_deref())?;
    debug!(?config, "effective configuration");

    let ctx = Context {
        format: cli.format.unwrap_or(config.format),
        quiet: cli.quiet,
        config,
        config_path,
    };

    // Execute command
    match cli.command {
        Commands::Calc(args) => commands::calc::execute(args, &ctx)?,
        Commands::Rates(args) => commands::rates::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
