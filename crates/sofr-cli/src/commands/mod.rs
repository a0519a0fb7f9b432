//! CLI command implementations.

pub mod calc;
pub mod config;
pub mod rates;

// Re-export submodules for convenience
pub use calc::CalcArgs;
pub use config::ConfigArgs;
pub use rates::RatesArgs;

use std::path::PathBuf;

use clap::Args;
use sofr_accrual::{FillPolicy, FixingStore, RateIndex};

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::rates_source;

/// Settings shared by every command.
#[derive(Debug)]
pub struct Context {
    /// Effective configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output format after applying the config default.
    pub format: OutputFormat,
    /// Suppress headers and informational lines.
    pub quiet: bool,
}

/// Where fixings come from.
#[derive(Args, Debug, Default)]
pub struct RateSourceArgs {
    /// Rate file (CSV `date,rate` or JSON); may be repeated
    #[arg(short, long = "rates", value_name = "FILE")]
    pub rates: Vec<PathBuf>,

    /// Seed the built-in demo fixings for 2026-01-01..2026-01-10
    #[arg(long)]
    pub demo: bool,

    /// Use only published fixings; do not carry rates over weekends and holidays
    #[arg(long)]
    pub exact: bool,
}

impl RateSourceArgs {
    /// Loads the fixing store, falling back to the config's rate files.
    pub fn load(&self, ctx: &Context, index: RateIndex) -> CliResult<FixingStore> {
        let files = if self.rates.is_empty() {
            &ctx.config.rate_files
        } else {
            &self.rates
        };
        rates_source::build_store(files, self.demo, index)
    }

    /// Fill policy after applying `--exact` over the config.
    pub fn fill_policy(&self, config: &CliConfig) -> FillPolicy {
        if self.exact || !config.carry_forward {
            FillPolicy::Exact
        } else {
            FillPolicy::CarryForward
        }
    }
}

/// Rejects ranges of more than `max_range_days` inclusive days.
pub fn check_range(days: i64, config: &CliConfig) -> CliResult<()> {
    if days > config.max_range_days {
        return Err(CliError::RangeTooLong {
            days,
            max: config.max_range_days,
        });
    }
    Ok(())
}
