//! CLI configuration file.
//!
//! Settings are read from a TOML file given with `--config` (or
//! `SOFR_CONFIG`), falling back to `<config_dir>/sofr/config.toml`. Every
//! key is optional; command-line flags override whatever the file says.
//!
//! ```toml
//! day_count = "ACT_ACT"
//! lookback_days = 2
//! carry_forward = true
//! rate_files = ["/srv/rates/sofr.csv"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sofr_accrual::{RateIndex, DEFAULT_LOOKBACK_DAYS, MAX_LOOKBACK_DAYS};
use sofr_core::daycounts::DayCountConvention;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Effective CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Day count used when `--day-count` is not given.
    pub day_count: DayCountConvention,
    /// Rate index used when `--rate-index` is not given.
    pub rate_index: RateIndex,
    /// Lookback used when `--lookback` is not given; 0 observes the accrual date.
    pub lookback_days: u32,
    /// Fill weekend and holiday gaps with the last published fixing.
    pub carry_forward: bool,
    /// Largest accrual or listing range accepted, in days.
    pub max_range_days: i64,
    /// Decimal places shown in tables.
    pub precision: u32,
    /// Default output format.
    pub format: OutputFormat,
    /// Rate files loaded when no `--rates` flag is given.
    pub rate_files: Vec<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            day_count: DayCountConvention::Act360,
            rate_index: RateIndex::SofrDailySimple,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            carry_forward: true,
            max_range_days: 3660,
            precision: 6,
            format: OutputFormat::Table,
            rate_files: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. The default location is optional and
    /// yields the built-in defaults when absent. Returns the settings and the
    /// file they were read from, if any.
    pub fn load(path: Option<&Path>) -> CliResult<(Self, Option<PathBuf>)> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_path() {
                Some(p) => (p, false),
                None => return Ok((Self::default(), None)),
            },
        };

        if !path.exists() {
            if required {
                return Err(CliError::Config(format!(
                    "{} does not exist",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok((Self::default(), None));
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded config");
        Ok((config, Some(path)))
    }

    /// Parses and validates settings from TOML text.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::Config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> CliResult<()> {
        if self.lookback_days > MAX_LOOKBACK_DAYS {
            return Err(CliError::Config(format!(
                "lookback_days must be between 0 and {MAX_LOOKBACK_DAYS}, got {}",
                self.lookback_days
            )));
        }
        if self.max_range_days < 1 {
            return Err(CliError::Config(format!(
                "max_range_days must be positive, got {}",
                self.max_range_days
            )));
        }
        if self.precision > 12 {
            return Err(CliError::Config(format!(
                "precision must be between 0 and 12, got {}",
                self.precision
            )));
        }
        Ok(())
    }

    /// Renders the settings as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Default config file location.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("sofr").join("config.toml"))
}
