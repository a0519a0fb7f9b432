//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Workspace targets that receive the verbosity level.
const CRATE_TARGETS: &[&str] = &["sofr", "sofr_cli", "sofr_core", "sofr_accrual"];

/// Maps `-v` occurrences to a level; `quiet` wins over verbosity.
///
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
fn level(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn default_filter(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` overrides the command-line level when set. Library `log`
/// records are forwarded through the subscriber's log bridge.
pub fn init(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level(verbosity, quiet))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
