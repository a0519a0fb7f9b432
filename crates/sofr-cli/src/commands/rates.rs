//! Rates command implementation.
//!
//! Lists the daily SOFR fixings available for a range, one row per calendar
//! day, so gaps are visible before running an accrual.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use sofr_accrual::{DailyRate, FillPolicy, RateIndex};
use sofr_core::calendar::enumerate_days_inclusive;
use sofr_core::Date;

use crate::cli::OutputFormat;
use crate::commands::{check_range, Context, RateSourceArgs};
use crate::output::{format_percent, print_header, print_info, print_table, print_warning};

/// Arguments for the rates command.
#[derive(Args, Debug)]
pub struct RatesArgs {
    /// First date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// Last date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,

    /// Rate index [default: from config]
    #[arg(long)]
    pub rate_index: Option<String>,

    /// Show the carry-forward filled rates instead of raw fixings
    #[arg(long)]
    pub filled: bool,

    #[command(flatten)]
    pub source: RateSourceArgs,
}

/// JSON shape of the listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RateListing {
    rate_index: RateIndex,
    start: Date,
    end: Date,
    missing: usize,
    rates: Vec<DailyRate>,
}

#[derive(Debug, Tabled)]
struct RateRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    weekday: String,
    #[tabled(rename = "Rate")]
    rate: String,
}

impl RateRow {
    fn new(entry: &DailyRate) -> Self {
        Self {
            date: entry.date.to_string(),
            weekday: entry.date.weekday().to_string(),
            rate: entry
                .rate
                .map_or_else(|| "-".to_string(), |r| format_percent(r, 4)),
        }
    }
}

/// Execute the rates command.
pub fn execute(args: RatesArgs, ctx: &Context) -> Result<()> {
    let start = Date::parse(&args.start)?;
    let end = Date::parse(&args.end)?;
    let index: RateIndex = match &args.rate_index {
        Some(code) => code.parse()?,
        None => ctx.config.rate_index,
    };
    let days = enumerate_days_inclusive(start, end)?.len();
    check_range(i64::try_from(days).unwrap_or(i64::MAX), &ctx.config)?;

    let store = args.source.load(ctx, index)?;
    let rates = if args.filled {
        filled_rates(&store, index, start, end, args.source.fill_policy(&ctx.config))?
    } else {
        store.daily_rates(index, start, end)?
    };

    let missing = rates.iter().filter(|r| r.rate.is_none()).count();
    let listing = RateListing {
        rate_index: index,
        start,
        end,
        missing,
        rates,
    };

    match ctx.format {
        OutputFormat::Json => crate::output::print_json(&listing)?,
        OutputFormat::Table => print_listing(&listing, ctx),
    }

    Ok(())
}

fn filled_rates(
    store: &sofr_accrual::FixingStore,
    index: RateIndex,
    start: Date,
    end: Date,
    fill: FillPolicy,
) -> Result<Vec<DailyRate>> {
    let map = store.rate_map(index, start, end, fill)?;
    let days = sofr_core::calendar::enumerate_days_inclusive(start, end)?;
    Ok(days
        .map(|date| DailyRate {
            date,
            rate: map.get(date),
        })
        .collect())
}

fn print_listing(listing: &RateListing, ctx: &Context) {
    if !ctx.quiet {
        print_header(&format!(
            "{} fixings {} to {}",
            listing.rate_index, listing.start, listing.end
        ));
    }

    let rows: Vec<RateRow> = listing.rates.iter().map(RateRow::new).collect();
    print_table(&rows);

    if listing.missing > 0 {
        print_warning(&format!(
            "{} of {} days have no fixing",
            listing.missing,
            listing.rates.len()
        ));
    } else if !ctx.quiet {
        print_info("Every day has a rate");
    }
}
