//! Calc command implementation.
//!
//! Runs a daily simple SOFR accrual and prints the schedule.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use sofr_accrual::{compute_accrual, AccrualResult, DailyAccrualRecord, RawAccrualRequest};

use crate::cli::OutputFormat;
use crate::commands::{check_range, Context, RateSourceArgs};
use crate::output::{format_amount, format_decimal, format_percent, print_header, print_table, KeyValue};

/// Arguments for the calc command.
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Loan principal
    #[arg(short, long, allow_negative_numbers = true)]
    pub principal: f64,

    /// Spread over SOFR in basis points
    #[arg(short, long = "spread-bps", default_value = "0", allow_negative_numbers = true)]
    pub spread_bps: f64,

    /// First accrual date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// Last accrual date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,

    /// Day count convention: ACT_360 or ACT_ACT [default: from config]
    #[arg(short, long)]
    pub day_count: Option<String>,

    /// Rate index [default: from config]
    #[arg(long)]
    pub rate_index: Option<String>,

    /// Observation lookback in calendar days, 0-99 [default: from config]
    #[arg(short, long, allow_negative_numbers = true)]
    pub lookback: Option<f64>,

    /// Print the summary only, without the daily schedule
    #[arg(long)]
    pub summary: bool,

    #[command(flatten)]
    pub source: RateSourceArgs,
}

impl CalcArgs {
    /// Builds the raw request, filling unset options from the config.
    fn raw_request(&self, ctx: &Context) -> RawAccrualRequest {
        RawAccrualRequest {
            principal: self.principal,
            spread_bps: self.spread_bps,
            start_date: self.start.clone(),
            end_date: self.end.clone(),
            day_count: self
                .day_count
                .clone()
                .unwrap_or_else(|| ctx.config.day_count.code().to_string()),
            rate_index: self
                .rate_index
                .clone()
                .unwrap_or_else(|| ctx.config.rate_index.code().to_string()),
            lookback_days: Some(
                self.lookback
                    .unwrap_or_else(|| f64::from(ctx.config.lookback_days)),
            ),
        }
    }
}

/// One row of the daily schedule table.
#[derive(Debug, Serialize, Tabled)]
struct DailyRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Observed")]
    observation_date: String,
    #[tabled(rename = "Base Rate")]
    base_rate: String,
    #[tabled(rename = "All-in Rate")]
    all_in_rate: String,
    #[tabled(rename = "Fraction")]
    day_count_fraction: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Accrued")]
    accrued_to_date: String,
}

impl DailyRow {
    fn new(record: &DailyAccrualRecord, precision: u32) -> Self {
        Self {
            date: record.date.to_string(),
            observation_date: record.observation_date.to_string(),
            base_rate: format_percent(record.base_rate, 4),
            all_in_rate: format_percent(record.all_in_rate, 4),
            day_count_fraction: format_decimal(record.day_count_fraction, precision),
            interest: format_decimal(record.interest, precision),
            accrued_to_date: format_amount(record.accrued_to_date),
        }
    }
}

/// Execute the calc command.
pub fn execute(args: CalcArgs, ctx: &Context) -> Result<()> {
    let request = args.raw_request(ctx).validate()?;
    check_range(request.accrual_days(), &ctx.config)?;

    let store = args.source.load(ctx, request.rate_index)?;
    let (from, to) = request.observation_window()?;
    let fill = args.source.fill_policy(&ctx.config);
    let rates = store.rate_map(request.rate_index, from, to, fill)?;

    let result = compute_accrual(&request, &rates)?;
    info!(
        days = result.days(),
        total_interest = %result.total_interest,
        "accrual computed"
    );

    match ctx.format {
        OutputFormat::Json => crate::output::print_json(&result)?,
        OutputFormat::Table => print_result(&result, args.summary, ctx),
    }

    Ok(())
}

fn summary_rows(result: &AccrualResult, precision: u32) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Rate Index", result.rate_index.code()),
        KeyValue::new("Day Count", result.day_count.name()),
        KeyValue::new(
            "Period",
            format!("{} to {} ({} days)", result.start_date, result.end_date, result.days()),
        ),
        KeyValue::new(
            "Lookback",
            format!("{} days", result.lookback_days.unwrap_or(0)),
        ),
        KeyValue::from_amount("Principal", result.principal),
        KeyValue::new("Spread", format!("{} bps", result.spread_bps.normalize())),
        match result.average_all_in_rate() {
            Some(rate) => KeyValue::from_percent("Avg All-in Rate", rate, 4),
            None => KeyValue::new("Avg All-in Rate", "-"),
        },
        KeyValue::from_decimal("Total Interest (exact)", result.total_interest, precision),
        KeyValue::from_amount("Total Interest", result.total_interest),
        KeyValue::from_amount("Total Amount", result.total_amount),
    ]
}

fn print_result(result: &AccrualResult, summary_only: bool, ctx: &Context) {
    let precision = ctx.config.precision;

    if !ctx.quiet {
        print_header("Accrual Summary");
    }
    print_table(&summary_rows(result, precision));

    if summary_only {
        return;
    }

    let rows: Vec<DailyRow> = result
        .daily
        .iter()
        .map(|r| DailyRow::new(r, precision))
        .collect();
    if !ctx.quiet {
        print_header("Daily Accrual");
    }
    print_table(&rows);
}
