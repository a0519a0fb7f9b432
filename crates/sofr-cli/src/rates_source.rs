//! Loading SOFR fixings from local files.
//!
//! Three layouts are understood:
//!
//! - CSV with a `date,rate` header, rate as a decimal (`0.0525`)
//! - JSON array of `{"date": "...", "rate": 0.0525}` objects, or a JSON
//!   object mapping dates to rates
//! - the NY Fed reference rate download, `{"refRates": [...]}`, whose
//!   `percentRate` is quoted in percent and converted to a decimal
//!
//! Nothing is fetched over the network.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use tracing::{debug, info};

use sofr_accrual::{FixingStore, IndexFixing, RateIndex};
use sofr_core::Date;

use crate::error::{CliError, CliResult};

/// CSV row: `date,rate`.
#[derive(Debug, Deserialize)]
struct CsvRateRecord {
    date: String,
    rate: String,
}

/// JSON row: `{"date": ..., "rate": ...}`.
#[derive(Debug, Deserialize)]
struct JsonRateRecord {
    date: String,
    rate: Decimal,
}

/// One entry of the NY Fed `refRates` array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NyFedRate {
    #[serde(rename = "type")]
    rate_type: Option<String>,
    effective_date: Option<String>,
    percent_rate: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonRates {
    NyFed {
        #[serde(rename = "refRates")]
        ref_rates: Vec<NyFedRate>,
    },
    Rows(Vec<JsonRateRecord>),
    ByDate(BTreeMap<String, Decimal>),
}

/// Demo fixings for 2026-01-01 through 2026-01-10.
pub fn demo_fixings() -> CliResult<Vec<IndexFixing>> {
    let rates = [
        dec!(0.0525),
        dec!(0.0525),
        dec!(0.0526),
        dec!(0.0526),
        dec!(0.0527),
        dec!(0.0527),
        dec!(0.0528),
        dec!(0.0528),
        dec!(0.0529),
        dec!(0.0529),
    ];
    let first = Date::from_ymd(2026, 1, 1)?;
    rates
        .into_iter()
        .zip(0i64..)
        .map(|(rate, offset)| -> CliResult<IndexFixing> {
            Ok(IndexFixing::new(
                first.shift(offset)?,
                RateIndex::SofrDailySimple,
                rate,
            ))
        })
        .collect()
}

/// Loads every fixing in `path`, choosing the layout by extension.
pub fn load_rate_file(path: &Path, index: RateIndex) -> CliResult<Vec<IndexFixing>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let fixings = match extension.as_deref() {
        Some("csv") => load_csv(path, index)?,
        Some("json") => load_json(path, index)?,
        _ => {
            return Err(CliError::rate_file(
                path,
                "unknown extension; expected .csv or .json",
            ))
        }
    };

    info!(path = %path.display(), count = fixings.len(), "loaded fixings");
    Ok(fixings)
}

fn load_csv(path: &Path, index: RateIndex) -> CliResult<Vec<IndexFixing>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| CliError::rate_file(path, e))?;

    let mut fixings = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let record: CsvRateRecord = result.map_err(|e| CliError::rate_file(path, e))?;
        // header is line 1
        let line = row + 2;
        let rate = Decimal::from_str(&record.rate).map_err(|_| {
            CliError::rate_file(path, format!("line {line}: invalid rate '{}'", record.rate))
        })?;
        fixings.push(fixing(path, &record.date, rate, index, &format!("line {line}"))?);
    }
    Ok(fixings)
}

fn load_json(path: &Path, index: RateIndex) -> CliResult<Vec<IndexFixing>> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::rate_file(path, e))?;
    let parsed: JsonRates = serde_json::from_str(&content).map_err(|_| {
        CliError::rate_file(
            path,
            "expected an array of {date, rate}, a date-to-rate object, or a NY Fed refRates download",
        )
    })?;
    parse_json_rates(path, parsed, index)
}

fn parse_json_rates(path: &Path, parsed: JsonRates, index: RateIndex) -> CliResult<Vec<IndexFixing>> {
    match parsed {
        JsonRates::NyFed { ref_rates } => {
            let total = ref_rates.len();
            let fixings = ref_rates
                .into_iter()
                .enumerate()
                .filter_map(|(i, r)| match (r.rate_type.as_deref(), r.effective_date, r.percent_rate) {
                    (Some("SOFR"), Some(date), Some(percent)) => Some((i, date, percent)),
                    _ => None,
                })
                .map(|(i, date, percent)| {
                    fixing(path, &date, percent / Decimal::ONE_HUNDRED, index, &format!("refRates[{i}]"))
                })
                .collect::<CliResult<Vec<_>>>()?;
            debug!(total, kept = fixings.len(), "filtered NY Fed download to SOFR");
            Ok(fixings)
        }
        JsonRates::Rows(rows) => rows
            .into_iter()
            .enumerate()
            .map(|(i, r)| fixing(path, &r.date, r.rate, index, &format!("entry {i}")))
            .collect(),
        JsonRates::ByDate(map) => map
            .into_iter()
            .map(|(date, rate)| fixing(path, &date, rate, index, &date))
            .collect(),
    }
}

fn fixing(
    path: &Path,
    date: &str,
    rate: Decimal,
    index: RateIndex,
    location: &str,
) -> CliResult<IndexFixing> {
    let date = Date::parse(date).map_err(|e| CliError::rate_file(path, format!("{location}: {e}")))?;
    if rate < Decimal::ZERO {
        return Err(CliError::rate_file(
            path,
            format!("{location}: negative rate {rate}"),
        ));
    }
    Ok(IndexFixing::new(date, index, rate))
}

/// Builds the fixing store from files and, if asked, the demo fixings.
///
/// Later sources overwrite earlier ones on the same date.
pub fn build_store(files: &[PathBuf], demo: bool, index: RateIndex) -> CliResult<FixingStore> {
    if files.is_empty() && !demo {
        return Err(CliError::NoRateSource);
    }

    let mut store = FixingStore::new();
    if demo {
        store.add_fixings(demo_fixings()?);
        info!("seeded demo fixings 2026-01-01..=2026-01-10");
    }
    for file in files {
        store.add_fixings(load_rate_file(file, index)?);
    }

    debug!(count = store.count(index), "fixing store ready");
    Ok(store)
}
