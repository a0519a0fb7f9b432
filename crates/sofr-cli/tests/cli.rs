//! End-to-end tests for the `sofr` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from any user config: points `--config` at a file in
/// `dir`, created empty unless a test wrote it first.
fn sofr(dir: &TempDir) -> Command {
    let config = dir.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    let mut cmd = Command::cargo_bin("sofr").unwrap();
    cmd.env_remove("RUST_LOG").arg("--config").arg(config);
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn calc_demo_with_lookback() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(sofr(&dir).args([
        "-f",
        "json",
        "calc",
        "--principal",
        "1000000",
        "--spread-bps",
        "250",
        "--start",
        "2026-01-06",
        "--end",
        "2026-01-10",
        "--demo",
    ]));

    let daily = json["daily"].as_array().unwrap();
    assert_eq!(daily.len(), 5);
    assert_eq!(daily[0]["date"], "2026-01-06");
    assert_eq!(daily[0]["observationDate"], "2026-01-01");
    assert_eq!(json["lookbackDays"], 5);
    assert_eq!(json["dayCount"], "ACT_360");

    // (0.2629 + 5 × 0.025) × 1,000,000 / 360
    let total = json["totalInterest"].as_f64().unwrap();
    assert!((total - 1077.50).abs() < 0.01, "{total}");
    let amount = json["totalAmount"].as_f64().unwrap();
    assert!((amount - 1_001_077.50).abs() < 0.01, "{amount}");
}

#[test]
fn calc_demo_without_lookback_covers_ten_days() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(sofr(&dir).args([
        "-f",
        "json",
        "calc",
        "-p",
        "1000000",
        "--start",
        "2026-01-01",
        "--end",
        "2026-01-10",
        "-l",
        "0",
        "--demo",
    ]));

    let daily = json["daily"].as_array().unwrap();
    assert_eq!(daily.len(), 10);
    assert!(daily.iter().all(|r| r["date"] == r["observationDate"]));
    let last = daily[9]["accruedToDate"].as_f64().unwrap();
    assert_eq!(last, json["totalInterest"].as_f64().unwrap());
}

#[test]
fn calc_table_output() {
    let dir = TempDir::new().unwrap();
    sofr(&dir)
        .args([
            "calc", "-p", "1000000", "-s", "250", "--start", "2026-01-06", "--end", "2026-01-10",
            "--demo",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Interest"))
        .stdout(predicate::str::contains("1,077.50"))
        .stdout(predicate::str::contains("2026-01-06"));
}

#[test]
fn calc_lookback_before_first_fixing_fails() {
    let dir = TempDir::new().unwrap();
    sofr(&dir)
        .args([
            "calc", "-p", "1000000", "--start", "2026-01-01", "--end", "2026-01-10", "--demo",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No fixing on or before 2025-12-27"));
}

#[test]
fn calc_exact_reports_missing_weekend() {
    let dir = TempDir::new().unwrap();
    let rates = write(
        &dir,
        "sofr.csv",
        "date,rate\n2026-01-02,0.0431\n2026-01-05,0.0433\n2026-01-06,0.0435\n",
    );
    sofr(&dir)
        .args(["calc", "-p", "250000", "--start", "2026-01-02", "--end", "2026-01-06"])
        .args(["-l", "0", "--exact", "--rates"])
        .arg(&rates)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing base rate for 2026-01-03"))
        .stderr(predicate::str::contains("Import SOFR rates"));
}

#[test]
fn calc_carry_forward_fills_weekend() {
    let dir = TempDir::new().unwrap();
    let rates = write(
        &dir,
        "sofr.json",
        r#"[{"date":"2026-01-02","rate":0.0431},{"date":"2026-01-05","rate":0.0433}]"#,
    );
    let json = json_stdout(
        sofr(&dir)
            .args(["-f", "json", "calc", "-p", "250000", "--start", "2026-01-02"])
            .args(["--end", "2026-01-05", "-l", "0", "--rates"])
            .arg(&rates),
    );
    let base: Vec<f64> = json["daily"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["baseRate"].as_f64().unwrap())
        .collect();
    let expected = [0.0431, 0.0431, 0.0431, 0.0433];
    assert_eq!(base.len(), expected.len());
    assert!(base.iter().zip(expected).all(|(a, b)| (a - b).abs() < 1e-12), "{base:?}");
}

#[test]
fn calc_config_sets_day_count_and_lookback() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "config.toml",
        "day_count = \"ACT_ACT\"\nlookback_days = 2\nformat = \"json\"\n",
    );
    let json = json_stdout(sofr(&dir).args([
        "calc", "-p", "1000", "--start", "2026-01-03", "--end", "2026-01-04", "--demo",
    ]));
    assert_eq!(json["dayCount"], "ACT_ACT");
    assert_eq!(json["daily"][0]["observationDate"], "2026-01-01");
}

#[test]
fn calc_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();
    let cases: [(&[&str], &str); 5] = [
        (&["-p", "0"], "Invalid principal"),
        (&["-p", "100", "-s", "-5"], "Invalid spread"),
        (&["-p", "100", "-l", "100"], "Invalid lookback"),
        (&["-p", "100", "-d", "30/360"], "Unsupported day count"),
        (&["-p", "100", "--rate-index", "TERM_SOFR_ACT360"], "Unsupported rate index"),
    ];
    for (extra, message) in cases {
        sofr(&dir)
            .arg("calc")
            .args(extra)
            .args(["--start", "2026-01-06", "--end", "2026-01-10", "--demo"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(message));
    }
}

#[test]
fn calc_rejects_bad_dates() {
    let dir = TempDir::new().unwrap();
    sofr(&dir)
        .args(["calc", "-p", "100", "--start", "2026-1-6", "--end", "2026-01-10", "--demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    sofr(&dir)
        .args(["calc", "-p", "100", "--start", "2026-01-10", "--end", "2026-01-06", "--demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
}

#[test]
fn calc_requires_rate_source() {
    let dir = TempDir::new().unwrap();
    sofr(&dir)
        .args(["calc", "-p", "100", "--start", "2026-01-06", "--end", "2026-01-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No rate source"));
}

#[test]
fn calc_range_cap() {
    let dir = TempDir::new().unwrap();
    write(&dir, "config.toml", "max_range_days = 5\n");
    sofr(&dir)
        .args(["calc", "-p", "100", "--start", "2026-01-06", "--end", "2026-01-11", "--demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit is 5"));
}

#[test]
fn rates_range_cap_and_order() {
    let dir = TempDir::new().unwrap();
    write(&dir, "config.toml", "max_range_days = 5\n");
    sofr(&dir)
        .args(["rates", "--start", "2026-01-01", "--end", "2026-01-06", "--demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("spans 6 days"));

    sofr(&dir)
        .args(["rates", "--start", "2026-01-06", "--end", "2026-01-01", "--demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
}

#[test]
fn rates_lists_gaps() {
    let dir = TempDir::new().unwrap();
    let rates = write(
        &dir,
        "nyfed.json",
        r#"{"refRates":[
            {"effectiveDate":"2026-01-05","type":"SOFR","percentRate":3.64},
            {"effectiveDate":"2026-01-02","type":"SOFR","percentRate":3.71}
        ]}"#,
    );
    let json = json_stdout(
        sofr(&dir)
            .args(["-f", "json", "rates", "--start", "2026-01-02", "--end", "2026-01-05", "--rates"])
            .arg(&rates),
    );
    assert_eq!(json["missing"], 2);
    let listed = json["rates"].as_array().unwrap();
    assert_eq!(listed.len(), 4);
    assert!(listed[1]["rate"].is_null());
    assert!((listed[0]["rate"].as_f64().unwrap() - 0.0371).abs() < 1e-12);
}

#[test]
fn rates_table_warns_on_gaps() {
    let dir = TempDir::new().unwrap();
    sofr(&dir)
        .args(["rates", "--start", "2026-01-09", "--end", "2026-01-12", "--demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.2900%"))
        .stderr(predicate::str::contains("2 of 4 days have no fixing"));
}

#[test]
fn config_show_json() {
    let dir = TempDir::new().unwrap();
    write(&dir, "config.toml", "precision = 4\n");
    let json = json_stdout(sofr(&dir).args(["-f", "json", "config", "show"]));
    assert_eq!(json["precision"], 4);
    assert_eq!(json["day_count"], "ACT_360");
    assert_eq!(json["lookback_days"], 5);
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    write(&dir, "config.toml", "lookback_days = 200\n");
    sofr(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lookback_days"));
}
