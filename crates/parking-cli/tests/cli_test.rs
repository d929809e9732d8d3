//! End-to-end tests for the parking-fee binary
//!
//! HOME and XDG_CONFIG_HOME point at a temp dir so the user's config is never read.

use std::io::Write;
use std::process::{Command, Output};

fn run(config_home: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parking-fee"))
        .args(args)
        .env("HOME", config_home)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run parking-fee")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_quote_table() {
    let home = tempfile::tempdir().unwrap();
    let output = run(home.path(), &["quote", "--hours", "3", "--vehicle", "car"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Fee:             11"));
}

#[test]
fn test_quote_json_capped() {
    let home = tempfile::tempdir().unwrap();
    let output = run(home.path(), &["-f", "json", "quote", "-H", "10", "-c", "BUS"]);
    assert!(output.status.success());
    let quote: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(quote["fee"], 60);
    assert_eq!(quote["raw_fee"], 73);
    assert_eq!(quote["capped"], true);
    assert_eq!(quote["category"], "bus");
}

#[test]
fn test_rejected_quote_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = run(home.path(), &["quote", "--hours", "2", "--vehicle", "van"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid vehicle category"));
}

#[test]
fn test_sentinel_mode_prints_minus_one() {
    let home = tempfile::tempdir().unwrap();
    let set = run(home.path(), &["config", "--set-sentinel", "true"]);
    assert!(set.status.success());

    let output = run(home.path(), &["quote", "--hours", "-1", "--vehicle", "car"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "-1");
}

#[test]
fn test_rates_json() {
    let home = tempfile::tempdir().unwrap();
    let output = run(home.path(), &["rates", "--format", "json"]);
    assert!(output.status.success());
    let rates: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rates.as_array().unwrap().len(), 3);
    assert_eq!(rates[1]["category"], "motorcycle");
    assert_eq!(rates[1]["daily_max"], 18);
}

#[test]
fn test_batch_report() {
    let home = tempfile::tempdir().unwrap();
    let csv_path = home.path().join("sessions.csv");
    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "ticket,hours,vehicle").unwrap();
    writeln!(file, "T1,3,car").unwrap();
    writeln!(file, "T2,abc,car").unwrap();
    drop(file);

    let output = run(home.path(), &["batch", "--csv", csv_path.to_str().unwrap()]);
    assert!(output.status.success());
    let report = stdout(&output);
    assert!(report.contains("Parking Fee Report"));
    assert!(report.contains("Rejected:         1"));
}

#[test]
fn test_batch_missing_file() {
    let home = tempfile::tempdir().unwrap();
    let output = run(home.path(), &["batch", "--csv", "does-not-exist.csv"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
}

#[test]
fn test_reset_repairs_corrupt_config() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join("parking-fee");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.json"), "not json").unwrap();

    let broken = run(home.path(), &["rates"]);
    assert!(!broken.status.success());

    let reset = run(home.path(), &["config", "--reset", "--show"]);
    assert!(reset.status.success());
    let shown = stdout(&reset);
    assert!(shown.contains("Configuration reset to defaults."));
    assert!(shown.contains("Output format:   table"));

    let output = run(home.path(), &["quote", "--hours", "1", "--vehicle", "car"]);
    assert!(output.status.success());
}

#[test]
fn test_configured_output_format_and_override() {
    let home = tempfile::tempdir().unwrap();
    let set = run(home.path(), &["config", "--set-output", "json"]);
    assert!(set.status.success());

    let output = run(home.path(), &["quote", "--hours", "3", "--vehicle", "car"]);
    assert!(output.status.success());
    let quote: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(quote["fee"], 11);

    let table = run(home.path(), &["--format", "table", "quote", "--hours", "3", "--vehicle", "car"]);
    assert!(table.status.success());
    assert!(stdout(&table).contains("Fee:             11"));
}
