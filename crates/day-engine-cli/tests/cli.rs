use assert_cmd::Command;
use predicates::prelude::*;

fn days() -> Command {
    let mut cmd = Command::cargo_bin("days").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn offset_json(args: &[&str]) -> serde_json::Value {
    let output = days().arg("offset").args(args).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// ── offset ──────────────────────────────────────────────────────────────

#[test]
fn test_offset_repeating_christmas() {
    let json = offset_json(&["2000-12-25", "--repeats", "--today", "2023-12-20"]);
    assert_eq!(json["result"]["count"], 5.0);
    assert_eq!(json["result"]["direction"], "down");
    assert_eq!(json["result"]["is_today"], false);
    assert_eq!(json["result"]["target"], "2023-12-25");
    assert_eq!(json["display"]["value"], 5.0);
}

#[test]
fn test_offset_week_rounded() {
    let json = offset_json(&[
        "2023-01-28",
        "--today",
        "2023-01-01",
        "--unit",
        "week",
        "--decimals",
        "2",
        "--round",
    ]);
    assert_eq!(json["result"]["unit"], "week");
    assert_eq!(json["display"]["value"], 3.86);
}

#[test]
fn test_offset_past_counts_up() {
    let json = offset_json(&["2023-01-01", "--today", "2023-03-01", "-u", "months"]);
    assert_eq!(json["result"]["count"], -2.0);
    assert_eq!(json["result"]["direction"], "up");
    assert_eq!(json["display"]["value"], 2.0);
}

#[test]
fn test_offset_leap_day_policy() {
    let json = offset_json(&[
        "2000-02-29",
        "--repeats",
        "--today",
        "2023-02-01",
        "--leap-day",
        "mar1",
    ]);
    assert_eq!(json["result"]["target"], "2023-03-01");
}

#[test]
fn test_offset_pretty_output() {
    days()
        .args(["offset", "2023-01-02", "--today", "2023-01-01", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"result\": {"));
}

#[test]
fn test_offset_invalid_date() {
    days()
        .args(["offset", "25/12/2000", "--today", "2023-12-20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_offset_invalid_unit() {
    days()
        .args(["offset", "2023-01-01", "--unit", "fortnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid unit"));
}

#[test]
fn test_offset_invalid_timezone() {
    days()
        .args(["offset", "2023-01-01", "--timezone", "Invalid/Zone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn test_verbose_logs_resolution() {
    days()
        .args(["-v", "offset", "2000-12-25", "--repeats", "--today", "2023-12-20"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved repeating"));
}

// ── round / truncate ────────────────────────────────────────────────────

#[test]
fn test_round_command() {
    days()
        .args(["round", "1.555", "2"])
        .assert()
        .success()
        .stdout("1.56\n");
}

#[test]
fn test_round_negative_decimals() {
    days()
        .args(["round", "1.99", "-1"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_truncate_negative_decimals() {
    days()
        .args(["truncate", "1.99", "-1"])
        .assert()
        .success()
        .stdout("1\n");
}
