use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;
use tempfile::TempDir;

fn shell(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocket_ledger_cli").unwrap();
    cmd.env("POCKET_LEDGER_CLI_SCRIPT", "1")
        .env("POCKET_LEDGER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_records_and_persists_entries() {
    let home = TempDir::new().unwrap();
    shell(&home)
        .write_stdin("month march\nadd \"Coffee\" -4.50\nbudget 100\nexit\n")
        .assert()
        .success()
        .stdout(contains("=== March ==="))
        .stdout(contains("Total: ₹-4.50"))
        .stdout(contains("Budget: ₹100.00"))
        .stdout(contains("Spent ₹-4.50 | Remaining ₹104.50"));

    let stored = fs::read_to_string(home.path().join("store").join("transactions.json")).unwrap();
    let stamp = Regex::new(r#""timestamp":"\d{1,2}/\d{1,2}/\d{4}, \d{1,2}:\d{2}:\d{2} (AM|PM)""#)
        .unwrap();
    assert!(stamp.is_match(&stored), "unexpected timestamp in {stored}");
    assert!(stored.starts_with(r#"{"2":[{"desc":"Coffee","amount":-4.5"#));
}

#[test]
fn confirmation_answer_comes_from_environment() {
    let home = TempDir::new().unwrap();
    shell(&home)
        .write_stdin("month 0\nbudget 100\nexit\n")
        .assert()
        .success();

    shell(&home)
        .env("POCKET_LEDGER_CONFIRM", "no")
        .write_stdin("month 0\nbudget 150\nexit\n")
        .assert()
        .success()
        .stdout(contains("Budget unchanged."))
        .stdout(contains("Budget: ₹100.00"));

    shell(&home)
        .write_stdin("month 0\nbudget 150\nexit\n")
        .assert()
        .success()
        .stdout(contains("Budget for January set to ₹150.00."));
}

#[test]
fn errors_are_reported_and_the_session_continues() {
    let home = TempDir::new().unwrap();
    shell(&home)
        .write_stdin("remove 3\nadd Lunch twelve\nbuget 5\nversion\nexit\n")
        .assert()
        .success()
        .stdout(contains("There is no entry #3"))
        .stdout(contains("ERROR: Please enter a valid amount."))
        .stdout(contains("Suggestion: `budget`?"))
        .stdout(contains("Pocket Ledger"));
}

#[test]
fn tags_and_currency_flow_into_the_view() {
    let home = TempDir::new().unwrap();
    shell(&home)
        .write_stdin(
            "currency $\ntag new app Wallet\ntag select app Wallet\nadd Taxi -12\ntag\nexit\n",
        )
        .assert()
        .success()
        .stdout(contains("Wallet"))
        .stdout(contains("App:         GPay PhonePe Paytm [Wallet]"))
        .stdout(contains("Total: $-12.00"));

    let currency = fs::read_to_string(home.path().join("store").join("currency.json")).unwrap();
    assert_eq!(currency, r#""$""#);
}

#[test]
fn corrupted_store_stops_startup() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("store")).unwrap();
    fs::write(home.path().join("store").join("transactions.json"), "[oops").unwrap();

    shell(&home)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(contains("Error:").and(contains("transactions")));
}
