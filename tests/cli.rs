use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn housesplit(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("housesplit").unwrap();
    cmd.env("HOUSESPLIT_DATA_DIR", home)
        .env_remove("HOUSESPLIT_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn demo(names: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("household.json");

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .arg("demo")
        .args(names)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created demo household"));

    (dir, file)
}

#[test]
fn balances_table_lists_every_member() {
    let (dir, file) = demo(&["Alice", "Bob", "Cara"]);

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .arg("balances")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balances for Demo Household"))
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Cara"));
}

#[test]
fn plan_for_two_member_demo() {
    let (dir, file) = demo(&["Alice", "Bob"]);

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggested payments ($31.06 total)"));
}

#[test]
fn settling_the_plan_clears_balances() {
    let (dir, file) = demo(&["Alice", "Bob"]);

    // A settlement debits its sender and credits its receiver
    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .args(["settle", "Alice", "Bob", "31.06", "--note", "Square up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded settlement"));

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Everyone is settled up!"));
}

#[test]
fn report_json_has_plan_and_flags() {
    let (dir, file) = demo(&["Alice", "Bob"]);

    let output = housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .args(["report", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["report"]["household_name"], "Demo Household");
    assert_eq!(value["report"]["all_settled"], false);
    assert_eq!(value["report"]["plan"][0]["from_name"], "Bob");
    assert_eq!(value["report"]["plan"][0]["amount"], 3106);
}

#[test]
fn expense_is_added_to_ledger() {
    let (dir, file) = demo(&["Alice", "Bob"]);

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .args([
            "expense",
            "Paper towels",
            "12.00",
            "--payer",
            "Bob",
            "--category",
            "groceries",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("split 2 ways"));

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .args(["ledger", "--search", "paper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paper towels"))
        .stdout(predicate::str::contains("Showing 1 of 8 entries"));
}

#[test]
fn invalid_expense_is_rejected() {
    let (dir, file) = demo(&["Alice", "Bob"]);

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .args([
            "expense", "Odd split", "10.00", "--payer", "Alice", "--share", "Alice=3", "--share",
            "Bob=3",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("don't add up"));
}

#[test]
fn ledger_category_filter_and_csv() {
    let (dir, file) = demo(&["Alice", "Bob"]);

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .args(["ledger", "--category", "dining"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizza night"))
        .stdout(predicate::str::contains("Netflix").not());

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .args(["ledger", "--csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ID,Date,Type,Description,Category,Payer,From,To,Amount",
        ));
}

#[test]
fn spending_lists_largest_category_first() {
    let (dir, file) = demo(&["Alice", "Bob"]);

    let output = housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .arg("spending")
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let utilities = text.find("Utilities").unwrap();
    let dining = text.find("Dining").unwrap();
    assert!(utilities < dining);
    assert!(text.contains("Total: $357.37 across 6 expenses"));
}

#[test]
fn split_preview_puts_remainder_first() {
    let dir = TempDir::new().unwrap();

    housesplit(dir.path())
        .args(["split", "100", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Person 1: $33.34"))
        .stdout(predicate::str::contains("Person 3: $33.33"));
}

#[test]
fn demo_does_not_overwrite_without_force() {
    let (dir, file) = demo(&["Alice", "Bob"]);

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .args(["demo", "Cara", "Dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .args(["demo", "Cara", "Dev", "--force"])
        .assert()
        .success();
}

#[test]
fn missing_snapshot_is_an_error() {
    let dir = TempDir::new().unwrap();

    housesplit(dir.path())
        .arg("--file")
        .arg(dir.path().join("nope.json"))
        .arg("balances")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load"));
}

#[test]
fn unknown_household_is_reported() {
    let (dir, file) = demo(&["Alice", "Bob"]);

    housesplit(dir.path())
        .arg("--file")
        .arg(&file)
        .args(["balances", "--household", "Elm Street"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Household not found"));
}
