use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script(home: &TempDir, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("bank_core_cli")
        .unwrap()
        .env("BANK_CORE_CLI_SCRIPT", "1")
        .env("BANK_CORE_HOME", home.path())
        .env("RUST_LOG", "off")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn login_deposit_summary_flow() {
    let home = TempDir::new().unwrap();
    script(
        &home,
        "login dxngrg2058@gmail.com 2222\ndeposit 100 \"Satya Dahal\" Rent\nsummary\nexit\n",
    )
    .success()
    .stdout(contains("Welcome back, Dikshan"))
    .stdout(contains("Balance: Rs: 350"))
    .stdout(contains("Satya Dahal, Rent"));
}

#[test]
fn account_commands_need_login() {
    let home = TempDir::new().unwrap();
    script(&home, "deposit 100 Someone\nexit\n")
        .success()
        .stdout(contains("Not logged in"));
}

#[test]
fn wrong_pin_is_reported() {
    let home = TempDir::new().unwrap();
    script(&home, "login dxngrg2058@gmail.com 0000\nwhoami\n")
        .success()
        .stdout(contains("Invalid email or PIN"))
        .stdout(contains("Not logged in."));
}

#[test]
fn export_prints_statement_json_without_pin() {
    let home = TempDir::new().unwrap();
    script(&home, "login dxngrg2048@gmail.com 2222\nexport\n")
        .success()
        .stdout(contains("\"owner\": \"Satya Prakash Dahal\""))
        .stdout(contains("\"pin\"").not());
}

#[test]
fn config_set_is_persisted_under_home() {
    let home = TempDir::new().unwrap();
    script(&home, "config set currency_label USD\n").success();
    let saved = std::fs::read_to_string(home.path().join("config").join("config.json")).unwrap();
    assert!(saved.contains("\"currency_label\": \"USD\""));
}

#[test]
fn unknown_command_suggests_closest() {
    let home = TempDir::new().unwrap();
    script(&home, "depost\n")
        .success()
        .stdout(contains("Suggestion: `deposit`?"));
}

#[test]
fn approve_by_hash_position_credits_account() {
    let home = TempDir::new().unwrap();
    script(
        &home,
        "login dxngrg2048@gmail.com 2222\n# approve the last queued loan\napprove #4\nsummary\n",
    )
    .success()
    .stdout(contains("Approved Nrs. 200 from Sushant Poudel."))
    .stdout(contains("Balance: Rs: 450"))
    .stdout(contains("Usage:").not());
}
