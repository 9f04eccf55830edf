#![allow(dead_code)]

use std::sync::Mutex;

use bank_core::{
    config::ConfigManager,
    ledger::{sample_bank, Bank, Session, SAMPLE_PIN},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const DIKSHAN: &str = "dxngrg2058@gmail.com";
pub const SATYA: &str = "dxngrg2048@gmail.com";
pub const KUSHAL: &str = "dxngrg2038@gmail.com";

/// Creates a config manager backed by a unique directory for each test.
pub fn setup_config() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}

/// Sample bank with `email` already signed in.
pub fn bank_with_session(email: &str) -> (Bank, Session) {
    let bank = sample_bank();
    let session = bank.login(email, SAMPLE_PIN).expect("sample login");
    (bank, session)
}

pub fn amounts(bank: &Bank, session: &Session) -> Vec<f64> {
    bank.account(session)
        .expect("account")
        .transactions()
        .iter()
        .map(|txn| txn.amount)
        .collect()
}
