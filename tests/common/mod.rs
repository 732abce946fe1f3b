#![allow(dead_code)]

use std::sync::Mutex;

use once_cell::sync::Lazy;
use pocket_ledger::{
    core::{clock::FixedClock, LedgerState},
    domain::MonthKey,
    storage::{JsonFileStore, PersistentStore},
};
use tempfile::TempDir;

/// Keeps TempDir guards alive for the whole test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const STAMP: &str = "3/15/2026, 9:03:12 AM";

pub fn month(index: u8) -> MonthKey {
    MonthKey::new(index).expect("valid month index")
}

pub fn clock() -> FixedClock {
    FixedClock(STAMP.to_string())
}

/// A file-backed store in a fresh directory that outlives the test.
pub fn file_store() -> (PersistentStore, std::path::PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let root = temp.path().join("store");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    let backend = JsonFileStore::new(root.clone()).expect("create json store");
    (PersistentStore::new(Box::new(backend)), root)
}

pub fn reopen(root: &std::path::Path, selected: MonthKey) -> LedgerState {
    let backend = JsonFileStore::new(root.to_path_buf()).expect("reopen json store");
    LedgerState::load(&PersistentStore::new(Box::new(backend)), selected, "₹")
        .expect("reload ledger state")
}
