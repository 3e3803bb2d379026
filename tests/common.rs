#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimeline::models::{EventRecord, Table};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn rti() -> Command {
    cargo_bin_cmd!("rtimeline")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing store and audit log
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeline.csv", name));
    let store = path.to_string_lossy().to_string();
    fs::remove_file(&store).ok();
    fs::remove_file(format!("{}.log", store)).ok();
    store
}

/// Same as `setup_test_store`, for a workbook-backed store
pub fn setup_test_workbook(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeline.xlsx", name));
    let store = path.to_string_lossy().to_string();
    fs::remove_file(&store).ok();
    fs::remove_file(format!("{}.log", store)).ok();
    store
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Same file as `path`, reached through `<dir>/../<dir>/<name>`
pub fn alias_of(path: &str) -> String {
    let p = Path::new(path);
    let dir = p.parent().expect("parent dir");
    let alias = dir
        .join("..")
        .join(dir.file_name().expect("dir name"))
        .join(p.file_name().expect("file name"));
    alias.to_string_lossy().to_string()
}

/// Add an event through the CLI form
pub fn add(store: &str, sole: &str, start: &str, finish: &str, event: &str) {
    rti()
        .args([
            "--store", store, "--test", "add", "--sole", sole, "--start", start, "--finish",
            finish, "--event", event,
        ])
        .assert()
        .success();
}

/// Init the store and add a small dataset useful for many tests
pub fn init_store_with_data(store: &str) {
    rti()
        .args(["--store", store, "--test", "init"])
        .assert()
        .success();

    add(store, "Ada Lovelace", "1842-10-01", "1843-09-01", "Notes on the Engine");
    add(store, "Ada Lovelace", "1815-12-10", "1815-12-10", "Born");
    add(store, "Charles Babbage", "1822-06-14", "1822-06-14", "Difference Engine proposal");
    add(store, "Charles Babbage", "1834-01-01", "1871-10-18", "Analytical Engine");
}

pub fn rec(sole: &str, start: &str, finish: &str) -> EventRecord {
    EventRecord::new(sole, start, finish, "", "")
}

pub fn table(rows: &[(&str, &str, &str)]) -> Table {
    Table::new(rows.iter().map(|(s, a, b)| rec(s, a, b)).collect())
}
