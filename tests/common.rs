#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtl() -> Command {
    cargo_bin_cmd!("rtasklog")
}

/// Create a unique sheet directory path inside the system temp dir and
/// remove any leftovers from a previous run
pub fn setup_sheet_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtasklog", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Today's sheet file inside the given directory
pub fn sheet_file(dir: &str) -> PathBuf {
    PathBuf::from(dir).join(format!("{}.csv", rtasklog::utils::date::today()))
}

/// Log one task entry through the CLI at a fixed time
pub fn write_task(dir: &str, description: &str, time: &str) {
    rtl()
        .args(["--dir", dir, "write", description, "--time", time])
        .assert()
        .success();
}

/// Log one minor entry through the CLI at a fixed time
pub fn write_minor(dir: &str, description: &str, time: &str) {
    rtl()
        .args(["--dir", dir, "write", description, "--time", time, "--minor"])
        .assert()
        .success();
}

/// Log a stop marker through the CLI at a fixed time
pub fn write_stop(dir: &str, time: &str) {
    rtl()
        .args(["--dir", dir, "write", "--stop", "--time", time])
        .assert()
        .success();
}
