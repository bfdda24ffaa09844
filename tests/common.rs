#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Nothing listens here: requests fail fast with "connection refused".
pub const DEAD_API: &str = "http://127.0.0.1:9/api";

pub fn ct() -> Command {
    cargo_bin_cmd!("coretime")
}

/// Create a unique config path inside the system temp dir and remove any existing file
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_{}_coretime.conf", name, std::process::id()));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_{}_out.{}", name, std::process::id(), ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
