//! Common test helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// Write a roster fixture file with the given lines into `dir`.
pub fn write_roster(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).expect("failed to write roster fixture");
    path
}
