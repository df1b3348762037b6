//! Roster input: read address lists from files or stdin.
//!
//! One entry per line; surrounding whitespace is trimmed, and blank lines
//! and `#` comments are skipped. Entries are otherwise passed through
//! untouched — malformed-entry handling belongs to the operations.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a roster from `path`, or from stdin when no path is given.
pub fn load_roster(path: Option<&Path>) -> Result<Vec<String>> {
    let content = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read roster from stdin")?;
            buf
        }
    };

    Ok(parse_roster(&content))
}

/// Parse roster text into entries.
pub fn parse_roster(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
