//! Dedupe command handler

use anyhow::Result;
use std::path::Path;

use roster::{dedupe, formatters};

/// Execute the dedupe command: load, dedupe, render, write.
pub fn cmd_dedupe(file: Option<&Path>, format: &str, output: Option<&Path>) -> Result<()> {
    let emails = match crate::cmd::load_input(file)? {
        Some(emails) => emails,
        None => return Ok(()),
    };

    let unique = dedupe::dedupe(&emails);

    let rendered = match format.to_lowercase().as_str() {
        "text" => formatters::format_roster(&unique),
        "json" => serde_json::to_string_pretty(&unique)?,
        _ => anyhow::bail!("Unknown format: {}. Supported formats: text, json", format),
    };

    crate::cmd::write_output(&rendered, output)?;

    if let Some(path) = output {
        println!("Wrote {} unique addresses to {}", unique.len(), path.display());
    }

    Ok(())
}
