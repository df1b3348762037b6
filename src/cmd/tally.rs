//! Tally command handler: per-domain counts

use anyhow::Result;
use std::path::Path;

use roster::formatters;
use roster::tally::{self, DomainCount};

/// Execute the tally command: load, count, render, write.
pub fn cmd_tally(file: Option<&Path>, format: &str, output: Option<&Path>) -> Result<()> {
    let emails = match crate::cmd::load_input(file)? {
        Some(emails) => emails,
        None => return Ok(()),
    };

    let rows = tally::domain_counts(&emails);

    let rendered = match format.to_lowercase().as_str() {
        "text" => formatters::format_tally(&rows),
        "json" => serde_json::to_string_pretty(&rows)?,
        "csv" => render_csv(&rows),
        _ => anyhow::bail!(
            "Unknown format: {}. Supported formats: text, json, csv",
            format
        ),
    };

    crate::cmd::write_output(&rendered, output)?;

    if let Some(path) = output {
        println!("Wrote {} domains to {}", rows.len(), path.display());
    }

    Ok(())
}

/// Render tally rows as CSV with a header line.
fn render_csv(rows: &[DomainCount]) -> String {
    let mut output = String::from("domain,count\n");
    for row in rows {
        output.push_str(&format!("{},{}\n", csv_escape(&row.domain), row.count));
    }
    output
}

/// Escape a value for CSV output
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
