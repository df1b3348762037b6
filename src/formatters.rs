//! Output formatters for roster results
//!
//! Pure functions that render operation results as terminal text. Machine
//! formats (JSON, CSV) live with the command handlers.

use colored::Colorize;

use crate::search::DomainMatch;
use crate::tally::DomainCount;

/// Format a roster one entry per line.
///
/// The output is itself a valid roster file, so it can be piped back in.
pub fn format_roster(emails: &[String]) -> String {
    emails.join("\n")
}

/// Format a search result for `domain`, or a "no entry" line on absence.
pub fn format_match(result: Option<&DomainMatch>, domain: &str) -> String {
    match result {
        Some(hit) => format!(
            "{} {}  {}",
            format!("[{}]", hit.index).cyan(),
            hit.email,
            format!("({})", domain).dimmed()
        ),
        None => format!("No entry with domain \"{}\"", domain),
    }
}

/// Format a domain tally as an aligned table with a summary line.
pub fn format_tally(rows: &[DomainCount]) -> String {
    let mut output = vec!["Domains".bold().to_string(), "───────".to_string()];

    if rows.is_empty() {
        output.push("  (no well-formed addresses)".dimmed().to_string());
        return output.join("\n");
    }

    let width = rows.iter().map(|r| r.domain.len()).max().unwrap_or(0);
    for row in rows {
        output.push(format!(
            "  {:<width$}  {:>5}",
            row.domain,
            row.count,
            width = width
        ));
    }

    let total: usize = rows.iter().map(|r| r.count).sum();
    output.push(String::new());
    output.push(
        format!("  {} domains, {} addresses", rows.len(), total)
            .dimmed()
            .to_string(),
    );

    output.join("\n")
}
