//! Search command handler: find the first address with a given domain

use anyhow::Result;
use std::path::Path;

use roster::{formatters, search};

/// Execute the search command. Returns whether a matching entry was found,
/// so `main` can translate absence into an exit code.
pub fn cmd_search(domain: &str, file: Option<&Path>, format: &str) -> Result<bool> {
    let emails = match crate::cmd::load_input(file)? {
        Some(emails) => emails,
        // Usage hint was printed; do not report absence.
        None => return Ok(true),
    };

    let result = search::find_with_domain(&emails, domain);

    match format.to_lowercase().as_str() {
        "text" => println!("{}", formatters::format_match(result.as_ref(), domain)),
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => anyhow::bail!("Unknown format: {}. Supported formats: text, json", format),
    }

    Ok(result.is_some())
}
