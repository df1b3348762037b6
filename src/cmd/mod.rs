//! Command module structure for the roster CLI

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub mod dedupe;
pub mod search;
pub mod tally;

/// Load the roster for a command, falling back to stdin.
///
/// When no file is given and stdin is a TTY, prints a usage hint and
/// returns `None` instead of blocking on interactive input.
pub fn load_input(file: Option<&Path>) -> Result<Option<Vec<String>>> {
    if file.is_none() && atty::is(atty::Stream::Stdin) {
        print_input_usage_hint();
        return Ok(None);
    }

    roster::loader::load_roster(file).map(Some)
}

/// Print usage hint when a command is run interactively with no input
fn print_input_usage_hint() {
    println!("No roster given. Pass a file or pipe addresses on stdin.\n");
    println!("Examples:");
    println!("  roster dedupe guests.txt");
    println!("  roster search example.com guests.txt");
    println!("  cat guests.txt | roster tally\n");
    println!("Run 'roster --help' for all commands.");
}

/// Write rendered output to `path`, or to stdout when no path is given.
pub fn write_output(output: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", output)
                .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        }
        None => println!("{}", output),
    }
    Ok(())
}
