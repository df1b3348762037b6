//! CLI entry point and command dispatch for roster.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Email roster hygiene", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove duplicate addresses, keeping the first form seen
    ///
    /// Addresses are compared case-insensitively as whole strings, so
    /// ALICE@x.com and alice@x.com are the same address. Entries without
    /// an '@' are dropped.
    Dedupe {
        /// Roster file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Find the first address with a given domain
    ///
    /// Prints the position and entry of the first match. Exits with code 1
    /// when no entry matches, so scripts can branch on absence.
    Search {
        /// Domain to look for (matched case-insensitively)
        domain: String,
        /// Roster file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Count addresses per domain
    Tally {
        /// Roster file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Output format (text, json, csv)
        #[arg(long, default_value = "text")]
        format: String,
        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dedupe {
            file,
            format,
            output,
        } => cmd::dedupe::cmd_dedupe(file.as_deref(), &format, output.as_deref()),
        Commands::Search {
            domain,
            file,
            format,
        } => {
            let found = cmd::search::cmd_search(&domain, file.as_deref(), &format)?;
            if !found {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Tally {
            file,
            format,
            output,
        } => cmd::tally::cmd_tally(file.as_deref(), &format, output.as_deref()),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "roster", &mut io::stdout());
            Ok(())
        }
    }
}
