//! # Roster - Email List Hygiene
//!
//! Roster keeps lists of email addresses clean: deduplicate them without
//! losing the casing people typed, find who signed up from a given domain,
//! and see which domains dominate a list.
//!
//! ## Overview
//!
//! A roster is an ordered list of address strings, loaded from a file or
//! stdin, one entry per line. The core operations are pure functions; the
//! `roster` binary wraps them with input loading and output formatting.
//!
//! Entries without an `@` are treated as malformed and silently skipped by
//! every operation. The domain of an entry is everything after the first
//! `@`, compared case-insensitively.
//!
//! ## Modules
//!
//! - [`address`] - Single-address helpers (well-formedness, domain, casing)
//! - [`dedupe`] - Case-insensitive dedupe preserving first-seen order
//! - [`search`] - First entry matching a domain
//! - [`tally`] - Per-domain counts, sorted alphabetically
//! - [`loader`] - Roster file/stdin input
//! - [`formatters`] - Terminal rendering of results
//!
//! ## Example
//!
//! ```
//! use roster::{dedupe, search, tally};
//!
//! let emails = vec![
//!     "Alice@example.com".to_string(),
//!     "alice@EXAMPLE.com".to_string(),
//!     "bob@rust-lang.org".to_string(),
//! ];
//!
//! let unique = dedupe::dedupe(&emails);
//! assert_eq!(unique, vec!["Alice@example.com", "bob@rust-lang.org"]);
//!
//! assert_eq!(search::first_with_domain(&emails, "rust-lang.org"), Some(2));
//!
//! let counts = tally::domain_counts(&emails);
//! assert_eq!(counts[0].domain, "example.com");
//! assert_eq!(counts[0].count, 2);
//! ```

pub mod address;
pub mod dedupe;
pub mod formatters;
pub mod loader;
pub mod search;
pub mod tally;
