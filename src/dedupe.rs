//! Case-insensitive roster deduplication.
//!
//! Addresses are compared by their lowercased whole string, so
//! `ALICE@x.com` and `alice@x.com` are the same address. The first form
//! seen is the one kept.

use std::collections::HashSet;

use crate::address;

/// Deduplicate a roster, preserving first-seen order and original casing.
///
/// Entries without an `@` are dropped entirely. Always succeeds; an empty
/// roster yields an empty result.
pub fn dedupe(emails: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for email in emails {
        if !address::is_well_formed(email) {
            continue;
        }
        if seen.insert(address::normalized(email)) {
            result.push(email.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedupe_keeps_first_form() {
        let emails = roster(&["a@x.com", "A@X.com", "b@y.com"]);
        assert_eq!(dedupe(&emails), roster(&["a@x.com", "b@y.com"]));
    }

    #[test]
    fn test_dedupe_drops_malformed() {
        let emails = roster(&["noatsign", "a@x.com"]);
        assert_eq!(dedupe(&emails), roster(&["a@x.com"]));
    }

    #[test]
    fn test_dedupe_empty() {
        assert_eq!(dedupe(&[]), Vec::<String>::new());
    }

    #[test]
    fn test_dedupe_compares_whole_string_not_domain() {
        // Same domain, different local parts: both kept.
        let emails = roster(&["a@x.com", "b@x.com"]);
        assert_eq!(dedupe(&emails), roster(&["a@x.com", "b@x.com"]));
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let emails = roster(&["A@x.com", "a@X.COM", "b@y.com", "junk", "B@y.com"]);
        let once = dedupe(&emails);
        let twice = dedupe(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedupe_output_is_subset_with_unique_keys() {
        let emails = roster(&["A@x.com", "a@x.com", "b@y.com", "junk", "C@z.com"]);
        let unique = dedupe(&emails);

        for email in &unique {
            assert!(emails.contains(email));
        }

        let keys: HashSet<String> = unique.iter().map(|e| e.to_lowercase()).collect();
        assert_eq!(keys.len(), unique.len());
    }
}
