//! Domain search over a roster.
//!
//! Finds the first entry whose domain matches a target, case-insensitively.
//! Indices always refer to the original roster: malformed entries are never
//! matched but still occupy their position.

use serde::Serialize;

use crate::address;

/// A resolved search hit: the original index and the entry found there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainMatch {
    pub index: usize,
    pub email: String,
}

/// Index of the first entry whose domain equals `domain`, case-insensitively.
///
/// Returns `None` when no entry matches. Absence is not an error.
pub fn first_with_domain(emails: &[String], domain: &str) -> Option<usize> {
    let target = domain.to_lowercase();
    emails.iter().position(|email| {
        address::domain_of(email)
            .map(|d| d.to_lowercase() == target)
            .unwrap_or(false)
    })
}

/// Like [`first_with_domain`], resolved to the matching entry for display.
pub fn find_with_domain(emails: &[String], domain: &str) -> Option<DomainMatch> {
    first_with_domain(emails, domain).map(|index| DomainMatch {
        index,
        email: emails[index].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_with_domain_basic() {
        let emails = roster(&["a@x.com", "b@y.com"]);
        assert_eq!(first_with_domain(&emails, "y.com"), Some(1));
    }

    #[test]
    fn test_first_with_domain_absent() {
        let emails = roster(&["a@x.com"]);
        assert_eq!(first_with_domain(&emails, "z.com"), None);
    }

    #[test]
    fn test_first_with_domain_case_insensitive() {
        let emails = roster(&["a@X.COM"]);
        assert_eq!(first_with_domain(&emails, "x.com"), Some(0));
        assert_eq!(first_with_domain(&emails, "X.Com"), Some(0));
    }

    #[test]
    fn test_first_with_domain_ties_go_to_lowest_index() {
        let emails = roster(&["a@x.com", "b@x.com"]);
        assert_eq!(first_with_domain(&emails, "x.com"), Some(0));
    }

    #[test]
    fn test_malformed_entries_keep_their_index() {
        // "junk" occupies index 1 but is never matched.
        let emails = roster(&["a@x.com", "junk", "b@y.com"]);
        assert_eq!(first_with_domain(&emails, "y.com"), Some(2));
    }

    #[test]
    fn test_domain_is_everything_after_first_separator() {
        let emails = roster(&["a@b@c"]);
        assert_eq!(first_with_domain(&emails, "b@c"), Some(0));
        assert_eq!(first_with_domain(&emails, "c"), None);
    }

    #[test]
    fn test_empty_domain_matches_trailing_separator() {
        let emails = roster(&["a@"]);
        assert_eq!(first_with_domain(&emails, ""), Some(0));
    }

    #[test]
    fn test_find_with_domain_resolves_entry() {
        let emails = roster(&["a@x.com", "B@y.com"]);
        let hit = find_with_domain(&emails, "Y.COM").unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.email, "B@y.com");
    }

    #[test]
    fn test_find_with_domain_absent() {
        let emails = roster(&["a@x.com"]);
        assert_eq!(find_with_domain(&emails, "z.com"), None);
    }
}
