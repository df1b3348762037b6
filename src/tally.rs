//! Per-domain counts for a roster.
//!
//! Tabulates how many entries share each domain, with domains compared and
//! reported in lowercase.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::address;

/// One row of a domain tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: usize,
}

/// Count entries per domain, sorted ascending by domain.
///
/// The key is the lowercased substring after the first `@`; malformed
/// entries are excluded. Domains are unique in the output, so the
/// alphabetical order is total and deterministic.
pub fn domain_counts(emails: &[String]) -> Vec<DomainCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for email in emails {
        if let Some(domain) = address::domain_of(email) {
            *counts.entry(domain.to_lowercase()).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<DomainCount> = counts
        .into_iter()
        .map(|(domain, count)| DomainCount { domain, count })
        .collect();
    rows.sort_by(|a, b| a.domain.cmp(&b.domain));
    rows
}
