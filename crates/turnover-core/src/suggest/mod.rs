//! History-aware prefix suggestions for company-name entry.
//!
//! A pure query over (pool, history, fragment): entries the user confirmed
//! before rank ahead of pool entries. The engine never fails — no matches is
//! an ordinary empty result. History mutation belongs to the caller's
//! exact-match branch, not here.

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::pool::BrandPool;

/// Result of a suggestion query.
pub struct SuggestResponse {
    /// Matching brand names: history entries first (insertion order), then
    /// pool entries (pool order). Untruncated; display capping is the
    /// caller's concern.
    pub matches: Vec<String>,
    /// Set when the fragment equals one of `matches` ignoring case,
    /// i.e. the fragment is a final selection rather than a partial query.
    pub exact: bool,
}

/// Case-insensitive prefix test, matching on Unicode lowercase forms.
fn prefix_match(candidate: &str, fragment_lower: &str) -> bool {
    candidate.to_lowercase().starts_with(fragment_lower)
}

/// Rank candidates for a partial company name.
///
/// `history` is the querying user's confirmed names, oldest first. Dedup
/// while accumulating is case-sensitive: a history entry and a pool entry
/// that differ only in case are both emitted.
pub fn suggest(pool: &BrandPool, history: &[String], fragment: &str) -> SuggestResponse {
    let _span = debug_span!("suggest", fragment).entered();
    let fragment_lower = fragment.to_lowercase();

    // 1. History entries first.
    let mut matches: Vec<String> = history
        .iter()
        .filter(|h| prefix_match(h, &fragment_lower))
        .cloned()
        .collect();

    // 2. Pool entries, skipping anything already accumulated.
    for b in pool.brands() {
        if prefix_match(b, &fragment_lower) && !matches.iter().any(|m| m == b) {
            matches.push(b.clone());
        }
    }

    // Exact match is decided over the full list, before any display cap.
    let exact = matches.iter().any(|m| m.to_lowercase() == fragment_lower);

    debug!(match_count = matches.len(), exact);
    SuggestResponse { matches, exact }
}
