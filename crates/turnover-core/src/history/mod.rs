//! Per-user history of confirmed company names.
//!
//! Entries are consulted by the suggestion engine so that values a user has
//! picked before rank ahead of pool entries. The store is in-memory only and
//! append-only for the lifetime of the process.


use std::collections::HashMap;

/// Opaque per-chat user identifier.
pub type UserId = u64;

/// Map from user to that user's confirmed company names.
///
/// Each user's history is an insertion-ordered list with exact-literal
/// duplicate suppression, so suggestion output is deterministic. Entries
/// differing only in case are distinct: `record` stores the text exactly as
/// the user typed it.
#[derive(Default)]
pub struct HistoryStore {
    entries: HashMap<UserId, Vec<String>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirmed names for a user, oldest first. Empty for unknown users.
    pub fn entries(&self, user: UserId) -> &[String] {
        self.entries.get(&user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Record a confirmed name. Returns `true` if newly added, `false` if an
    /// identical entry (same case) already exists for this user.
    pub fn record(&mut self, user: UserId, value: &str) -> bool {
        let list = self.entries.entry(user).or_default();
        if list.iter().any(|e| e == value) {
            return false;
        }
        list.push(value.to_string());
        true
    }

    /// Number of users with at least one entry.
    pub fn user_count(&self) -> usize {
        self.entries.len()
    }
}
