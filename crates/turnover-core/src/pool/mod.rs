//! Static brand pool loaded once at startup.
//!
//! The pool is a plain newline-delimited list of known brand names. It is
//! read-only after load; all runtime learning lives in `history`.


use std::fs;
use std::io;
use std::path::Path;

/// Immutable, ordered list of known brand names.
///
/// File order is preserved: suggestion output for pool entries follows the
/// order they appear in the source list.
pub struct BrandPool {
    brands: Vec<String>,
}

impl BrandPool {
    /// Parse a newline-delimited brand list. Lines are trimmed; blank lines
    /// are skipped.
    pub fn from_text(text: &str) -> Self {
        let brands = text
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(|l| l.to_string())
            .collect();
        Self { brands }
    }

    /// Build a pool from already-prepared names (used by tests and tools).
    pub fn from_brands(brands: Vec<String>) -> Self {
        Self { brands }
    }

    /// Load a brand list from a UTF-8 file.
    pub fn open(path: &Path) -> Result<Self, io::Error> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// Duplicate names in the list, for `pool-check` diagnostics.
    /// Comparison is exact (case-sensitive), matching suggestion dedup.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for b in &self.brands {
            if !seen.insert(b.as_str()) {
                dups.push(b.as_str());
            }
        }
        dups
    }
}
