//! First-occurrence index over the language table.
//!
//! The index is built in a single ordered pass. For each row the base code
//! (text before the first `-`) decides whether the row is skipped, but the key
//! that gets inserted is the row's *full* code. As a result only rows whose
//! code is already a bare base code (e.g. "az", not "az-AZ") are reachable by
//! a base-code lookup, and a family whose first row carries a region suffix
//! contributes that suffixed key as well.

use crate::i18n::LanguageEntry;
use std::collections::HashMap;

/// Map from table key to the position of the first row registered for it.
#[derive(Debug, Clone)]
pub struct LanguageIndex {
    table: &'static [LanguageEntry],
    positions: HashMap<&'static str, usize>,
}

impl LanguageIndex {
    /// Build the index over an ordered language table.
    pub fn build(table: &'static [LanguageEntry]) -> Self {
        let mut positions: HashMap<&'static str, usize> = HashMap::with_capacity(table.len());

        for (position, entry) in table.iter().enumerate() {
            let base = entry.code.split('-').next().unwrap_or_default();
            if positions.contains_key(base) {
                continue;
            }
            positions.entry(entry.code).or_insert(position);
        }

        Self { table, positions }
    }

    /// Position of the row registered under `key`, if any.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Row registered under `key`, if any.
    pub fn entry(&self, key: &str) -> Option<LanguageEntry> {
        self.position(key).and_then(|p| self.table.get(p)).copied()
    }

    /// Number of keys in the index.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
