//! Language entry type: a (code, display name) pair from the language table.
//!
//! Every resolution in this crate ends in a `LanguageEntry`, either one taken
//! from the reference table or the `UNKNOWN` sentinel.

use serde::Serialize;

/// A single row of the language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageEntry {
    /// BCP-47-like code (e.g., "en", "en-US", "zh-TW")
    pub code: &'static str,

    /// Human-readable display name (e.g., "English", "English (United States)")
    pub name: &'static str,
}

impl LanguageEntry {
    /// Sentinel returned whenever a language cannot be resolved.
    pub const UNKNOWN: LanguageEntry = LanguageEntry {
        code: "",
        name: "Unknown",
    };

    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    /// Check if this is the `UNKNOWN` sentinel.
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

/// Extract the base code from a locale-like identifier.
///
/// The base code is everything before the first `-` or `_`, lowercased.
///
/// # Example
/// ```ignore
/// assert_eq!(base_code("en-US"), "en");
/// assert_eq!(base_code("ZH_tw"), "zh");
/// ```
pub fn base_code(input: &str) -> String {
    input
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
