//! Language resolution: locale matching and text-based inference.
//!
//! `LanguageResolver` ties the language table index, the ISO normalizer and a
//! detector together. The process-wide instance is built once on first use
//! and is read-only afterwards.

use crate::i18n::detect::usable_code;
use crate::i18n::{
    base_code, IsoNormalizer, LanguageDetector, LanguageEntry, LanguageIndex, MacrolanguageMap,
    WhatlangDetector, DEFAULT_MIN_LENGTH, LANG_CODE, MACROLANGUAGES,
};
use std::sync::OnceLock;
use tracing::debug;

/// Resolves locale strings and text samples to language table entries.
pub struct LanguageResolver {
    index: LanguageIndex,
    normalizer: IsoNormalizer,
    detector: Box<dyn LanguageDetector>,
    min_length: usize,
}

/// Global resolver instance (initialized lazily)
static RESOLVER: OnceLock<LanguageResolver> = OnceLock::new();

impl LanguageResolver {
    /// Build a resolver over the bundled reference data with a custom detector.
    pub fn with_detector(detector: Box<dyn LanguageDetector>) -> Self {
        Self {
            index: LanguageIndex::build(LANG_CODE),
            normalizer: IsoNormalizer::new(MacrolanguageMap::build(MACROLANGUAGES)),
            detector,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Set the minimum sample length passed to the detector.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Get the global resolver, backed by `WhatlangDetector`.
    pub fn global() -> &'static LanguageResolver {
        RESOLVER.get_or_init(|| LanguageResolver::with_detector(Box::new(WhatlangDetector)))
    }

    /// Resolve a locale-like string (e.g. "en-US", "zh_TW", "FR") to a table entry.
    ///
    /// Only the base code is consulted. Returns `LanguageEntry::UNKNOWN` when
    /// the base code has no indexed entry.
    pub fn match_language(&self, input: &str) -> LanguageEntry {
        let base = base_code(input);
        match self.index.entry(&base) {
            Some(entry) => entry,
            None => {
                debug!("No language entry for base code {:?} (input {:?})", base, input);
                LanguageEntry::UNKNOWN
            }
        }
    }

    /// Infer the language of a text sample.
    ///
    /// Detector answer -> ISO 639-1 code -> table entry. Any missing step
    /// degrades to `LanguageEntry::UNKNOWN`.
    pub fn infer_language(&self, text: &str) -> LanguageEntry {
        let Some(code3) = usable_code(self.detector.detect(text, self.min_length)) else {
            debug!("Detector returned no language");
            return LanguageEntry::UNKNOWN;
        };

        let Some(code2) = self.normalizer.normalize(&code3) else {
            debug!("No ISO 639-1 code for detected language {}", code3);
            return LanguageEntry::UNKNOWN;
        };

        self.match_language(code2)
    }

    /// Normalize an ISO 639-3 code to ISO 639-1.
    pub fn normalize(&self, code3: &str) -> Option<&'static str> {
        self.normalizer.normalize(code3)
    }
}

/// Infer the language of `text` with the global resolver.
pub fn infer_language(text: &str) -> LanguageEntry {
    LanguageResolver::global().infer_language(text)
}

/// Resolve a locale-like string with the global resolver.
pub fn match_language(input: &str) -> LanguageEntry {
    LanguageResolver::global().match_language(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Detector that always answers with the same code.
    struct FixedDetector(Option<&'static str>);

    impl LanguageDetector for FixedDetector {
        fn detect(&self, text: &str, min_length: usize) -> Option<String> {
            if text.chars().count() < min_length {
                return None;
            }
            self.0.map(str::to_string)
        }
    }

    fn resolver(code: Option<&'static str>) -> LanguageResolver {
        LanguageResolver::with_detector(Box::new(FixedDetector(code)))
    }

    // ==================== match_language Tests ====================

    #[test]
    fn test_match_bare_code() {
        let entry = resolver(None).match_language("fr");
        assert_eq!(entry, LanguageEntry::new("fr", "French"));
    }

    #[test]
    fn test_match_regional_code_returns_base_entry() {
        let entry = resolver(None).match_language("en-US");
        assert_eq!(entry, LanguageEntry::new("en", "English"));
    }

    #[test]
    fn test_match_underscore_and_uppercase() {
        let entry = resolver(None).match_language("ZH_tw");
        assert_eq!(entry, LanguageEntry::new("zh", "Chinese"));
    }

    #[test]
    fn test_match_hebrew_aliases() {
        let resolver = resolver(None);
        assert_eq!(resolver.match_language("he").name, "Hebrew");
        assert_eq!(resolver.match_language("iw").name, "Hebrew");
        assert_eq!(resolver.match_language("iw").code, "iw");
    }

    #[test]
    fn test_match_first_bare_entry_for_azeri() {
        let entry = resolver(None).match_language("az-AZ");
        assert_eq!(entry, LanguageEntry::new("az", "Azeri (Latin)"));
    }

    #[test]
    fn test_match_family_without_bare_entry_is_unknown() {
        assert!(resolver(None).match_language("nn-NO").is_unknown());
    }

    #[test]
    fn test_match_unknown_code() {
        assert_eq!(resolver(None).match_language("xx"), LanguageEntry::UNKNOWN);
        assert_eq!(resolver(None).match_language(""), LanguageEntry::UNKNOWN);
    }

    // ==================== infer_language Tests ====================

    #[test]
    fn test_infer_direct_mapping() {
        let entry = resolver(Some("fra")).infer_language("some text");
        assert_eq!(entry, LanguageEntry::new("fr", "French"));
    }

    #[test]
    fn test_infer_through_macrolanguage() {
        let entry = resolver(Some("cmn")).infer_language("some text");
        assert_eq!(entry, LanguageEntry::new("zh", "Chinese"));
    }

    #[test]
    fn test_infer_persian_through_macrolanguage() {
        let entry = resolver(Some("pes")).infer_language("some text");
        assert_eq!(entry, LanguageEntry::new("fa", "Farsi"));
    }

    #[test]
    fn test_infer_no_detection() {
        assert!(resolver(None).infer_language("some text").is_unknown());
    }

    #[test]
    fn test_infer_empty_and_undetermined_codes() {
        assert!(resolver(Some("")).infer_language("some text").is_unknown());
        assert!(resolver(Some("und")).infer_language("some text").is_unknown());
    }

    #[test]
    fn test_infer_unmappable_code() {
        assert!(resolver(Some("qqq")).infer_language("some text").is_unknown());
    }

    #[test]
    fn test_infer_respects_min_length() {
        let resolver = resolver(Some("fra")).with_min_length(50);
        assert!(resolver.infer_language("short").is_unknown());
    }

    // ==================== Global Resolver Tests ====================

    #[test]
    fn test_global_returns_singleton() {
        let resolver1 = LanguageResolver::global();
        let resolver2 = LanguageResolver::global();
        assert!(std::ptr::eq(resolver1, resolver2));
    }

    #[test]
    fn test_free_functions_use_global_resolver() {
        assert_eq!(match_language("de-AT").code, "de");
        assert!(infer_language("").is_unknown());
    }
}
