//! ISO 639-3 to ISO 639-1 normalization.

use crate::i18n::MacrolanguageMap;
use tracing::debug;

/// Direct ISO 639-3 -> 639-1 lookup.
pub fn alpha3_to_alpha2(code: &str) -> Option<&'static str> {
    isolang::Language::from_639_3(code).and_then(|lang| lang.to_639_1())
}

/// Converts three-letter codes to two-letter codes, falling back through
/// the macrolanguage map when the code has no direct mapping.
#[derive(Debug, Clone)]
pub struct IsoNormalizer {
    macrolanguages: MacrolanguageMap,
}

impl IsoNormalizer {
    pub fn new(macrolanguages: MacrolanguageMap) -> Self {
        Self { macrolanguages }
    }

    /// Normalize an ISO 639-3 code to ISO 639-1.
    ///
    /// # Returns
    /// * `Some(code2)` from the direct mapping, or from the enclosing
    ///   macrolanguage's mapping
    /// * `None` if neither resolves
    pub fn normalize(&self, code3: &str) -> Option<&'static str> {
        if let Some(code2) = alpha3_to_alpha2(code3) {
            return Some(code2);
        }

        let macrolanguage = self.macrolanguages.macrolanguage_of(code3)?;
        let code2 = alpha3_to_alpha2(macrolanguage);
        debug!(
            "Normalized {} through macrolanguage {} -> {:?}",
            code3, macrolanguage, code2
        );
        code2
    }
}
