//! Statistical language detection.
//!
//! The detector is treated as an opaque classifier: it gets a text sample and
//! answers with an ISO 639-3 code or nothing.

use tracing::debug;

/// Minimum number of characters a sample needs before it is classified.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// ISO 639-3 code for "undetermined".
const UNDETERMINED: &str = "und";

/// A statistical language classifier.
pub trait LanguageDetector: Send + Sync {
    /// Guess the ISO 639-3 code of `text`.
    ///
    /// Returns `None` when the sample is shorter than `min_length` characters
    /// or the classifier has no answer.
    fn detect(&self, text: &str, min_length: usize) -> Option<String>;
}

/// Trigram detector backed by `whatlang`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str, min_length: usize) -> Option<String> {
        if text.trim().chars().count() < min_length {
            return None;
        }

        let info = whatlang::detect(text)?;
        debug!(
            "Detected {} (confidence {:.2}, reliable: {})",
            info.lang().code(),
            info.confidence(),
            info.is_reliable()
        );
        Some(info.lang().code().to_string())
    }
}

/// Normalize a raw detector answer: empty and undetermined codes mean no answer.
pub(crate) fn usable_code(code: Option<String>) -> Option<String> {
    code.filter(|c| !c.is_empty() && c != UNDETERMINED)
}
