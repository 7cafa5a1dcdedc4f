//! Language-code resolution and normalization.
//!
//! # Architecture
//!
//! - `table`: Ordered reference table of (code, display name) pairs
//! - `index`: First-occurrence index over the table
//! - `macrolanguage`: ISO 639-3 macrolanguage grouping and its reverse map
//! - `iso`: ISO 639-3 -> 639-1 normalization with macrolanguage fallback
//! - `detect`: Statistical detector seam and the `whatlang` implementation
//! - `resolver`: Locale matching and text inference on top of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use translate_registry::i18n::{infer_language, match_language};
//!
//! assert_eq!(match_language("en-US").name, "English");
//! let guess = infer_language("Bonjour tout le monde");
//! ```

mod detect;
mod index;
mod iso;
mod language;
mod macrolanguage;
mod resolver;
mod table;

pub use detect::{LanguageDetector, WhatlangDetector, DEFAULT_MIN_LENGTH};
pub use index::LanguageIndex;
pub use iso::{alpha3_to_alpha2, IsoNormalizer};
pub use language::{base_code, LanguageEntry};
pub use macrolanguage::{MacrolanguageGroup, MacrolanguageMap, MACROLANGUAGES};
pub use resolver::{infer_language, match_language, LanguageResolver};
pub use table::LANG_CODE;
