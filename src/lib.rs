//! Language-code resolution and translation service registry.
//!
//! - `i18n`: normalize locale strings, infer the language of a text sample
//! - `services`: service descriptors, secret validation, priority ordering
//! - `config`: environment-driven settings
//! - `icon`: bundled SVG icon

pub mod config;
pub mod i18n;
pub mod icon;
pub mod services;

pub use i18n::{infer_language, match_language, LanguageEntry};
pub use services::{get_service, sorted_services, ServiceDescriptor, ServiceType, ValidationResult};
