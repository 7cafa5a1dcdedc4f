//! Priority ordering of services for display.
//!
//! Each service gets an effective priority: a user override if one exists,
//! otherwise its default tier. Services are listed by priority (highest
//! first), then by id.

use crate::services::{services_of_type, ServiceDescriptor, ServiceType};
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;

/// User-defined endpoints (custom GPT slots)
pub const PRIORITY_CUSTOM: f64 = 20.0;
/// Free services that work without any configuration
pub const PRIORITY_FREE: f64 = 120.0;
/// Services that need a custom endpoint before they work
pub const PRIORITY_CUSTOM_ENDPOINT: f64 = 110.0;
/// Everything else
pub const PRIORITY_BASELINE: f64 = 100.0;

static DEFAULT_PRIORITIES: &[(&str, f64)] = &[
    ("customgpt1", PRIORITY_CUSTOM),
    ("customgpt2", PRIORITY_CUSTOM),
    ("customgpt3", PRIORITY_CUSTOM),
    ("google", PRIORITY_FREE),
    ("googleapi", PRIORITY_FREE),
    ("cnki", PRIORITY_FREE),
    ("haici", PRIORITY_FREE),
    ("youdao", PRIORITY_FREE),
    ("bing", PRIORITY_FREE),
    ("deeplx", PRIORITY_FREE),
    ("deeplcustom", PRIORITY_CUSTOM_ENDPOINT),
    ("mtranserver", PRIORITY_CUSTOM_ENDPOINT),
    ("libretranslate", PRIORITY_CUSTOM_ENDPOINT),
    ("pot", PRIORITY_CUSTOM_ENDPOINT),
];

/// User-supplied priority overrides, keyed by service id. Fractional values
/// are allowed.
pub type PriorityOverrides = HashMap<String, f64>;

/// Default priority of a service id.
pub fn default_priority(id: &str) -> f64 {
    DEFAULT_PRIORITIES
        .iter()
        .find(|(service_id, _)| *service_id == id)
        .map(|(_, priority)| *priority)
        .unwrap_or(PRIORITY_BASELINE)
}

/// Override if present, otherwise the default tier.
pub fn effective_priority(id: &str, overrides: &PriorityOverrides) -> f64 {
    overrides
        .get(id)
        .copied()
        .unwrap_or_else(|| default_priority(id))
}

/// Services of one kind with their effective priorities, in display order.
pub fn ranked_services(
    service_type: ServiceType,
    overrides: &PriorityOverrides,
) -> Vec<(&'static ServiceDescriptor, f64)> {
    let mut ranked: Vec<_> = services_of_type(service_type)
        .map(|service| (service, effective_priority(service.id, overrides)))
        .collect();

    ranked.sort_by(|(a, a_priority), (b, b_priority)| {
        b_priority
            .total_cmp(a_priority)
            .then_with(|| compare_ids(a.id, b.id))
    });
    ranked
}

/// Services of one kind in display order.
pub fn sorted_services(
    service_type: ServiceType,
    overrides: &PriorityOverrides,
) -> Vec<&'static ServiceDescriptor> {
    ranked_services(service_type, overrides)
        .into_iter()
        .map(|(service, _)| service)
        .collect()
}

/// Case-insensitive comparison, falling back to byte order for ids that only
/// differ in case.
fn compare_ids(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriorityParseError {
    #[error("priority entry '{0}' is not in id=priority form")]
    MissingSeparator(String),

    #[error("priority entry '{0}' has an empty service id")]
    EmptyId(String),

    #[error("priority for '{id}' is not a finite number: '{value}'")]
    InvalidValue { id: String, value: String },
}

/// Parse overrides of the form `google=130,bing=90`.
///
/// Whitespace around entries is ignored and empty entries are skipped. A
/// repeated id keeps its last value.
pub fn parse_priority_overrides(input: &str) -> Result<PriorityOverrides, PriorityParseError> {
    let mut overrides = PriorityOverrides::new();

    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (id, value) = entry
            .split_once('=')
            .ok_or_else(|| PriorityParseError::MissingSeparator(entry.to_string()))?;
        let (id, value) = (id.trim(), value.trim());

        if id.is_empty() {
            return Err(PriorityParseError::EmptyId(entry.to_string()));
        }

        let priority = value
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| PriorityParseError::InvalidValue {
                id: id.to_string(),
                value: value.to_string(),
            })?;

        overrides.insert(id.to_string(), priority);
    }

    Ok(overrides)
}
