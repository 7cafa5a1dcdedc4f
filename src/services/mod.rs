//! Translation and dictionary service registry.
//!
//! - `registry`: Static service descriptors and lookup
//! - `validator`: Per-service secret validation
//! - `priority`: Priority-based ordering for display

mod priority;
mod registry;
mod validator;

pub use priority::{
    default_priority, effective_priority, parse_priority_overrides, ranked_services,
    sorted_services, PriorityOverrides, PriorityParseError, PRIORITY_BASELINE, PRIORITY_CUSTOM,
    PRIORITY_CUSTOM_ENDPOINT, PRIORITY_FREE,
};
pub use registry::{
    get_service, services_of_type, ServiceDescriptor, ServiceType, ServiceTypeParseError, SERVICES,
};
pub use validator::{KeyPattern, LengthRule, SecretPart, ValidationResult, ValidatorKind};
