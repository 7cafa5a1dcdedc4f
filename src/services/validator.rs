//! Secret validation for translation services.
//!
//! Every service that takes a credential carries a `ValidatorKind`. The kind
//! holds the parameters (lengths, part labels, key pattern) and `validate`
//! implements the behavior per kind. Validation never fails: a malformed
//! secret produces `status: false` plus a diagnostic in `info`.

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;

const NOT_SET: &str = "The secret is not set.";
const CHECK_CONNECTIVITY: &str = "Click the button to check connectivity.";

/// Outcome of validating a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// The secret exactly as it was given
    pub secret: String,

    /// Whether the secret is acceptable
    pub status: bool,

    /// Human-readable diagnostic (may span several lines)
    pub info: String,
}

impl ValidationResult {
    fn new(secret: &str, status: bool, info: impl Into<String>) -> Self {
        Self {
            secret: secret.to_string(),
            status,
            info: info.into(),
        }
    }
}

/// Accepted secret lengths, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// Length must be one of the listed values
    Exactly(&'static [usize]),
    /// Length must be at least this value
    AtLeast(usize),
}

impl LengthRule {
    fn accepts(&self, len: usize) -> bool {
        match self {
            LengthRule::Exactly(lengths) => lengths.contains(&len),
            LengthRule::AtLeast(min) => len >= *min,
        }
    }

    fn describe(&self) -> String {
        match self {
            LengthRule::Exactly(lengths) => format!("be {}", join_or(lengths)),
            LengthRule::AtLeast(min) => format!(">= {}", min),
        }
    }
}

/// One labelled segment of a `#`-joined secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretPart {
    pub label: &'static str,
    /// Shown when the segment is missing or empty
    pub fallback: Option<&'static str>,
}

impl SecretPart {
    pub const fn required(label: &'static str) -> Self {
        Self {
            label,
            fallback: None,
        }
    }

    pub const fn optional(label: &'static str, fallback: &'static str) -> Self {
        Self {
            label,
            fallback: Some(fallback),
        }
    }

    fn display<'a>(&self, value: Option<&'a str>) -> &'a str {
        match (value, self.fallback) {
            (Some(v), _) if !v.is_empty() => v,
            (_, Some(fallback)) => fallback,
            (v, None) => v.unwrap_or_default(),
        }
    }
}

/// Known API key formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    /// `sk-` followed by at least 32 URL-safe characters
    OpenAi,
    /// `sk-ant-` followed by at least 24 alphanumerics
    Anthropic,
}

static OPENAI_KEY_REGEX: OnceLock<Regex> = OnceLock::new();
static ANTHROPIC_KEY_REGEX: OnceLock<Regex> = OnceLock::new();

impl KeyPattern {
    fn regex(&self) -> &'static Regex {
        match self {
            KeyPattern::OpenAi => OPENAI_KEY_REGEX
                .get_or_init(|| Regex::new(r"^sk-[A-Za-z0-9_-]{32,}$").expect("valid key regex")),
            KeyPattern::Anthropic => ANTHROPIC_KEY_REGEX
                .get_or_init(|| Regex::new(r"^sk-ant-[A-Za-z0-9]{24,}$").expect("valid key regex")),
        }
    }

    pub fn is_match(&self, secret: &str) -> bool {
        self.regex().is_match(secret)
    }
}

/// Acceptance policy for a service secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    /// The secret is optional; anything is accepted.
    AlwaysAccept,

    /// Any non-empty secret is accepted.
    NonEmpty {
        set_info: &'static str,
        unset_info: &'static str,
    },

    /// The secret (or its first `#` segment) must satisfy a length rule.
    KeyLength {
        rule: LengthRule,
        first_segment_only: bool,
        hint: &'static str,
        subject: &'static str,
    },

    /// `#`-joined parts with an accepted part count. The default placeholder
    /// is reported as "not set" rather than malformed.
    DelimitedParts {
        counts: &'static [usize],
        parts: &'static [SecretPart],
        service_name: &'static str,
        format: &'static str,
    },

    /// API key checked against a known format. A lenient check still accepts
    /// non-empty keys that do not match, with a warning.
    PatternMatch {
        pattern: KeyPattern,
        lenient: bool,
        invalid_info: &'static str,
    },

    /// JSON credential record, falling back to `SecretId#SecretKey#Region#ProjectId`.
    StructuredOrLegacy { default_region: &'static str },
}

impl ValidatorKind {
    /// Validate `secret`. `default_secret` is the service's placeholder value.
    pub fn validate(&self, secret: &str, default_secret: Option<&str>) -> ValidationResult {
        match *self {
            ValidatorKind::AlwaysAccept => ValidationResult::new(secret, true, ""),
            ValidatorKind::NonEmpty {
                set_info,
                unset_info,
            } => {
                let status = !secret.is_empty();
                ValidationResult::new(secret, status, if status { set_info } else { unset_info })
            }
            ValidatorKind::KeyLength {
                rule,
                first_segment_only,
                hint,
                subject,
            } => {
                let key = if first_segment_only {
                    secret.split('#').next().unwrap_or_default()
                } else {
                    secret
                };
                let len = key.chars().count();
                if rule.accepts(len) {
                    ValidationResult::new(secret, true, "")
                } else {
                    ValidationResult::new(
                        secret,
                        false,
                        format!(
                            "{} The {} length must {}, but got {}.",
                            hint,
                            subject,
                            rule.describe(),
                            len
                        ),
                    )
                }
            }
            ValidatorKind::DelimitedParts {
                counts,
                parts,
                service_name,
                format,
            } => validate_delimited(secret, default_secret, counts, parts, service_name, format),
            ValidatorKind::PatternMatch {
                pattern,
                lenient,
                invalid_info,
            } => {
                let matches = pattern.is_match(secret);
                let empty = secret.is_empty();
                let info = if empty {
                    NOT_SET
                } else if matches {
                    CHECK_CONNECTIVITY
                } else {
                    invalid_info
                };
                ValidationResult::new(secret, matches || (lenient && !empty), info)
            }
            ValidatorKind::StructuredOrLegacy { default_region } => {
                validate_structured_or_legacy(secret, default_secret, default_region)
            }
        }
    }
}

fn validate_delimited(
    secret: &str,
    default_secret: Option<&str>,
    counts: &[usize],
    parts: &[SecretPart],
    service_name: &str,
    format: &str,
) -> ValidationResult {
    if default_secret == Some(secret) {
        return ValidationResult::new(secret, false, NOT_SET);
    }

    let values: Vec<&str> = secret.split('#').collect();
    let parts_info = parts
        .iter()
        .enumerate()
        .map(|(i, part)| format!("{}: {}", part.label, part.display(values.get(i).copied())))
        .collect::<Vec<_>>()
        .join("\n");

    if counts.contains(&values.len()) {
        ValidationResult::new(secret, true, parts_info)
    } else {
        ValidationResult::new(
            secret,
            false,
            format!(
                "The secret format of {} is {}. The secret must have {} parts joined by '#', but got {}.\n{}",
                service_name,
                format,
                join_or(counts),
                values.len(),
                parts_info
            ),
        )
    }
}

fn validate_structured_or_legacy(
    secret: &str,
    default_secret: Option<&str>,
    default_region: &str,
) -> ValidationResult {
    if secret.is_empty() || default_secret == Some(secret) {
        return ValidationResult::new(
            secret,
            false,
            "The secret is not set. Click the button to configure.",
        );
    }

    // Anything that is not a JSON record with a secretId takes the legacy path
    if let Ok(Value::Object(record)) = serde_json::from_str::<Value>(secret) {
        if let Some(secret_id) = present(record.get("secretId")) {
            let has_key = present(record.get("secretKey")).is_some();
            if !has_key {
                return ValidationResult::new(secret, false, "SecretId and SecretKey are required.");
            }
            let info = format!(
                "SecretId: {}\nSecretKey: Set\nRegion: {}\nProjectId: {}\nTerm Repo IDs: {}\nSent Repo IDs: {}",
                secret_id,
                present(record.get("region")).unwrap_or_else(|| default_region.to_string()),
                present(record.get("projectId")).unwrap_or_else(|| "0".to_string()),
                join_ids(record.get("termRepoIDList")),
                join_ids(record.get("sentRepoIDList")),
            );
            return ValidationResult::new(secret, true, info);
        }
    }

    let values: Vec<&str> = secret.split('#').collect();
    let field = |i: usize| values.get(i).copied().filter(|v| !v.is_empty());
    let (Some(secret_id), Some(_)) = (field(0), field(1)) else {
        return ValidationResult::new(
            secret,
            false,
            "SecretId and SecretKey are required. Use format: SecretId#SecretKey#Region(optional)#ProjectId(optional) or click button for advanced configuration.",
        );
    };

    let info = format!(
        "SecretId: {}\nSecretKey: Set\nRegion: {}\nProjectId: {}",
        secret_id,
        field(2).unwrap_or(default_region),
        field(3).unwrap_or("0"),
    );
    ValidationResult::new(secret, true, info)
}

/// Render a JSON field that counts as set (non-empty string, non-zero number, `true`).
fn present(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn join_ids(ids: Option<&Value>) -> String {
    let joined = ids
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(|id| match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}

fn join_or(values: &[usize]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
