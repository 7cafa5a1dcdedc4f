//! Service registry: single source of truth for all translation services.
//!
//! Services are either dictionary lookups (`Word`) or whole-sentence
//! translators (`Sentence`). The registry is a static, ordered slice; ids are
//! unique across both kinds.

use crate::services::validator::{
    KeyPattern, LengthRule, SecretPart, ValidationResult, ValidatorKind,
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of translation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// Dictionary / single-word lookup
    Word,
    /// Whole-sentence translation
    Sentence,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Word => "word",
            ServiceType::Sentence => "sentence",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown service type '{0}' (expected 'word' or 'sentence')")]
pub struct ServiceTypeParseError(pub String);

impl FromStr for ServiceType {
    type Err = ServiceTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(ServiceType::Word),
            "sentence" => Ok(ServiceType::Sentence),
            other => Err(ServiceTypeParseError(other.to_string())),
        }
    }
}

/// Descriptor of a translation or dictionary service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub service_type: ServiceType,

    /// Unique service id (e.g., "baidu", "chatgpt")
    pub id: &'static str,

    /// Placeholder secret shown before the user configures one
    pub default_secret: Option<&'static str>,

    /// Acceptance policy for the secret, if the service takes one
    pub validator: Option<ValidatorKind>,
}

impl ServiceDescriptor {
    const fn free(service_type: ServiceType, id: &'static str) -> Self {
        Self {
            service_type,
            id,
            default_secret: None,
            validator: None,
        }
    }

    const fn secured(id: &'static str, default_secret: &'static str, validator: ValidatorKind) -> Self {
        Self {
            service_type: ServiceType::Sentence,
            id,
            default_secret: Some(default_secret),
            validator: Some(validator),
        }
    }

    /// Validate a secret for this service.
    ///
    /// # Returns
    /// * `Some(ValidationResult)` if the service has a validator
    /// * `None` if the service takes no secret
    pub fn validate_secret(&self, secret: &str) -> Option<ValidationResult> {
        self.validator
            .map(|validator| validator.validate(secret, self.default_secret))
    }
}

const CONNECTIVITY_OR_INVALID: ValidatorKind = ValidatorKind::NonEmpty {
    set_info: "Click the button to check connectivity.",
    unset_info: "The secret key format is invalid.",
};

const REQUIRED_KEY: ValidatorKind = ValidatorKind::NonEmpty {
    set_info: "",
    unset_info: "The secret is not set.",
};

const ACCESS_KEY_PARTS: &[SecretPart] = &[
    SecretPart::required("AccessKeyId"),
    SecretPart::required("AccessKeySecret"),
];

/// All known services, in registry order.
pub static SERVICES: &[ServiceDescriptor] = &[
    ServiceDescriptor::secured("libretranslate", "", ValidatorKind::AlwaysAccept),
    ServiceDescriptor::free(ServiceType::Sentence, "googleapi"),
    ServiceDescriptor::free(ServiceType::Sentence, "google"),
    ServiceDescriptor::free(ServiceType::Sentence, "cnki"),
    ServiceDescriptor::free(ServiceType::Sentence, "haici"),
    ServiceDescriptor::free(ServiceType::Sentence, "youdao"),
    ServiceDescriptor::free(ServiceType::Sentence, "bing"),
    ServiceDescriptor::free(ServiceType::Sentence, "pot"),
    ServiceDescriptor::secured(
        "huoshan",
        "accessKeyId#accessKeySecret",
        ValidatorKind::DelimitedParts {
            counts: &[2],
            parts: ACCESS_KEY_PARTS,
            service_name: "Huoshan Text Translation",
            format: "AccessKeyId#AccessKeySecret",
        },
    ),
    ServiceDescriptor::secured(
        "youdaozhiyun",
        "appid#appsecret#vocabid(optional)",
        ValidatorKind::DelimitedParts {
            counts: &[2, 3],
            parts: &[
                SecretPart::required("AppID"),
                SecretPart::required("AppKey"),
                SecretPart::optional("VocabID", ""),
            ],
            service_name: "YoudaoZhiyun",
            format: "AppID#AppKey#VocabID(optional)",
        },
    ),
    ServiceDescriptor::secured(
        "niutranspro",
        "",
        ValidatorKind::KeyLength {
            rule: LengthRule::Exactly(&[32]),
            first_segment_only: false,
            hint: "The secret is your NiuTrans API-KEY.",
            subject: "secret",
        },
    ),
    ServiceDescriptor::secured(
        "microsoft",
        "",
        ValidatorKind::KeyLength {
            rule: LengthRule::Exactly(&[32, 84]),
            first_segment_only: true,
            hint: "The secret is your Azure translate serviceKEY#region(required if the region is not global).",
            subject: "secretKEY",
        },
    ),
    ServiceDescriptor::secured(
        "caiyun",
        "3975l6lr5pcbvidl6jl2",
        ValidatorKind::NonEmpty {
            set_info: "",
            unset_info: "",
        },
    ),
    ServiceDescriptor::secured(
        "deeplfree",
        "",
        ValidatorKind::KeyLength {
            rule: LengthRule::AtLeast(36),
            first_segment_only: false,
            hint: "The secret is your DeepL (free plan) KEY.",
            subject: "secret",
        },
    ),
    ServiceDescriptor::secured(
        "deeplpro",
        "",
        ValidatorKind::KeyLength {
            rule: LengthRule::AtLeast(36),
            first_segment_only: false,
            hint: "The secret is your DeepL (pro plan) KEY.",
            subject: "secret",
        },
    ),
    ServiceDescriptor::secured("deeplcustom", "", ValidatorKind::AlwaysAccept),
    ServiceDescriptor::free(ServiceType::Sentence, "deeplx"),
    ServiceDescriptor::secured(
        "aliyun",
        "accessKeyId#accessKeySecret",
        ValidatorKind::DelimitedParts {
            counts: &[2],
            parts: ACCESS_KEY_PARTS,
            service_name: "Aliyun Text Translation",
            format: "AccessKeyId#AccessKeySecret",
        },
    ),
    ServiceDescriptor::secured(
        "baidu",
        "appid#key#3",
        ValidatorKind::DelimitedParts {
            counts: &[2, 3],
            parts: &[
                SecretPart::required("AppID"),
                SecretPart::required("Key"),
                SecretPart::optional("Action", "0"),
            ],
            service_name: "Baidu Text Translation",
            format: "AppID#Key#Action(optional)",
        },
    ),
    ServiceDescriptor::secured(
        "baidufield",
        "appid#key#field",
        ValidatorKind::DelimitedParts {
            counts: &[3],
            parts: &[
                SecretPart::required("AppID"),
                SecretPart::required("Key"),
                SecretPart::required("DomainCode"),
            ],
            service_name: "Baidu Domain Text Translation",
            format: "AppID#Key#DomainCode",
        },
    ),
    ServiceDescriptor::secured(
        "openl",
        "service1,service2,...#apikey",
        ValidatorKind::DelimitedParts {
            counts: &[2],
            parts: &[
                SecretPart::required("Services"),
                SecretPart::required("APIKey"),
            ],
            service_name: "OpenL",
            format: "service1,service2,...#APIKey",
        },
    ),
    ServiceDescriptor::secured(
        "tencent",
        "secretId#SecretKey#Region(default ap-shanghai)#ProjectId(default 0)",
        ValidatorKind::StructuredOrLegacy {
            default_region: "ap-shanghai",
        },
    ),
    ServiceDescriptor::secured(
        "xftrans",
        "AppID#ApiSecret#ApiKey",
        ValidatorKind::DelimitedParts {
            counts: &[3],
            parts: &[
                SecretPart::required("AppID"),
                SecretPart::required("ApiSecret"),
                SecretPart::required("ApiKey"),
            ],
            service_name: "Xftrans Domain Text Translation",
            format: "AppID#ApiSecret#ApiKey",
        },
    ),
    ServiceDescriptor::secured(
        "chatgpt",
        "",
        ValidatorKind::PatternMatch {
            pattern: KeyPattern::OpenAi,
            lenient: false,
            invalid_info: "The secret key format is invalid.",
        },
    ),
    ServiceDescriptor::secured("customgpt1", "", CONNECTIVITY_OR_INVALID),
    ServiceDescriptor::secured("customgpt2", "", CONNECTIVITY_OR_INVALID),
    ServiceDescriptor::secured("customgpt3", "", CONNECTIVITY_OR_INVALID),
    ServiceDescriptor::secured("azuregpt", "", REQUIRED_KEY),
    ServiceDescriptor::secured("gemini", "", REQUIRED_KEY),
    ServiceDescriptor::secured("qwenmt", "", REQUIRED_KEY),
    ServiceDescriptor::secured(
        "claude",
        "",
        ValidatorKind::PatternMatch {
            pattern: KeyPattern::Anthropic,
            lenient: true,
            invalid_info: "The Claude API key format might be invalid. Typically starts with 'sk-ant-'.",
        },
    ),
    ServiceDescriptor::secured("mtranserver", "", ValidatorKind::AlwaysAccept),
    ServiceDescriptor::free(ServiceType::Word, "bingdict"),
    ServiceDescriptor::free(ServiceType::Word, "cambridgedict"),
    ServiceDescriptor::free(ServiceType::Word, "haicidict"),
    ServiceDescriptor::free(ServiceType::Word, "youdaodict"),
    ServiceDescriptor::free(ServiceType::Word, "freedictionaryapi"),
    ServiceDescriptor::free(ServiceType::Word, "webliodict"),
    ServiceDescriptor::free(ServiceType::Word, "collinsdict"),
];

/// Get a service descriptor by id.
///
/// Ids come from the same static registry callers iterate, so `None` means
/// the caller passed an id that was never registered.
pub fn get_service(id: &str) -> Option<&'static ServiceDescriptor> {
    SERVICES.iter().find(|service| service.id == id)
}

/// All services of one kind, in registry order.
pub fn services_of_type(service_type: ServiceType) -> impl Iterator<Item = &'static ServiceDescriptor> {
    SERVICES
        .iter()
        .filter(move |service| service.service_type == service_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==================== Registry Shape Tests ====================

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn test_kinds_partition_registry() {
        let words = services_of_type(ServiceType::Word).count();
        let sentences = services_of_type(ServiceType::Sentence).count();
        assert_eq!(words, 7);
        assert_eq!(words + sentences, SERVICES.len());
    }

    #[test]
    fn test_word_services_take_no_secret() {
        assert!(services_of_type(ServiceType::Word).all(|s| s.validator.is_none()));
    }

    #[test]
    fn test_validator_implies_default_secret() {
        for service in SERVICES.iter().filter(|s| s.validator.is_some()) {
            assert!(service.default_secret.is_some(), "{} has no default", service.id);
        }
    }

    // ==================== get_service Tests ====================

    #[test]
    fn test_get_service_found() {
        let service = get_service("baidu").expect("baidu is registered");
        assert_eq!(service.id, "baidu");
        assert_eq!(service.service_type, ServiceType::Sentence);
    }

    #[test]
    fn test_get_service_word() {
        assert_eq!(get_service("collinsdict").unwrap().service_type, ServiceType::Word);
    }

    #[test]
    fn test_get_service_unknown() {
        assert!(get_service("nonexistent").is_none());
        assert!(get_service("").is_none());
    }

    // ==================== validate_secret Tests ====================

    #[test]
    fn test_service_without_validator() {
        assert_eq!(get_service("google").unwrap().validate_secret("anything"), None);
    }

    #[test]
    fn test_delimited_defaults_are_not_set() {
        for service in SERVICES {
            if let Some(ValidatorKind::DelimitedParts { .. }) = service.validator {
                let default = service.default_secret.unwrap();
                let result = service.validate_secret(default).unwrap();
                assert!(!result.status, "{}", service.id);
                assert_eq!(result.info, "The secret is not set.", "{}", service.id);
            }
        }
    }

    #[test]
    fn test_validators_echo_secret() {
        for service in SERVICES {
            for secret in ["", "a#b", "plain", "{\"secretId\":\"x\"}"] {
                if let Some(result) = service.validate_secret(secret) {
                    assert_eq!(result.secret, secret, "{}", service.id);
                }
            }
        }
    }

    #[test]
    fn test_huoshan_and_aliyun_messages() {
        let result = get_service("huoshan").unwrap().validate_secret("a#b#c").unwrap();
        assert!(result.info.starts_with("The secret format of Huoshan Text Translation"));

        let result = get_service("aliyun").unwrap().validate_secret("id#secret").unwrap();
        assert!(result.status);
        assert_eq!(result.info, "AccessKeyId: id\nAccessKeySecret: secret");
    }

    #[test]
    fn test_youdaozhiyun_vocab_id() {
        let service = get_service("youdaozhiyun").unwrap();
        let result = service.validate_secret("app#key").unwrap();
        assert!(result.status);
        assert_eq!(result.info, "AppID: app\nAppKey: key\nVocabID: ");

        let result = service.validate_secret("app#key#vocab").unwrap();
        assert_eq!(result.info, "AppID: app\nAppKey: key\nVocabID: vocab");
    }

    #[test]
    fn test_baidufield_requires_three_parts() {
        let service = get_service("baidufield").unwrap();
        assert!(service.validate_secret("a#k#medicine").unwrap().status);
        let result = service.validate_secret("a#k").unwrap();
        assert!(!result.status);
        assert!(result.info.contains("must have 3 parts joined by '#', but got 2."));
    }

    #[test]
    fn test_caiyun_accepts_any_non_empty() {
        let service = get_service("caiyun").unwrap();
        assert!(service.validate_secret("3975l6lr5pcbvidl6jl2").unwrap().status);
        assert!(!service.validate_secret("").unwrap().status);
    }

    #[test]
    fn test_custom_gpt_and_required_key_messages() {
        let result = get_service("customgpt2").unwrap().validate_secret("").unwrap();
        assert_eq!(result.info, "The secret key format is invalid.");

        let result = get_service("gemini").unwrap().validate_secret("").unwrap();
        assert_eq!(result.info, "The secret is not set.");
        assert!(get_service("qwenmt").unwrap().validate_secret("k").unwrap().status);
    }

    #[test]
    fn test_optional_secret_services() {
        for id in ["libretranslate", "deeplcustom", "mtranserver"] {
            assert!(get_service(id).unwrap().validate_secret("").unwrap().status);
        }
    }

    // ==================== ServiceType Tests ====================

    #[test]
    fn test_service_type_from_str() {
        assert_eq!("word".parse::<ServiceType>(), Ok(ServiceType::Word));
        assert_eq!("sentence".parse::<ServiceType>(), Ok(ServiceType::Sentence));
        assert!("Word".parse::<ServiceType>().is_err());
    }

    #[test]
    fn test_service_type_display_and_serialize() {
        assert_eq!(ServiceType::Sentence.to_string(), "sentence");
        assert_eq!(serde_json::to_string(&ServiceType::Word).unwrap(), "\"word\"");
    }
}
