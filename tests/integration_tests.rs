//! Integration tests for language resolution and the service registry
//!
//! These tests go through the public API only: the global resolver, the
//! static registry and the priority sorter.

use proptest::prelude::*;
use translate_registry::i18n::{
    alpha3_to_alpha2, base_code, infer_language, match_language, LanguageDetector, LanguageEntry,
    LanguageResolver, LANG_CODE,
};
use translate_registry::services::{
    get_service, ranked_services, sorted_services, PriorityOverrides, ServiceType, ValidatorKind,
    PRIORITY_BASELINE, PRIORITY_FREE, SERVICES,
};

// ==================== Test Helpers ====================

/// Bare two-letter codes present in the language table
fn two_letter_codes() -> Vec<&'static str> {
    LANG_CODE
        .iter()
        .map(|entry| entry.code)
        .filter(|code| code.len() == 2 && code.chars().all(|c| c.is_ascii_lowercase()))
        .collect()
}

struct FixedDetector(&'static str);

impl LanguageDetector for FixedDetector {
    fn detect(&self, _text: &str, _min_length: usize) -> Option<String> {
        Some(self.0.to_string())
    }
}

// ==================== Language Matching Tests ====================

#[test]
fn test_every_two_letter_code_matches() {
    for code in two_letter_codes() {
        let entry = match_language(code);
        assert!(!entry.is_unknown(), "{} should resolve", code);
        assert_eq!(match_language(&code.to_uppercase()), entry);
    }
}

#[test]
fn test_match_returns_first_bare_entry() {
    for code in two_letter_codes() {
        let first = LANG_CODE.iter().find(|e| e.code == code).unwrap();
        assert_eq!(match_language(code), *first);
    }
}

#[test]
fn test_match_regional_variants() {
    assert_eq!(match_language("pt-BR"), LanguageEntry::new("pt", "Portuguese"));
    assert_eq!(match_language("es_MX"), LanguageEntry::new("es", "Spanish"));
    assert_eq!(match_language("zh-TW"), LanguageEntry::new("zh", "Chinese"));
}

proptest! {
    #[test]
    fn prop_match_is_case_insensitive(index in 0usize..200, upper in any::<bool>()) {
        let codes = two_letter_codes();
        let code = codes[index % codes.len()];
        let input = if upper { code.to_uppercase() } else { code.to_string() };
        prop_assert_eq!(match_language(&input), match_language(code));
    }

    #[test]
    fn prop_unknown_base_codes_yield_sentinel(input in "[a-z]{4,8}") {
        // No bare code in the table is longer than three letters
        prop_assert_eq!(match_language(&input), LanguageEntry::UNKNOWN);
    }

    #[test]
    fn prop_region_suffix_does_not_change_match(region in "[A-Z]{2}") {
        let with_region = format!("fr-{}", region);
        prop_assert_eq!(match_language(&with_region), LanguageEntry::new("fr", "French"));
    }
}

#[test]
fn test_base_code_of_every_table_code() {
    for entry in LANG_CODE {
        let base = base_code(entry.code);
        assert!(!base.is_empty());
        assert!(!base.contains('-'));
    }
}

// ==================== Inference Tests ====================

#[test]
fn test_infer_french_sentence() {
    let entry = infer_language("Bonjour tout le monde, comment allez-vous aujourd'hui?");
    assert_eq!(entry, LanguageEntry::new("fr", "French"));
}

#[test]
fn test_infer_spanish_paragraph() {
    let entry = infer_language(
        "El perro corre por el parque todas las mañanas mientras los niños juegan con la pelota.",
    );
    assert_eq!(entry, LanguageEntry::new("es", "Spanish"));
}

#[test]
fn test_infer_too_short_is_unknown() {
    assert_eq!(infer_language("ok"), LanguageEntry::UNKNOWN);
    assert_eq!(infer_language(""), LanguageEntry::UNKNOWN);
}

#[test]
fn test_infer_with_individual_language_code() {
    let resolver = LanguageResolver::with_detector(Box::new(FixedDetector("yue")));
    assert_eq!(
        resolver.infer_language("whatever"),
        LanguageEntry::new("zh", "Chinese")
    );
}

#[test]
fn test_normalize_prefers_direct_mapping() {
    let resolver = LanguageResolver::global();
    for code3 in ["fra", "eng", "ind", "nob", "srp"] {
        assert_eq!(resolver.normalize(code3), alpha3_to_alpha2(code3));
        assert!(resolver.normalize(code3).is_some());
    }
}

// ==================== Secret Validation Tests ====================

#[test]
fn test_baidu_two_parts() {
    let result = get_service("baidu")
        .unwrap()
        .validate_secret("appid#key")
        .unwrap();
    assert!(result.status);
    assert_eq!(result.secret, "appid#key");
    assert_eq!(result.info, "AppID: appid\nKey: key\nAction: 0");
}

#[test]
fn test_baidu_default_placeholder() {
    let service = get_service("baidu").unwrap();
    let result = service
        .validate_secret(service.default_secret.unwrap())
        .unwrap();
    assert!(!result.status);
    assert_eq!(result.info, "The secret is not set.");
}

#[test]
fn test_baidu_three_part_placeholder_literal() {
    let result = get_service("baidu")
        .unwrap()
        .validate_secret("appid#key#3")
        .unwrap();
    assert!(!result.status);
    assert_eq!(result.secret, "appid#key#3");
    assert_eq!(result.info, "The secret is not set.");
}

#[test]
fn test_baidu_too_many_parts() {
    let result = get_service("baidu")
        .unwrap()
        .validate_secret("a#b#c#d")
        .unwrap();
    assert!(!result.status);
    assert!(result.info.starts_with(
        "The secret format of Baidu Text Translation is AppID#Key#Action(optional). \
         The secret must have 2 or 3 parts joined by '#', but got 4."
    ));
}

#[test]
fn test_chatgpt_key() {
    let service = get_service("chatgpt").unwrap();

    let result = service.validate_secret("").unwrap();
    assert!(!result.status);
    assert_eq!(result.info, "The secret is not set.");

    let key = format!("sk-{}", "a".repeat(32));
    let result = service.validate_secret(&key).unwrap();
    assert!(result.status);
    assert_eq!(result.info, "Click the button to check connectivity.");

    let result = service.validate_secret("not-a-key").unwrap();
    assert!(!result.status);
    assert_eq!(result.info, "The secret key format is invalid.");
}

#[test]
fn test_claude_accepts_non_standard_key_with_warning() {
    let result = get_service("claude")
        .unwrap()
        .validate_secret("proxy-token")
        .unwrap();
    assert!(result.status);
    assert!(result.info.contains("might be invalid"));
}

#[test]
fn test_microsoft_key_with_region() {
    let service = get_service("microsoft").unwrap();
    assert!(service
        .validate_secret(&format!("{}#westeurope", "k".repeat(32)))
        .unwrap()
        .status);
    let result = service.validate_secret("short#westeurope").unwrap();
    assert!(!result.status);
    assert!(result.info.ends_with("must be 32 or 84, but got 5."));
}

#[test]
fn test_tencent_structured_and_legacy() {
    let service = get_service("tencent").unwrap();

    let structured = r#"{"secretId":"AKID","secretKey":"k","region":"ap-beijing"}"#;
    let result = service.validate_secret(structured).unwrap();
    assert!(result.status);
    assert!(result.info.contains("Region: ap-beijing"));
    assert!(result.info.contains("SecretKey: Set"));
    assert!(!result.info.contains("\"k\""));

    let result = service.validate_secret("AKID#k").unwrap();
    assert!(result.status);
    assert!(result.info.contains("Region: ap-shanghai"));
}

#[test]
fn test_every_delimited_default_is_not_set() {
    for service in SERVICES {
        if let Some(ValidatorKind::DelimitedParts { .. }) = service.validator {
            let result = service
                .validate_secret(service.default_secret.unwrap())
                .unwrap();
            assert!(!result.status, "{}", service.id);
            assert_eq!(result.info, "The secret is not set.");
        }
    }
}

// ==================== Service Sorting Tests ====================

#[test]
fn test_sorted_sentence_services_are_stable() {
    let overrides = PriorityOverrides::new();
    let first: Vec<_> = sorted_services(ServiceType::Sentence, &overrides)
        .iter()
        .map(|s| s.id)
        .collect();
    let second: Vec<_> = sorted_services(ServiceType::Sentence, &overrides)
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(first, second);
    assert_eq!(first[0], "bing");
}

#[test]
fn test_free_services_precede_baseline() {
    let ranked = ranked_services(ServiceType::Sentence, &PriorityOverrides::new());
    let mut seen_baseline = false;
    for (service, priority) in &ranked {
        if *priority == PRIORITY_BASELINE {
            seen_baseline = true;
        }
        if *priority == PRIORITY_FREE {
            assert!(!seen_baseline, "{} listed after a baseline service", service.id);
        }
    }
}

#[test]
fn test_sorted_services_cover_whole_kind() {
    let overrides = PriorityOverrides::new();
    let total = sorted_services(ServiceType::Sentence, &overrides).len()
        + sorted_services(ServiceType::Word, &overrides).len();
    assert_eq!(total, SERVICES.len());
}
