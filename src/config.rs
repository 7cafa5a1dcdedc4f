use crate::i18n::DEFAULT_MIN_LENGTH;
use crate::services::{get_service, parse_priority_overrides, PriorityOverrides};
use anyhow::{Context, Result};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Service ordering
    pub priority_overrides: PriorityOverrides,

    // Language detection
    pub detect_min_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            priority_overrides: PriorityOverrides::new(),
            detect_min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let priority_overrides = match std::env::var("SERVICE_PRIORITIES") {
            Ok(raw) => parse_priority_overrides(&raw).context("Invalid SERVICE_PRIORITIES")?,
            Err(_) => PriorityOverrides::new(),
        };

        for id in priority_overrides.keys() {
            if get_service(id).is_none() {
                warn!("SERVICE_PRIORITIES names unknown service '{}'", id);
            }
        }

        Ok(Self {
            priority_overrides,

            // Language detection
            detect_min_length: match std::env::var("DETECT_MIN_LENGTH") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("DETECT_MIN_LENGTH is not a number: '{}'", raw))?,
                Err(_) => DEFAULT_MIN_LENGTH,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("SERVICE_PRIORITIES");
        std::env::remove_var("DETECT_MIN_LENGTH");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config, Config::default());
        assert_eq!(config.detect_min_length, 3);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_priorities() {
        clear_env();
        std::env::set_var("SERVICE_PRIORITIES", "google=130,bing=90");
        let config = Config::from_env().expect("should load");
        clear_env();

        assert_eq!(config.priority_overrides.get("google"), Some(&130.0));
        assert_eq!(config.priority_overrides.get("bing"), Some(&90.0));
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_service_is_kept() {
        clear_env();
        std::env::set_var("SERVICE_PRIORITIES", "mystery=1");
        let config = Config::from_env().expect("should load");
        clear_env();

        assert_eq!(config.priority_overrides.get("mystery"), Some(&1.0));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_malformed_priorities() {
        clear_env();
        std::env::set_var("SERVICE_PRIORITIES", "google");
        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("SERVICE_PRIORITIES"));
    }

    #[test]
    #[serial]
    fn test_from_env_min_length() {
        clear_env();
        std::env::set_var("DETECT_MIN_LENGTH", "10");
        let config = Config::from_env().expect("should load");
        std::env::set_var("DETECT_MIN_LENGTH", "ten");
        let result = Config::from_env();
        clear_env();

        assert_eq!(config.detect_min_length, 10);
        assert!(result.is_err());
    }
}
