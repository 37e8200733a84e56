//! Endpoint configuration for the remote diagnosis services.

use std::time::Duration;

/// Default rules-service endpoint.
pub const DEFAULT_RULES_URL: &str = "http://localhost:5001/diagnose_rules";
/// Default statistical-classifier endpoint.
pub const DEFAULT_CLASSIFIER_URL: &str = "http://localhost:5002/diagnose_ml";

/// Rules evaluation is cheap; its endpoint gets a short timeout.
const DEFAULT_RULES_TIMEOUT_SECS: u64 = 8;
/// Statistical inference is heavier and gets a longer one.
const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 15;

/// Where the two diagnosis services live and how long to wait for each.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    pub rules_url: String,
    pub classifier_url: String,
    pub rules_timeout: Duration,
    pub classifier_timeout: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rules_url: DEFAULT_RULES_URL.into(),
            classifier_url: DEFAULT_CLASSIFIER_URL.into(),
            rules_timeout: Duration::from_secs(DEFAULT_RULES_TIMEOUT_SECS),
            classifier_timeout: Duration::from_secs(DEFAULT_CLASSIFIER_TIMEOUT_SECS),
        }
    }
}

impl ClassifierConfig {
    /// Defaults overridden by `CARDIOCARE_RULES_URL`, `CARDIOCARE_ML_URL`,
    /// `CARDIOCARE_RULES_TIMEOUT_SECS` and `CARDIOCARE_ML_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("CARDIOCARE_RULES_URL") {
            config.rules_url = url;
        }
        if let Ok(url) = std::env::var("CARDIOCARE_ML_URL") {
            config.classifier_url = url;
        }
        if let Some(secs) = env_secs("CARDIOCARE_RULES_TIMEOUT_SECS") {
            config.rules_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_secs("CARDIOCARE_ML_TIMEOUT_SECS") {
            config.classifier_timeout = Duration::from_secs(secs);
        }
        config
    }
}

fn env_secs(key: &str) -> Option<u64> {
    std::env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.rules_timeout, Duration::from_secs(8));
        assert_eq!(config.classifier_timeout, Duration::from_secs(15));
        assert!(config.classifier_timeout > config.rules_timeout);
    }
}
