//! HTTP client for the remote diagnosis services.

use cardiocare_core::pipeline::StrategyError;

use super::config::ClassifierConfig;
use super::protocol::{DiagnosisRequest, DiagnosisResponse};

/// Blocking HTTP client over the two diagnosis endpoints.
///
/// One client instance, per-request timeouts: the rules endpoint gets
/// the short timeout, the classifier endpoint the long one. Cloning is
/// cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ClassifierClient {
    config: ClassifierConfig,
    client: reqwest::blocking::Client,
}

impl ClassifierClient {
    pub fn new(config: ClassifierConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .build()
            .expect("Failed to create HTTP client");
        Self { config, client }
    }

    /// Client against the endpoints named in the environment, or the
    /// compiled defaults.
    pub fn from_env() -> Self {
        Self::new(ClassifierConfig::from_env())
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Ask the rules service for a diagnosis.
    pub fn diagnose_rules(
        &self,
        request: &DiagnosisRequest,
    ) -> Result<DiagnosisResponse, StrategyError> {
        self.post(
            &self.config.rules_url,
            self.config.rules_timeout,
            request,
        )
    }

    /// Ask the classifier service for a diagnosis. The request must
    /// carry a `model_type` discriminator.
    pub fn classify(
        &self,
        request: &DiagnosisRequest,
    ) -> Result<DiagnosisResponse, StrategyError> {
        self.post(
            &self.config.classifier_url,
            self.config.classifier_timeout,
            request,
        )
    }

    fn post(
        &self,
        url: &str,
        timeout: std::time::Duration,
        request: &DiagnosisRequest,
    ) -> Result<DiagnosisResponse, StrategyError> {
        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    StrategyError::BackendUnavailable(format!(
                        "request to {url} timed out after {}s",
                        timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    StrategyError::BackendUnavailable(format!("cannot connect to {url}"))
                } else {
                    StrategyError::BackendUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "diagnosis service returned error");
            return Err(StrategyError::BackendUnavailable(format!(
                "diagnosis service at {url} returned status {}",
                status.as_u16()
            )));
        }

        response
            .json::<DiagnosisResponse>()
            .map_err(|e| StrategyError::BackendMalformedResponse(e.to_string()))
    }
}
