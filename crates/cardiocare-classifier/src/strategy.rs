//! Remote strategy implementations.

use cardiocare_core::models::{AttackStatus, ClinicalSnapshot, StrategyVerdict};
use cardiocare_core::pipeline::{DiagnosticStrategy, StrategyError, StrategyKind};

use super::client::ClassifierClient;
use super::protocol::{DiagnosisRequest, DiagnosisResponse, ModelKind};

/// Diagnosis via the remote statistical-classifier service,
/// parameterized by the model to run.
pub struct RemoteClassifierStrategy {
    client: ClassifierClient,
    model: ModelKind,
}

impl RemoteClassifierStrategy {
    pub fn new(client: ClassifierClient, model: ModelKind) -> Self {
        Self { client, model }
    }
}

impl DiagnosticStrategy for RemoteClassifierStrategy {
    fn kind(&self) -> StrategyKind {
        match self.model {
            ModelKind::DeepLearning => StrategyKind::DeepLearning,
            ModelKind::RandomForest => StrategyKind::RandomForest,
        }
    }

    fn diagnose(&self, snapshot: &ClinicalSnapshot) -> Result<StrategyVerdict, StrategyError> {
        let request = DiagnosisRequest::from_snapshot(snapshot).with_model(self.model);
        tracing::debug!(model = self.model.as_str(), patient_id = snapshot.patient.id,
            "calling classifier service");
        let response = self.client.classify(&request)?;
        verdict_from_response(response)
    }
}

/// Diagnosis via the remote rules service, for deployments that run the
/// rule evaluation as a service instead of the in-process
/// `RuleBasedStrategy`.
pub struct RemoteRulesStrategy {
    client: ClassifierClient,
}

impl RemoteRulesStrategy {
    pub fn new(client: ClassifierClient) -> Self {
        Self { client }
    }
}

impl DiagnosticStrategy for RemoteRulesStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Rules
    }

    fn diagnose(&self, snapshot: &ClinicalSnapshot) -> Result<StrategyVerdict, StrategyError> {
        let request = DiagnosisRequest::from_snapshot(snapshot);
        tracing::debug!(patient_id = snapshot.patient.id, "calling rules service");
        let response = self.client.diagnose_rules(&request)?;
        verdict_from_response(response)
    }
}

fn verdict_from_response(response: DiagnosisResponse) -> Result<StrategyVerdict, StrategyError> {
    if response.attack_status.is_empty() || response.decision.is_empty() {
        return Err(StrategyError::BackendMalformedResponse(
            "empty attack_status or decision".into(),
        ));
    }
    Ok(StrategyVerdict {
        status: AttackStatus::from(response.attack_status),
        decision: response.decision,
        explanation: response.explanation,
    })
}
