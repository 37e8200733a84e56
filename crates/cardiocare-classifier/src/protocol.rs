//! Wire protocol for the remote diagnosis services.

use serde::{Deserialize, Serialize};

use cardiocare_core::models::ClinicalSnapshot;

/// The statistical model to run, sent as the `model_type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Statistical network (MLP)
    DeepLearning,
    /// Ensemble tree (random forest)
    RandomForest,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::DeepLearning => "deep_learning",
            ModelKind::RandomForest => "random_forest",
        }
    }
}

/// Request body shared by both diagnosis endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisRequest {
    pub patient: PatientFields,
    pub symptoms: SymptomFields,
    pub exams: ExamFields,
    /// Only the classifier endpoint takes a model discriminator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientFields {
    pub age: u8,
    pub sex: String,
    pub diabetes: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomFields {
    pub chest_pain: u8,
    pub breath_problems: u8,
    pub cold_sweat: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExamFields {
    pub ecg: u8,
    pub mri: u8,
    pub pulse_rate: u16,
    pub cholesterol: f64,
    /// 0/1 coded; data entry defaults this to 0
    pub fasting_blood_sugar: u8,
}

impl DiagnosisRequest {
    /// Serialize a snapshot into the fixed request shape.
    pub fn from_snapshot(snapshot: &ClinicalSnapshot) -> Self {
        Self {
            patient: PatientFields {
                age: snapshot.patient.age,
                sex: snapshot.patient.sex.clone(),
                diabetes: snapshot.patient.diabetes,
            },
            symptoms: SymptomFields {
                chest_pain: snapshot.symptoms.chest_pain,
                breath_problems: snapshot.symptoms.breath_difficulty,
                cold_sweat: snapshot.symptoms.cold_sweat,
            },
            exams: ExamFields {
                ecg: snapshot.exams.ecg,
                mri: snapshot.exams.mri,
                pulse_rate: snapshot.exams.pulse_rate,
                cholesterol: snapshot.exams.cholesterol,
                fasting_blood_sugar: snapshot.exams.fasting_blood_sugar as u8,
            },
            model_type: None,
        }
    }

    /// Tag the request with a model discriminator for the classifier
    /// endpoint.
    pub fn with_model(mut self, model: ModelKind) -> Self {
        self.model_type = Some(model.as_str().to_string());
        self
    }
}

/// Response body from either diagnosis endpoint.
///
/// `attack_status` and `decision` are required; a response missing
/// either fails to decode and is treated as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisResponse {
    pub attack_status: String,
    pub decision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardiocare_core::models::{ExamReport, Patient, SymptomReport};

    fn make_snapshot() -> ClinicalSnapshot {
        let mut patient = Patient::new("Test".into(), "Patient".into(), 70, "M".into()).unwrap();
        patient.id = 1;
        patient.diabetes = true;
        ClinicalSnapshot {
            patient,
            symptoms: SymptomReport::new(1, 2, 1, true).unwrap(),
            exams: ExamReport::new(1, 2, 0, 90, 200.0).unwrap(),
        }
    }

    #[test]
    fn test_request_shape() {
        let request = DiagnosisRequest::from_snapshot(&make_snapshot());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["patient"]["age"], 70);
        assert_eq!(json["patient"]["diabetes"], true);
        assert_eq!(json["symptoms"]["chest_pain"], 2);
        assert_eq!(json["symptoms"]["breath_problems"], 1);
        assert_eq!(json["exams"]["cholesterol"], 200.0);
        assert_eq!(json["exams"]["fasting_blood_sugar"], 0);
        // No model discriminator unless requested.
        assert!(json.get("model_type").is_none());
    }

    #[test]
    fn test_model_discriminator() {
        let request =
            DiagnosisRequest::from_snapshot(&make_snapshot()).with_model(ModelKind::RandomForest);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model_type"], "random_forest");
    }

    #[test]
    fn test_response_requires_status_and_decision() {
        let ok: Result<DiagnosisResponse, _> = serde_json::from_str(
            r#"{"attack_status": "Normal/Stable", "decision": "discharge home"}"#,
        );
        assert!(ok.is_ok());
        assert_eq!(ok.unwrap().explanation, None);

        let missing: Result<DiagnosisResponse, _> =
            serde_json::from_str(r#"{"decision": "discharge home"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_response_with_explanation() {
        let response: DiagnosisResponse = serde_json::from_str(
            r#"{
                "attack_status": "NSTEMI (prob 0.81)",
                "decision": "intensive observation",
                "explanation": ["high cholesterol", "diabetes"]
            }"#,
        )
        .unwrap();
        assert_eq!(response.explanation.unwrap().len(), 2);
    }
}
