//! Symptom and exam report models.
//!
//! Reports are immutable once created. A patient accumulates reports over
//! time; only the most recent of each kind participates in a diagnosis.

use serde::{Deserialize, Serialize};

use super::{check_range, ValidationError};

/// A symptom report entered by clinical staff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomReport {
    /// Surrogate id, assigned by the database on insert (0 until then)
    pub id: i64,
    pub patient_id: i64,
    /// Chest pain severity: 0 none, 1 moderate, 2 intense
    pub chest_pain: u8,
    /// Breathing difficulty severity: 0 none, 1 moderate, 2 intense
    pub breath_difficulty: u8,
    pub cold_sweat: bool,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl SymptomReport {
    pub fn new(
        patient_id: i64,
        chest_pain: u8,
        breath_difficulty: u8,
        cold_sweat: bool,
    ) -> Result<Self, ValidationError> {
        check_range("chest_pain", chest_pain as f64, 0.0, 2.0)?;
        check_range("breath_difficulty", breath_difficulty as f64, 0.0, 2.0)?;
        Ok(Self {
            id: 0,
            patient_id,
            chest_pain,
            breath_difficulty,
            cold_sweat,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

/// An exam report (ECG, imaging and lab values).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExamReport {
    /// Surrogate id, assigned by the database on insert (0 until then)
    pub id: i64,
    pub patient_id: i64,
    /// ECG finding: 0 normal, 1 abnormal, 2 severe
    pub ecg: u8,
    /// MRI finding, boolean-coded 0/1
    pub mri: u8,
    /// Pulse rate in bpm, 30-250
    pub pulse_rate: u16,
    /// Total cholesterol, 50-600
    pub cholesterol: f64,
    /// Not independently collected at data entry; defaults to false
    pub fasting_blood_sugar: bool,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl ExamReport {
    pub fn new(
        patient_id: i64,
        ecg: u8,
        mri: u8,
        pulse_rate: u16,
        cholesterol: f64,
    ) -> Result<Self, ValidationError> {
        check_range("ecg", ecg as f64, 0.0, 2.0)?;
        check_range("mri", mri as f64, 0.0, 1.0)?;
        check_range("pulse_rate", pulse_rate as f64, 30.0, 250.0)?;
        check_range("cholesterol", cholesterol, 50.0, 600.0)?;
        Ok(Self {
            id: 0,
            patient_id,
            ecg,
            mri,
            pulse_rate,
            cholesterol,
            fasting_blood_sugar: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}
