//! Patient models.

use serde::{Deserialize, Serialize};

use super::{check_range, ExamReport, SymptomReport, ValidationError};

/// A patient record: identity plus the static risk profile the
/// diagnostic pipeline reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Surrogate id, assigned by the database on insert (0 until then)
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Age in years, 0-120
    pub age: u8,
    /// Sex as recorded at intake (e.g. "M", "F")
    pub sex: String,
    /// Pre-existing diabetes
    pub diabetes: bool,
    /// Pre-existing pulmonary condition
    pub pulmonary_disease: bool,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl Patient {
    /// Create a new patient with required fields, validating the age range.
    pub fn new(
        first_name: String,
        last_name: String,
        age: u8,
        sex: String,
    ) -> Result<Self, ValidationError> {
        check_range("age", age as f64, 0.0, 120.0)?;
        Ok(Self {
            id: 0,
            first_name,
            last_name,
            age,
            sex,
            diabetes: false,
            pulmonary_disease: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

/// A patient's latest record view: the profile plus whichever reports
/// exist, used to pre-fill data entry and to gate the diagnose action.
///
/// Unlike a [`ClinicalSnapshot`](super::ClinicalSnapshot), missing
/// reports are represented as `None` rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecordView {
    pub patient: Patient,
    pub symptoms: Option<SymptomReport>,
    pub exams: Option<ExamReport>,
}

impl PatientRecordView {
    /// A patient is diagnosable once both report kinds are on file.
    pub fn has_record(&self) -> bool {
        self.symptoms.is_some() && self.exams.is_some()
    }
}
