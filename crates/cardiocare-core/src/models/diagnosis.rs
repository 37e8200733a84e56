//! Diagnosis models: snapshot input, strategy output and the persisted record.

use serde::{Deserialize, Serialize};

use super::{ExamReport, Patient, SymptomReport};

/// The read-only input to a diagnosis: the patient profile plus the
/// latest symptom and exam reports, assembled at the moment of diagnosis.
///
/// All three components belong to the same patient; the assembler fails
/// rather than produce a partial snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClinicalSnapshot {
    pub patient: Patient,
    pub symptoms: SymptomReport,
    pub exams: ExamReport,
}

/// Cardiac event severity classification produced by a strategy.
///
/// The three fixed labels come from the expert rules; a statistical
/// classifier may mint its own label, carried as [`AttackStatus::Model`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum AttackStatus {
    Normal,
    Nstemi,
    Stemi,
    /// Label minted by a statistical model
    Model(String),
}

impl AttackStatus {
    pub fn label(&self) -> &str {
        match self {
            AttackStatus::Normal => "Normal/Stable",
            AttackStatus::Nstemi => "NSTEMI (elevated risk)",
            AttackStatus::Stemi => "STEMI (critical)",
            AttackStatus::Model(label) => label,
        }
    }
}

impl std::fmt::Display for AttackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for AttackStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Normal/Stable" => AttackStatus::Normal,
            "NSTEMI (elevated risk)" => AttackStatus::Nstemi,
            "STEMI (critical)" => AttackStatus::Stemi,
            _ => AttackStatus::Model(label),
        }
    }
}

impl From<AttackStatus> for String {
    fn from(status: AttackStatus) -> Self {
        status.label().to_string()
    }
}

/// Raw output of a diagnostic strategy, before dispatcher normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyVerdict {
    pub status: AttackStatus,
    /// Disposition recommendation (e.g. "surgical emergency")
    pub decision: String,
    /// Explanatory factors, when the strategy provides them
    pub explanation: Option<Vec<String>>,
}

/// Normalized diagnosis outcome: what gets persisted, minus identity
/// and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticResult {
    pub status: AttackStatus,
    pub decision: String,
    /// Flattened explanatory factors, or a fixed label for the rules
    /// strategy, or empty
    pub details: String,
}

/// A permanent history entry: one row per successful diagnosis.
///
/// Append-only. No update or delete path exists for these records;
/// they are the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticRecord {
    /// Surrogate id, assigned by the database on insert (0 until then)
    pub id: i64,
    pub patient_id: i64,
    /// Reviewing clinician, when the caller supplied one
    pub doctor_id: Option<i64>,
    /// Diagnosis timestamp (RFC 3339)
    pub recorded_at: String,
    pub status: AttackStatus,
    pub decision: String,
    pub details: String,
}
