//! Durable recording of diagnosis outcomes.

use crate::db::Database;
use crate::models::{DiagnosticRecord, DiagnosticResult};

use super::PipelineResult;

/// Persists normalized results as append-only history entries and reads
/// them back newest-first.
pub struct DiagnosticRecorder<'a> {
    db: &'a Database,
}

impl<'a> DiagnosticRecorder<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Stamp the current time, persist the result and return the stored
    /// record. No uniqueness constraint: repeated diagnoses accumulate.
    pub fn record(
        &self,
        patient_id: i64,
        doctor_id: Option<i64>,
        result: &DiagnosticResult,
    ) -> PipelineResult<DiagnosticRecord> {
        let mut record = DiagnosticRecord {
            id: 0,
            patient_id,
            doctor_id,
            recorded_at: chrono::Utc::now().to_rfc3339(),
            status: result.status.clone(),
            decision: result.decision.clone(),
            details: result.details.clone(),
        };
        record.id = self.db.insert_diagnostic_record(&record)?;
        tracing::info!(
            patient_id,
            record_id = record.id,
            status = %record.status,
            "diagnosis recorded"
        );
        Ok(record)
    }

    /// A patient's diagnostic history, newest first; empty if none.
    pub fn history(&self, patient_id: i64) -> PipelineResult<Vec<DiagnosticRecord>> {
        Ok(self.db.diagnostic_history(patient_id)?)
    }
}
