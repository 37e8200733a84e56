//! The diagnostic decision pipeline.
//!
//! Control flow: caller supplies patient id + strategy name →
//! [`SnapshotAssembler`] builds the snapshot → [`StrategyDispatcher`]
//! invokes the chosen [`DiagnosticStrategy`] and normalizes its verdict →
//! [`DiagnosticRecorder`] persists the outcome as a history entry.
//!
//! Every request is independent and runs to completion within the
//! inbound call; there is no queueing, background work or automatic
//! retry. Any failure aborts before the write, so failed diagnoses never
//! appear in history.

mod assembler;
mod dispatcher;
mod recorder;
mod rules;
mod strategy;

pub use assembler::*;
pub use dispatcher::*;
pub use recorder::*;
pub use rules::*;
pub use strategy::*;

use thiserror::Error;

use crate::db::{Database, DbError};
use crate::models::DiagnosticRecord;

/// Pipeline errors.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("patient not found: {0}")]
    PatientNotFound(i64),

    #[error("missing clinical data for patient {patient_id}: no {kind} report on file")]
    MissingClinicalData { patient_id: i64, kind: &'static str },

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error("database error: {0}")]
    Database(#[from] DbError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Facade wiring assembler, dispatcher and recorder into the single
/// entry point exposed to callers.
pub struct DiagnosisService<'a> {
    db: &'a Database,
    dispatcher: StrategyDispatcher,
}

impl<'a> DiagnosisService<'a> {
    pub fn new(db: &'a Database, dispatcher: StrategyDispatcher) -> Self {
        Self { db, dispatcher }
    }

    /// A service limited to the local expert rules.
    pub fn with_rules(db: &'a Database) -> Self {
        Self::new(db, StrategyDispatcher::with_rules())
    }

    /// Run one diagnosis: assemble the snapshot, invoke the named
    /// strategy and persist the outcome.
    ///
    /// The reviewing clinician is an explicit parameter; there is no
    /// ambient "current user". Nothing is persisted unless assembly and
    /// dispatch both succeed.
    pub fn diagnose(
        &self,
        patient_id: i64,
        strategy_name: &str,
        doctor_id: Option<i64>,
    ) -> PipelineResult<DiagnosticRecord> {
        let snapshot = SnapshotAssembler::new(self.db).assemble(patient_id)?;
        let result = self.dispatcher.dispatch(&snapshot, strategy_name)?;
        DiagnosticRecorder::new(self.db).record(patient_id, doctor_id, &result)
    }

    /// A patient's diagnostic history, newest first.
    pub fn history(&self, patient_id: i64) -> PipelineResult<Vec<DiagnosticRecord>> {
        DiagnosticRecorder::new(self.db).history(patient_id)
    }
}
