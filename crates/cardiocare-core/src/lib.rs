//! CardioCare Core Library
//!
//! Cardiac diagnosis decision pipeline over a local patient record store.
//!
//! # Architecture
//!
//! ```text
//! patient id + strategy name
//!         │
//!         ▼
//! ┌───────────────────┐   Patient + latest SymptomReport
//! │ SnapshotAssembler │──▶       + latest ExamReport
//! └───────────────────┘          = ClinicalSnapshot
//!         │
//!         ▼
//! ┌────────────────────┐   "rules"          → RuleBasedStrategy (local)
//! │ StrategyDispatcher │── "deep_learning"  → remote classifier ┐
//! └────────────────────┘   "random_forest"  → remote classifier ┘
//!         │                                   (cardiocare-classifier)
//!         ▼
//! ┌────────────────────┐
//! │ DiagnosticRecorder │──▶ diagnostic_records (append-only history)
//! └────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite persistence layer (patients, reports, records)
//! - [`models`]: Domain types (Patient, reports, snapshot, record)
//! - [`pipeline`]: Assembler, strategies, dispatcher, recorder

pub mod db;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use db::Database;
pub use models::{
    AttackStatus, ClinicalSnapshot, DiagnosticRecord, DiagnosticResult, ExamReport, Patient,
    StrategyVerdict, SymptomReport, ValidationError,
};
pub use pipeline::{
    DiagnosisService, DiagnosticStrategy, PipelineError, RuleBasedStrategy, StrategyDispatcher,
    StrategyError, StrategyKind,
};
