//! The deterministic expert-rule strategy.

use crate::models::{AttackStatus, ClinicalSnapshot, StrategyVerdict};

use super::{DiagnosticStrategy, StrategyError, StrategyKind};

/// Disposition for a critical (STEMI) case.
pub const DECISION_SURGICAL_EMERGENCY: &str = "surgical emergency";
/// Disposition for an elevated-risk (NSTEMI) case.
pub const DECISION_INTENSIVE_OBSERVATION: &str = "intensive observation";
/// Disposition for a stable case.
pub const DECISION_DISCHARGE_HOME: &str = "discharge home";

/// Cholesterol threshold for the elevated-risk rule.
const CHOLESTEROL_THRESHOLD: f64 = 240.0;

/// Local, deterministic diagnosis: three ordered rules, first match wins.
///
/// The order is significant. A STEMI presentation can also satisfy the
/// NSTEMI condition set, so the critical rule is always checked first and
/// the highest-severity match wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedStrategy;

impl DiagnosticStrategy for RuleBasedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Rules
    }

    fn diagnose(&self, snapshot: &ClinicalSnapshot) -> Result<StrategyVerdict, StrategyError> {
        let symptoms = &snapshot.symptoms;
        let exams = &snapshot.exams;

        // Rule 1: critical (STEMI)
        if symptoms.chest_pain == 2 && (exams.ecg == 2 || exams.mri == 1) {
            return Ok(verdict(AttackStatus::Stemi, DECISION_SURGICAL_EMERGENCY));
        }

        // Rule 2: elevated risk (NSTEMI)
        if (symptoms.chest_pain >= 1 || symptoms.breath_difficulty >= 1)
            && (exams.cholesterol > CHOLESTEROL_THRESHOLD || snapshot.patient.diabetes)
        {
            return Ok(verdict(AttackStatus::Nstemi, DECISION_INTENSIVE_OBSERVATION));
        }

        // Rule 3: default
        Ok(verdict(AttackStatus::Normal, DECISION_DISCHARGE_HOME))
    }
}

fn verdict(status: AttackStatus, decision: &str) -> StrategyVerdict {
    StrategyVerdict {
        status,
        decision: decision.to_string(),
        explanation: None,
    }
}
