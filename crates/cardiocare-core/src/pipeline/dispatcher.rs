//! Strategy selection and result normalization.

use std::collections::HashMap;

use crate::models::{ClinicalSnapshot, DiagnosticResult, StrategyVerdict};

use super::{DiagnosticStrategy, PipelineError, PipelineResult, RuleBasedStrategy, StrategyKind};

/// Details string stored when the expert rules produce no explanation.
pub const EXPERT_RULES_DETAILS: &str = "Expert rules";

/// Resolves a strategy name to a registered strategy, invokes it and
/// normalizes the verdict for storage.
///
/// The registry is a closed set: names outside [`StrategyKind`] and
/// kinds without a registered strategy both fail with
/// [`PipelineError::UnknownStrategy`] before any backend is touched.
pub struct StrategyDispatcher {
    strategies: HashMap<StrategyKind, Box<dyn DiagnosticStrategy>>,
}

impl StrategyDispatcher {
    /// An empty dispatcher with no strategies registered.
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// A dispatcher with only the local expert rules registered.
    pub fn with_rules() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(Box::new(RuleBasedStrategy));
        dispatcher
    }

    /// Register a strategy under its own kind, replacing any previous
    /// registration for that kind.
    pub fn register(&mut self, strategy: Box<dyn DiagnosticStrategy>) {
        self.strategies.insert(strategy.kind(), strategy);
    }

    /// Invoke the named strategy on the snapshot.
    ///
    /// Strategy failures propagate as-is; there is no retry. The verdict's
    /// explanatory factors are flattened into the `details` string:
    /// comma-joined when present, the fixed rules label for the rule-based
    /// strategy, and empty for remote strategies that offer none.
    pub fn dispatch(
        &self,
        snapshot: &ClinicalSnapshot,
        strategy_name: &str,
    ) -> PipelineResult<DiagnosticResult> {
        let kind = StrategyKind::parse(strategy_name)
            .ok_or_else(|| PipelineError::UnknownStrategy(strategy_name.to_string()))?;
        let strategy = self
            .strategies
            .get(&kind)
            .ok_or_else(|| PipelineError::UnknownStrategy(strategy_name.to_string()))?;

        tracing::debug!(strategy = %kind, patient_id = snapshot.patient.id, "dispatching diagnosis");
        let verdict = strategy.diagnose(snapshot)?;
        tracing::debug!(strategy = %kind, status = %verdict.status, "strategy verdict");

        Ok(normalize(kind, verdict))
    }
}

impl Default for StrategyDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(kind: StrategyKind, verdict: StrategyVerdict) -> DiagnosticResult {
    let details = match verdict.explanation {
        Some(factors) if !factors.is_empty() => factors.join(", "),
        // The rules evaluator never explains itself; anything else that
        // omits an explanation gets a neutral empty value rather than a
        // clinical-sounding guess.
        _ if kind == StrategyKind::Rules => EXPERT_RULES_DETAILS.to_string(),
        _ => String::new(),
    };
    DiagnosticResult {
        status: verdict.status,
        decision: verdict.decision,
        details,
    }
}
