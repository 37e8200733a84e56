//! The diagnostic strategy seam.

use thiserror::Error;

use crate::models::{ClinicalSnapshot, StrategyVerdict};

/// Failures surfaced by a strategy backend.
///
/// A strategy never silently defaults to a diagnosis: a backend that
/// cannot be reached or answers garbage aborts the whole request.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("diagnosis backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("malformed backend response: {0}")]
    BackendMalformedResponse(String),
}

/// The closed set of strategy names accepted at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Deterministic expert rules
    Rules,
    /// Statistical-network classifier, served remotely
    DeepLearning,
    /// Ensemble-tree classifier, served remotely
    RandomForest,
}

impl StrategyKind {
    /// Parse a wire name, rejecting anything outside the closed set.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "rules" => Some(StrategyKind::Rules),
            "deep_learning" => Some(StrategyKind::DeepLearning),
            "random_forest" => Some(StrategyKind::RandomForest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Rules => "rules",
            StrategyKind::DeepLearning => "deep_learning",
            StrategyKind::RandomForest => "random_forest",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One interchangeable diagnostic algorithm.
///
/// `diagnose` is pure with respect to the snapshot; remote
/// implementations may perform bounded network I/O.
pub trait DiagnosticStrategy: Send + Sync {
    /// Which dispatcher slot this strategy fills.
    fn kind(&self) -> StrategyKind;

    fn diagnose(&self, snapshot: &ClinicalSnapshot) -> Result<StrategyVerdict, StrategyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(StrategyKind::parse("rules"), Some(StrategyKind::Rules));
        assert_eq!(
            StrategyKind::parse("deep_learning"),
            Some(StrategyKind::DeepLearning)
        );
        assert_eq!(
            StrategyKind::parse("random_forest"),
            Some(StrategyKind::RandomForest)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(StrategyKind::parse("unknown_x"), None);
        assert_eq!(StrategyKind::parse("Rules"), None);
        assert_eq!(StrategyKind::parse(""), None);
    }

    #[test]
    fn test_name_round_trip() {
        for kind in [
            StrategyKind::Rules,
            StrategyKind::DeepLearning,
            StrategyKind::RandomForest,
        ] {
            assert_eq!(StrategyKind::parse(kind.as_str()), Some(kind));
        }
    }
}
