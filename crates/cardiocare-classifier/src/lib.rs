//! Remote diagnosis backends for cardiocare.
//!
//! This crate holds everything that talks to the external diagnosis
//! services: the wire protocol, the blocking HTTP client with
//! per-endpoint timeouts, and the remote implementations of
//! [`DiagnosticStrategy`](cardiocare_core::pipeline::DiagnosticStrategy).
//! The core pipeline stays network-free.

pub mod client;
pub mod config;
pub mod protocol;
pub mod strategy;

pub use client::ClassifierClient;
pub use config::ClassifierConfig;
pub use protocol::{DiagnosisRequest, DiagnosisResponse, ModelKind};
pub use strategy::{RemoteClassifierStrategy, RemoteRulesStrategy};

use cardiocare_core::pipeline::{RuleBasedStrategy, StrategyDispatcher};

/// The standard deployment wiring: local expert rules plus both remote
/// classifier models behind one dispatcher.
pub fn build_dispatcher(config: ClassifierConfig) -> StrategyDispatcher {
    let client = ClassifierClient::new(config);
    let mut dispatcher = StrategyDispatcher::new();
    dispatcher.register(Box::new(RuleBasedStrategy));
    dispatcher.register(Box::new(RemoteClassifierStrategy::new(
        client.clone(),
        ModelKind::DeepLearning,
    )));
    dispatcher.register(Box::new(RemoteClassifierStrategy::new(
        client,
        ModelKind::RandomForest,
    )));
    dispatcher
}
