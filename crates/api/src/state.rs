use std::sync::Arc;

use visaprep_challenge::ChallengeOrchestrator;
use visaprep_oracle::EvidenceOracle;
use visaprep_store::SessionStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory work session store.
    pub store: Arc<SessionStore>,
    /// Evidence oracle capability (real inference service or scripted).
    pub oracle: Arc<dyn EvidenceOracle>,
    /// Challenge state machine over the same oracle.
    pub orchestrator: Arc<ChallengeOrchestrator>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble state from its injected capabilities.
    pub fn new(
        store: Arc<SessionStore>,
        oracle: Arc<dyn EvidenceOracle>,
        config: ServerConfig,
    ) -> Self {
        let orchestrator = Arc::new(ChallengeOrchestrator::new(Arc::clone(&oracle)));
        Self {
            store,
            oracle,
            orchestrator,
            config: Arc::new(config),
        }
    }
}
