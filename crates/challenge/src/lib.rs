//! Challenge orchestration: the start / reply / rescore state machine and
//! the bulk initial assessment that seeds it.
//!
//! This crate owns no storage. Operations take borrowed verdicts and
//! sessions, call the evidence oracle with carefully scoped context, and
//! return fresh values for the caller to persist. Session lookup,
//! replacement, and score recomputation happen at the API boundary, under
//! the per-session store lock.

pub mod analyzer;
pub mod orchestrator;

pub use analyzer::initial_assessment;
pub use orchestrator::{ChallengeOrchestrator, ChallengeTurn};
