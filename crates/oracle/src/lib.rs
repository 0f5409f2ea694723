//! Evidence oracle boundary.
//!
//! The judgment "does this evidence satisfy criterion X" is delegated to an
//! external inference service behind the [`EvidenceOracle`] trait. Production
//! wiring points it at an OpenAI-compatible chat-completions endpoint
//! ([`client::OpenAiOracle`]); tests and offline development use the
//! deterministic [`scripted::ScriptedOracle`].

pub mod client;
pub mod config;
pub mod error;
pub mod parse;
pub mod prompts;
pub mod scripted;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use visaprep_core::assessment::CriterionVerdict;
use visaprep_core::chat::ChatTurn;

use crate::error::OracleError;

/// One conversational oracle response: the assistant message plus transient
/// follow-up suggestions (display-only, regenerated every turn).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleReply {
    /// Assistant message text.
    pub message: String,
    /// 2-3 short questions the user might ask next.
    pub suggestions: Vec<String>,
}

/// Result of a rescore call: the fields of a verdict the oracle is allowed
/// to change. `name` and `description` are never oracle-controlled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescoreOutcome {
    /// Updated met/unmet determination.
    pub met: bool,
    /// Combined evidence from resume and transcript, if met.
    pub evidence: Option<String>,
    /// Explanation referencing USCIS standards.
    pub reasoning: String,
}

/// External evidence-judgment capability.
///
/// All calls are blocking network requests with a timeout; a timeout is
/// reported as [`OracleError::Unavailable`]. Implementations never retry --
/// retry policy belongs to the deployment boundary, not the state machine.
#[async_trait]
pub trait EvidenceOracle: Send + Sync {
    /// Conservatively evaluate all 8 criteria from extracted resume text.
    /// Must return exactly one verdict per criterion, in catalog order.
    async fn assess_all(&self, document_text: &str) -> Result<Vec<CriterionVerdict>, OracleError>;

    /// Generate the opening explanation for a criterion challenge, given the
    /// current verdict and a truncated resume prefix.
    async fn opening(
        &self,
        verdict: &CriterionVerdict,
        document_text: &str,
    ) -> Result<OracleReply, OracleError>;

    /// Generate the next assistant response in an ongoing challenge
    /// dialogue. The resume text is deliberately withheld here; it only
    /// re-enters at rescore time.
    async fn reply(
        &self,
        verdict: &CriterionVerdict,
        transcript: &[ChatTurn],
        user_message: &str,
    ) -> Result<OracleReply, OracleError>;

    /// Re-evaluate one criterion weighing the full resume and the full
    /// challenge transcript jointly.
    async fn rescore(
        &self,
        verdict: &CriterionVerdict,
        transcript: &[ChatTurn],
        document_text: &str,
    ) -> Result<RescoreOutcome, OracleError>;
}
