//! The per-criterion challenge state machine.

use std::sync::Arc;

use visaprep_core::assessment::CriterionVerdict;
use visaprep_core::chat::ChallengeSession;
use visaprep_oracle::error::OracleError;
use visaprep_oracle::EvidenceOracle;

/// Result of a successful start or reply: the session state to persist,
/// plus the assistant message and transient suggestions to display.
#[derive(Debug, Clone)]
pub struct ChallengeTurn {
    /// Full session transcript after this turn.
    pub session: ChallengeSession,
    /// The assistant message produced this turn.
    pub message: String,
    /// Display-only follow-up hints, regenerated every turn.
    pub suggestions: Vec<String>,
}

/// Orchestrates challenge conversations over an injected evidence oracle.
///
/// Holds no per-session state between calls. Every operation either returns
/// a complete result or an error with nothing mutated; partial turns are
/// never observable.
pub struct ChallengeOrchestrator {
    oracle: Arc<dyn EvidenceOracle>,
}

impl ChallengeOrchestrator {
    /// Wrap an oracle capability.
    pub fn new(oracle: Arc<dyn EvidenceOracle>) -> Self {
        Self { oracle }
    }

    /// Begin (or restart) a challenge for one criterion.
    ///
    /// The verdict must be the one for the criterion being challenged; the
    /// caller owns that lookup. On success the returned session holds
    /// exactly the assistant's opening message. On oracle failure nothing is
    /// created and the caller surfaces the error.
    pub async fn start(
        &self,
        verdict: &CriterionVerdict,
        document_text: &str,
    ) -> Result<ChallengeTurn, OracleError> {
        let reply = self.oracle.opening(verdict, document_text).await?;

        tracing::debug!(criterion = %verdict.name, "Challenge started");
        Ok(ChallengeTurn {
            session: ChallengeSession::open(&verdict.name, &reply.message),
            message: reply.message,
            suggestions: reply.suggestions,
        })
    }

    /// Process one user message in an existing challenge.
    ///
    /// The oracle sees the full prior transcript plus the new message, but
    /// not the resume text; full document context only re-enters at rescore
    /// time. On success the returned session has grown by exactly two turns
    /// (user, then assistant). On failure the input session is untouched.
    pub async fn reply(
        &self,
        session: &ChallengeSession,
        verdict: &CriterionVerdict,
        user_message: &str,
    ) -> Result<ChallengeTurn, OracleError> {
        let reply = self
            .oracle
            .reply(verdict, &session.messages, user_message)
            .await?;

        let mut updated = session.clone();
        updated.record_exchange(user_message, &reply.message);

        tracing::debug!(
            criterion = %verdict.name,
            turns = updated.messages.len(),
            "Challenge exchange recorded"
        );
        Ok(ChallengeTurn {
            session: updated,
            message: reply.message,
            suggestions: reply.suggestions,
        })
    }

    /// Re-evaluate the criterion from the full resume and the full
    /// transcript.
    ///
    /// Pure transformation: returns a fresh verdict carrying the input's
    /// name and description with oracle-supplied met/evidence/reasoning.
    /// Folding the result into the assessment and recomputing score/tier is
    /// the caller's job; on failure the original verdict stays in force.
    pub async fn rescore(
        &self,
        verdict: &CriterionVerdict,
        session: &ChallengeSession,
        document_text: &str,
    ) -> Result<CriterionVerdict, OracleError> {
        let outcome = self
            .oracle
            .rescore(verdict, &session.messages, document_text)
            .await?;

        tracing::info!(
            criterion = %verdict.name,
            was_met = verdict.met,
            now_met = outcome.met,
            "Criterion rescored"
        );
        Ok(CriterionVerdict {
            name: verdict.name.clone(),
            description: verdict.description.clone(),
            met: outcome.met,
            evidence: outcome.evidence,
            reasoning: Some(outcome.reasoning),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
