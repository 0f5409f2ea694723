//! Bulk initial assessment of a resume against all 8 criteria.
//!
//! This is the one path that deliberately downgrades oracle failures: an
//! assessment screen must always have something to render, so empty input
//! and oracle errors both produce a well-formed all-unmet assessment rather
//! than propagating an error.

use visaprep_core::assessment::Assessment;
use visaprep_oracle::EvidenceOracle;

/// Reasoning recorded on degraded verdicts when the input text is unusable.
pub const EMPTY_TEXT_REASON: &str = "Resume could not be parsed or is empty";

/// Assess extracted resume text against all 8 criteria.
///
/// Empty or whitespace-only text short-circuits without an oracle call. Any
/// oracle failure is downgraded to the same degraded assessment (score 0,
/// tier Needs Work) -- ordinary data, not an error state.
pub async fn initial_assessment(oracle: &dyn EvidenceOracle, document_text: &str) -> Assessment {
    if document_text.trim().is_empty() {
        tracing::info!("Empty resume text, synthesizing degraded assessment");
        return Assessment::degraded(EMPTY_TEXT_REASON);
    }

    match oracle.assess_all(document_text).await {
        Ok(verdicts) => Assessment::new(verdicts),
        Err(err) => {
            tracing::warn!(error = %err, "Bulk assessment failed, degrading");
            Assessment::degraded(&format!("Analysis failed: {err}"))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
