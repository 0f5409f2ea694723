//! Strict decoding of oracle response payloads.
//!
//! The inference service is asked for JSON in an exact shape; anything else
//! is [`OracleError::Malformed`]. Partially-typed data is never accepted
//! into a durable assessment.

use serde::Deserialize;

use visaprep_core::assessment::CriterionVerdict;
use visaprep_core::criteria;

use crate::error::OracleError;
use crate::{OracleReply, RescoreOutcome};

/// Maximum suggestions surfaced per turn.
pub const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Deserialize)]
struct RawReply {
    message: String,
    #[serde(default)]
    suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawRescore {
    met: bool,
    #[serde(default)]
    evidence: Option<String>,
    reasoning: String,
}

#[derive(Debug, Deserialize)]
struct RawVerdict {
    name: String,
    description: String,
    met: bool,
    #[serde(default)]
    evidence: Option<String>,
    #[serde(default)]
    reasoning: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAssessment {
    criteria: Vec<RawVerdict>,
}

/// Decode a `{message, suggestions}` conversational payload.
pub fn parse_reply(content: &str) -> Result<OracleReply, OracleError> {
    let raw: RawReply = serde_json::from_str(content)
        .map_err(|e| OracleError::malformed(format!("reply payload: {e}")))?;

    if raw.message.trim().is_empty() {
        return Err(OracleError::malformed("reply payload: empty message"));
    }

    let mut suggestions = raw.suggestions;
    suggestions.truncate(MAX_SUGGESTIONS);

    Ok(OracleReply {
        message: raw.message,
        suggestions,
    })
}

/// Decode a `{met, evidence, reasoning}` rescore payload.
pub fn parse_rescore(content: &str) -> Result<RescoreOutcome, OracleError> {
    let raw: RawRescore = serde_json::from_str(content)
        .map_err(|e| OracleError::malformed(format!("rescore payload: {e}")))?;

    Ok(RescoreOutcome {
        met: raw.met,
        evidence: raw.evidence,
        reasoning: raw.reasoning,
    })
}

/// Decode a bulk `{criteria: [...]}` payload.
///
/// The list must contain exactly one verdict per catalog criterion, in
/// catalog order, or the payload is rejected wholesale.
pub fn parse_assessment(content: &str) -> Result<Vec<CriterionVerdict>, OracleError> {
    let raw: RawAssessment = serde_json::from_str(content)
        .map_err(|e| OracleError::malformed(format!("assessment payload: {e}")))?;

    if raw.criteria.len() != criteria::CRITERION_COUNT {
        return Err(OracleError::malformed(format!(
            "assessment payload: expected {} criteria, got {}",
            criteria::CRITERION_COUNT,
            raw.criteria.len()
        )));
    }

    let mut verdicts = Vec::with_capacity(raw.criteria.len());
    for (expected, raw) in criteria::catalog().iter().zip(raw.criteria) {
        if raw.name != expected.name {
            return Err(OracleError::malformed(format!(
                "assessment payload: expected criterion '{}', got '{}'",
                expected.name, raw.name
            )));
        }
        verdicts.push(CriterionVerdict {
            name: raw.name,
            description: raw.description,
            met: raw.met,
            evidence: raw.evidence,
            reasoning: raw.reasoning,
        });
    }

    Ok(verdicts)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
