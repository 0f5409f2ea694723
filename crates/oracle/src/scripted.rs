//! Deterministic oracle for tests and offline development.
//!
//! Returns canned replies with fixed suggestions, marks a configurable set
//! of criteria met during bulk assessment, and rescoring resolves to a
//! configurable outcome. Can also be forced to fail every call, which lets
//! tests exercise the atomicity rules around oracle errors.

use async_trait::async_trait;

use visaprep_core::assessment::CriterionVerdict;
use visaprep_core::chat::ChatTurn;
use visaprep_core::criteria;

use crate::error::OracleError;
use crate::{EvidenceOracle, OracleReply, RescoreOutcome};

/// Failure forced on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureMode {
    Unavailable,
    Malformed,
}

/// Scripted [`EvidenceOracle`] implementation.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    met_criteria: Vec<String>,
    rescore_met: bool,
    failure: Option<FailureMode>,
}

impl ScriptedOracle {
    /// Oracle that marks nothing met and answers every turn.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the given criterion names met during bulk assessment.
    pub fn with_met_criteria<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.met_criteria = names.into_iter().map(Into::into).collect();
        self
    }

    /// Make every rescore resolve to `met`.
    pub fn with_rescore_met(mut self, met: bool) -> Self {
        self.rescore_met = met;
        self
    }

    /// Fail every call with [`OracleError::Unavailable`].
    pub fn failing_unavailable() -> Self {
        Self {
            failure: Some(FailureMode::Unavailable),
            ..Self::default()
        }
    }

    /// Fail every call with [`OracleError::Malformed`].
    pub fn failing_malformed() -> Self {
        Self {
            failure: Some(FailureMode::Malformed),
            ..Self::default()
        }
    }

    fn check_failure(&self) -> Result<(), OracleError> {
        match self.failure {
            Some(FailureMode::Unavailable) => {
                Err(OracleError::unavailable("scripted transport failure"))
            }
            Some(FailureMode::Malformed) => {
                Err(OracleError::malformed("scripted decode failure"))
            }
            None => Ok(()),
        }
    }

    fn suggestions() -> Vec<String> {
        vec![
            "How can I improve my score?".to_string(),
            "What evidence are you looking for?".to_string(),
            "Does my experience count?".to_string(),
        ]
    }
}

#[async_trait]
impl EvidenceOracle for ScriptedOracle {
    async fn assess_all(&self, _document_text: &str) -> Result<Vec<CriterionVerdict>, OracleError> {
        self.check_failure()?;

        Ok(criteria::catalog()
            .iter()
            .map(|c| {
                let met = self.met_criteria.iter().any(|n| n == c.name);
                CriterionVerdict {
                    name: c.name.to_string(),
                    description: c.description.to_string(),
                    met,
                    evidence: met.then(|| format!("Scripted evidence for {}", c.name)),
                    reasoning: Some(format!("Scripted assessment of {}", c.name)),
                }
            })
            .collect())
    }

    async fn opening(
        &self,
        verdict: &CriterionVerdict,
        _document_text: &str,
    ) -> Result<OracleReply, OracleError> {
        self.check_failure()?;

        let status = if verdict.met { "met" } else { "not met" };
        Ok(OracleReply {
            message: format!(
                "Let's look at the {} criterion. Right now it's {status}. What evidence can you share?",
                verdict.name
            ),
            suggestions: Self::suggestions(),
        })
    }

    async fn reply(
        &self,
        _verdict: &CriterionVerdict,
        _transcript: &[ChatTurn],
        user_message: &str,
    ) -> Result<OracleReply, OracleError> {
        self.check_failure()?;

        Ok(OracleReply {
            message: format!("Noted: {user_message}. Can you share any specifics?"),
            suggestions: Self::suggestions(),
        })
    }

    async fn rescore(
        &self,
        _verdict: &CriterionVerdict,
        _transcript: &[ChatTurn],
        _document_text: &str,
    ) -> Result<RescoreOutcome, OracleError> {
        self.check_failure()?;

        Ok(RescoreOutcome {
            met: self.rescore_met,
            evidence: self
                .rescore_met
                .then(|| "Evidence gathered during the challenge interview".to_string()),
            reasoning: "Scripted rescore outcome".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn verdict() -> CriterionVerdict {
        CriterionVerdict {
            name: "Awards".to_string(),
            description: String::new(),
            met: false,
            evidence: None,
            reasoning: None,
        }
    }

    #[tokio::test]
    async fn assess_all_returns_catalog_order() {
        let oracle = ScriptedOracle::new().with_met_criteria(["Awards", "Judging"]);
        let verdicts = oracle.assess_all("resume").await.unwrap();
        assert_eq!(verdicts.len(), 8);
        assert!(verdicts[0].met); // Awards
        assert!(!verdicts[1].met); // Membership
        assert!(verdicts[3].met); // Judging
    }

    #[tokio::test]
    async fn opening_is_deterministic() {
        let oracle = ScriptedOracle::new();
        let a = oracle.opening(&verdict(), "text").await.unwrap();
        let b = oracle.opening(&verdict(), "text").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.suggestions.len(), 3);
    }

    #[tokio::test]
    async fn failing_unavailable_fails_every_call() {
        let oracle = ScriptedOracle::failing_unavailable();
        assert_matches!(
            oracle.opening(&verdict(), "").await,
            Err(OracleError::Unavailable { .. })
        );
        assert_matches!(
            oracle.reply(&verdict(), &[], "hi").await,
            Err(OracleError::Unavailable { .. })
        );
    }

    #[tokio::test]
    async fn failing_malformed_fails_every_call() {
        let oracle = ScriptedOracle::failing_malformed();
        assert_matches!(
            oracle.rescore(&verdict(), &[], "").await,
            Err(OracleError::Malformed { .. })
        );
    }
}
