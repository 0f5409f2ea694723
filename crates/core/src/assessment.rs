//! Per-criterion verdicts and the aggregate assessment.
//!
//! An [`Assessment`] always carries exactly one verdict per catalog
//! criterion, in catalog order, with `score` and `tier` recomputed together
//! from the verdict list on every mutation.

use serde::{Deserialize, Serialize};

use crate::criteria;
use crate::error::CoreError;
use crate::scoring::{self, Tier};

/// Met/unmet determination for one criterion, with supporting evidence and
/// reasoning.
///
/// `evidence` is advisory: it is only meaningful when justifying `met =
/// true`, but the oracle is not required to null it out on unmet verdicts.
/// Verdicts are only ever replaced whole, never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionVerdict {
    /// Catalog criterion name.
    pub name: String,
    /// Denormalized copy of the criterion description.
    pub description: String,
    /// Whether the evidence satisfies the criterion.
    pub met: bool,
    /// Supporting evidence, if any.
    pub evidence: Option<String>,
    /// Explanation of the determination.
    pub reasoning: Option<String>,
}

/// Complete 8-criterion assessment with derived score and tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// One verdict per criterion, in catalog order.
    pub criteria: Vec<CriterionVerdict>,
    /// Count of verdicts with `met = true`.
    pub score: u8,
    /// Strength tier derived from `score`.
    pub tier: Tier,
}

impl Assessment {
    /// Build an assessment from a verdict list, computing score and tier.
    pub fn new(criteria: Vec<CriterionVerdict>) -> Self {
        let (score, tier) = scoring::score(&criteria);
        Self {
            criteria,
            score,
            tier,
        }
    }

    /// Build the degraded all-unmet assessment used when extraction failed
    /// or the bulk oracle call could not complete.
    ///
    /// This is ordinary data, not an error state: score 0, tier Needs Work,
    /// with `reason` recorded on every verdict.
    pub fn degraded(reason: &str) -> Self {
        let criteria = criteria::catalog()
            .iter()
            .map(|c| CriterionVerdict {
                name: c.name.to_string(),
                description: c.description.to_string(),
                met: false,
                evidence: None,
                reasoning: Some(reason.to_string()),
            })
            .collect();
        Self::new(criteria)
    }

    /// Find the verdict for a criterion name.
    pub fn verdict(&self, criterion_name: &str) -> Result<&CriterionVerdict, CoreError> {
        self.criteria
            .iter()
            .find(|c| c.name == criterion_name)
            .ok_or_else(|| CoreError::CriterionNotFound(criterion_name.to_string()))
    }

    /// Replace the verdict matching `verdict.name` and recompute score and
    /// tier.
    ///
    /// Whole-verdict replacement only; the list keeps its order and always
    /// retains exactly one verdict per criterion.
    pub fn replace_verdict(&mut self, verdict: CriterionVerdict) -> Result<(), CoreError> {
        let slot = self
            .criteria
            .iter_mut()
            .find(|c| c.name == verdict.name)
            .ok_or_else(|| CoreError::CriterionNotFound(verdict.name.clone()))?;
        *slot = verdict;

        let (score, tier) = scoring::score(&self.criteria);
        self.score = score;
        self.tier = tier;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
