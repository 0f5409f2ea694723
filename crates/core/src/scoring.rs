//! Scoring engine: met-criteria count and strength tier.
//!
//! Pure and total. The tier thresholds follow the O-1A qualification rule
//! (a beneficiary must satisfy at least 3 of 8 criteria; 5+ is treated as
//! comfortably strong).

use serde::{Deserialize, Serialize};

use crate::assessment::CriterionVerdict;

/// Minimum met-count for the Strong tier.
pub const STRONG_THRESHOLD: u8 = 5;
/// Minimum met-count for the Moderate tier.
pub const MODERATE_THRESHOLD: u8 = 3;

/// Aggregate strength label derived from the count of met criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// 5 or more criteria met.
    Strong,
    /// 3 or 4 criteria met.
    Moderate,
    /// 2 or fewer criteria met.
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl Tier {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Strong => "Strong",
            Tier::Moderate => "Moderate",
            Tier::NeedsWork => "Needs Work",
        }
    }

    /// Tier for a given met-criteria count.
    pub fn from_met_count(count: u8) -> Self {
        if count >= STRONG_THRESHOLD {
            Tier::Strong
        } else if count >= MODERATE_THRESHOLD {
            Tier::Moderate
        } else {
            Tier::NeedsWork
        }
    }
}

/// Count met criteria and derive the tier.
///
/// Order-insensitive: reordering the verdict list never changes the result.
pub fn score(criteria: &[CriterionVerdict]) -> (u8, Tier) {
    let count = criteria.iter().filter(|c| c.met).count() as u8;
    (count, Tier::from_met_count(count))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
