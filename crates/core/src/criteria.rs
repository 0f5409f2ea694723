//! The fixed catalog of the 8 O-1A evidentiary criteria.
//!
//! The catalog order is canonical: assessments are initialized and iterated
//! in this order, and the bulk oracle call is required to return verdicts in
//! this order. Criterion names double as lookup keys into the guidance table
//! in [`crate::guidance`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Criterion names
// ---------------------------------------------------------------------------

/// Nationally or internationally recognized prizes or awards.
pub const CRITERION_AWARDS: &str = "Awards";
/// Membership in associations requiring outstanding achievement.
pub const CRITERION_MEMBERSHIP: &str = "Membership";
/// Published material about the beneficiary in major media.
pub const CRITERION_PUBLISHED_MATERIAL: &str = "Published Material";
/// Judging the work of others in the field.
pub const CRITERION_JUDGING: &str = "Judging";
/// Original contributions of major significance.
pub const CRITERION_ORIGINAL_CONTRIBUTIONS: &str = "Original Contributions";
/// Authorship of scholarly articles.
pub const CRITERION_SCHOLARLY_ARTICLES: &str = "Scholarly Articles";
/// Critical or essential employment for distinguished organizations.
pub const CRITERION_CRITICAL_EMPLOYMENT: &str = "Critical Employment";
/// High salary or other remuneration.
pub const CRITERION_HIGH_SALARY: &str = "High Salary";

/// All valid criterion names, in canonical catalog order.
pub const CRITERION_NAMES: &[&str] = &[
    CRITERION_AWARDS,
    CRITERION_MEMBERSHIP,
    CRITERION_PUBLISHED_MATERIAL,
    CRITERION_JUDGING,
    CRITERION_ORIGINAL_CONTRIBUTIONS,
    CRITERION_SCHOLARLY_ARTICLES,
    CRITERION_CRITICAL_EMPLOYMENT,
    CRITERION_HIGH_SALARY,
];

/// Number of criteria in the catalog. An assessment always carries exactly
/// this many verdicts.
pub const CRITERION_COUNT: usize = 8;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A single O-1A evidentiary criterion: stable name plus a short regulatory
/// summary used as display text and as the guidance fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    /// Unique identifier, one of [`CRITERION_NAMES`].
    pub name: &'static str,
    /// Short regulatory summary.
    pub description: &'static str,
}

/// The 8 criteria in canonical order. Pure reference data.
pub const CRITERIA: &[Criterion] = &[
    Criterion {
        name: CRITERION_AWARDS,
        description: "Nationally or internationally recognized prizes or awards for excellence in the field of endeavor",
    },
    Criterion {
        name: CRITERION_MEMBERSHIP,
        description: "Membership in associations in the field which require outstanding achievements of their members, as judged by recognized national or international experts",
    },
    Criterion {
        name: CRITERION_PUBLISHED_MATERIAL,
        description: "Published material in professional or major trade publications or major media about the beneficiary, relating to the beneficiary's work in the field",
    },
    Criterion {
        name: CRITERION_JUDGING,
        description: "Participation on a panel, or individually, as a judge of the work of others in the same or in an allied field of specialization",
    },
    Criterion {
        name: CRITERION_ORIGINAL_CONTRIBUTIONS,
        description: "Original scientific, scholarly, or business-related contributions of major significance in the field",
    },
    Criterion {
        name: CRITERION_SCHOLARLY_ARTICLES,
        description: "Authorship of scholarly articles in the field, in professional journals, or other major media",
    },
    Criterion {
        name: CRITERION_CRITICAL_EMPLOYMENT,
        description: "Employment in a critical or essential capacity for organizations and establishments that have a distinguished reputation",
    },
    Criterion {
        name: CRITERION_HIGH_SALARY,
        description: "High salary or other remuneration for services, as evidenced by contracts or other reliable evidence",
    },
];

/// Return the full catalog in canonical order.
pub fn catalog() -> &'static [Criterion] {
    CRITERIA
}

/// Look up a criterion by name.
pub fn find(name: &str) -> Option<&'static Criterion> {
    CRITERIA.iter().find(|c| c.name == name)
}

/// Validate that a criterion name is one of the 8 catalog entries.
pub fn validate_criterion_name(name: &str) -> Result<(), CoreError> {
    if CRITERION_NAMES.contains(&name) {
        Ok(())
    } else {
        Err(CoreError::CriterionNotFound(name.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
