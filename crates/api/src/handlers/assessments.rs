//! Handlers for resume assessment endpoints.
//!
//! Resume upload handling and text extraction live in a separate service;
//! this API accepts already-extracted text. The bulk assessment path never
//! fails: unusable text or an oracle outage produce a degraded all-unmet
//! assessment (see `visaprep_challenge::analyzer`).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use visaprep_core::assessment::Assessment;
use visaprep_core::error::CoreError;
use visaprep_store::WorkSession;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum accepted resume text length in characters.
pub const MAX_RESUME_CHARS: usize = 200_000;

/// Request body for creating an assessment from extracted resume text.
#[derive(Debug, Deserialize)]
pub struct CreateAssessmentRequest {
    /// Full extracted resume text. May be empty (yields a degraded
    /// assessment).
    pub resume_text: String,
    /// Original filename, for display.
    #[serde(default)]
    pub filename: Option<String>,
}

/// An assessment with its session key, as returned to clients.
#[derive(Debug, Serialize)]
pub struct AssessmentView {
    /// Opaque key addressing the work session.
    pub session_id: String,
    /// Original filename, when supplied.
    pub filename: Option<String>,
    /// Current 8-criterion assessment with derived score and tier.
    pub assessment: Assessment,
}

/// POST /api/v1/assessments
///
/// Run the bulk initial assessment over the supplied resume text and create
/// a work session holding the result.
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(body): Json<CreateAssessmentRequest>,
) -> AppResult<impl IntoResponse> {
    if body.resume_text.chars().count() > MAX_RESUME_CHARS {
        return Err(CoreError::Validation(format!(
            "Resume text exceeds {MAX_RESUME_CHARS} characters"
        ))
        .into());
    }

    let assessment =
        visaprep_challenge::initial_assessment(state.oracle.as_ref(), &body.resume_text).await;

    let session = WorkSession::new(body.filename.clone(), body.resume_text, assessment.clone());
    let session_id = state.store.insert(session).await;

    tracing::info!(
        session_id = %session_id,
        score = assessment.score,
        tier = assessment.tier.label(),
        "Assessment created"
    );

    Ok(Json(DataResponse {
        data: AssessmentView {
            session_id,
            filename: body.filename,
            assessment,
        },
    }))
}

/// GET /api/v1/assessments/{session_id}
///
/// Return the stored assessment for a work session.
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let session = state.store.snapshot(&session_id).await?;

    Ok(Json(DataResponse {
        data: AssessmentView {
            session_id,
            filename: session.filename,
            assessment: session.assessment,
        },
    }))
}
