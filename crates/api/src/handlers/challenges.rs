//! Handlers for the per-criterion challenge flow: start, message, rescore.
//!
//! Every handler locks the work session for the duration of its
//! read -> oracle call -> write-back sequence, so operations racing on the
//! same session key are serialized and a half-updated session or a
//! score/tier mismatched with its verdicts is never observable. Oracle
//! failures leave the stored state exactly as it was.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use visaprep_core::assessment::CriterionVerdict;
use visaprep_core::chat::ChatTurn;
use visaprep_core::criteria::validate_criterion_name;
use visaprep_core::error::CoreError;
use visaprep_core::scoring::Tier;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum accepted challenge message length in characters.
pub const MAX_MESSAGE_CHARS: usize = 4_000;

/// Request body for sending a challenge chat message.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
}

/// Response for a started (or restarted) challenge.
#[derive(Debug, Serialize)]
pub struct ChallengeStarted {
    /// The verdict under challenge.
    pub criterion: CriterionVerdict,
    /// Full transcript (a single assistant opening message).
    pub messages: Vec<ChatTurn>,
    /// Transient follow-up hints, not persisted.
    pub suggestions: Vec<String>,
}

/// Response for a completed chat exchange.
#[derive(Debug, Serialize)]
pub struct ChallengeReply {
    /// Full updated transcript.
    pub messages: Vec<ChatTurn>,
    /// The assistant message produced this turn.
    pub assistant_message: String,
    /// Transient follow-up hints, not persisted.
    pub suggestions: Vec<String>,
}

/// Response for a completed rescore.
#[derive(Debug, Serialize)]
pub struct RescoreResult {
    /// The replacement verdict.
    pub criterion: CriterionVerdict,
    /// Recomputed met-criteria count.
    pub score: u8,
    /// Recomputed strength tier.
    pub tier: Tier,
}

/// POST /api/v1/assessments/{session_id}/criteria/{criterion_name}/challenge
///
/// Start a challenge conversation for one criterion. Starting again
/// replaces any existing conversation with a fresh one (restart, not
/// resume). Nothing is persisted if the oracle call fails.
pub async fn start_challenge(
    State(state): State<AppState>,
    Path((session_id, criterion_name)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    validate_criterion_name(&criterion_name)?;

    let handle = state.store.session(&session_id).await?;
    let mut session = handle.lock().await;

    let verdict = session.assessment.verdict(&criterion_name)?.clone();
    let turn = state
        .orchestrator
        .start(&verdict, &session.resume_text)
        .await?;

    session
        .challenges
        .insert(criterion_name.clone(), turn.session.clone());

    tracing::info!(session_id = %session_id, criterion = %criterion_name, "Challenge started");

    Ok(Json(DataResponse {
        data: ChallengeStarted {
            criterion: verdict,
            messages: turn.session.messages,
            suggestions: turn.suggestions,
        },
    }))
}

/// POST /api/v1/assessments/{session_id}/criteria/{criterion_name}/challenge/messages
///
/// Send a message in an existing challenge conversation. Fails with 400 if
/// the challenge was never started; a failed oracle call appends nothing.
pub async fn send_challenge_message(
    State(state): State<AppState>,
    Path((session_id, criterion_name)): Path<(String, String)>,
    Json(body): Json<ChatRequest>,
) -> AppResult<impl IntoResponse> {
    validate_criterion_name(&criterion_name)?;

    if body.message.trim().is_empty() {
        return Err(CoreError::Validation("Message must not be empty".to_string()).into());
    }
    if body.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(CoreError::Validation(format!(
            "Message exceeds {MAX_MESSAGE_CHARS} characters"
        ))
        .into());
    }

    let handle = state.store.session(&session_id).await?;
    let mut session = handle.lock().await;

    let verdict = session.assessment.verdict(&criterion_name)?.clone();
    let challenge = session
        .challenges
        .get(&criterion_name)
        .ok_or_else(|| CoreError::SessionNotStarted(criterion_name.clone()))?
        .clone();

    let turn = state
        .orchestrator
        .reply(&challenge, &verdict, &body.message)
        .await?;

    session
        .challenges
        .insert(criterion_name, turn.session.clone());

    Ok(Json(DataResponse {
        data: ChallengeReply {
            messages: turn.session.messages,
            assistant_message: turn.message,
            suggestions: turn.suggestions,
        },
    }))
}

/// POST /api/v1/assessments/{session_id}/criteria/{criterion_name}/challenge/rescore
///
/// Re-evaluate the criterion from the resume plus the challenge transcript,
/// replace its verdict, and recompute score and tier. On oracle failure the
/// original verdict remains in force.
pub async fn rescore_challenge(
    State(state): State<AppState>,
    Path((session_id, criterion_name)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    validate_criterion_name(&criterion_name)?;

    let handle = state.store.session(&session_id).await?;
    let mut session = handle.lock().await;

    let verdict = session.assessment.verdict(&criterion_name)?.clone();
    let challenge = session
        .challenges
        .get(&criterion_name)
        .ok_or_else(|| CoreError::SessionNotStarted(criterion_name.clone()))?
        .clone();

    let new_verdict = state
        .orchestrator
        .rescore(&verdict, &challenge, &session.resume_text)
        .await?;

    session.assessment.replace_verdict(new_verdict.clone())?;

    tracing::info!(
        session_id = %session_id,
        criterion = %criterion_name,
        score = session.assessment.score,
        tier = session.assessment.tier.label(),
        "Criterion rescored"
    );

    Ok(Json(DataResponse {
        data: RescoreResult {
            criterion: new_verdict,
            score: session.assessment.score,
            tier: session.assessment.tier,
        },
    }))
}
