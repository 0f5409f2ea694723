//! Route definitions for the challenge flow, merged into the
//! `/assessments` nest.

use axum::routing::post;
use axum::Router;

use crate::handlers::challenges;
use crate::state::AppState;

/// Challenge start, message, and rescore routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{session_id}/criteria/{criterion_name}/challenge",
            post(challenges::start_challenge),
        )
        .route(
            "/{session_id}/criteria/{criterion_name}/challenge/messages",
            post(challenges::send_challenge_message),
        )
        .route(
            "/{session_id}/criteria/{criterion_name}/challenge/rescore",
            post(challenges::rescore_challenge),
        )
}
