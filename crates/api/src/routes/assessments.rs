//! Route definitions for assessment endpoints, nested at `/assessments`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assessments;
use crate::state::AppState;

/// Assessment creation and retrieval routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(assessments::create_assessment))
        .route("/{session_id}", get(assessments::get_assessment))
}
