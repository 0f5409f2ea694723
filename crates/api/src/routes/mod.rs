pub mod assessments;
pub mod challenges;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assessments                                                  create (POST)
/// /assessments/{session_id}                                     get (GET)
/// /assessments/{session_id}/criteria/{name}/challenge           start/restart (POST)
/// /assessments/{session_id}/criteria/{name}/challenge/messages  send message (POST)
/// /assessments/{session_id}/criteria/{name}/challenge/rescore   rescore (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest(
        "/assessments",
        assessments::router().merge(challenges::router()),
    )
}
