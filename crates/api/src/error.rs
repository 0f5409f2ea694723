use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use visaprep_core::error::CoreError;
use visaprep_oracle::error::OracleError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain/lookup errors and [`OracleError`] for
/// inference-service failures. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `visaprep-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An evidence oracle failure. Retryable by the caller; the server
    /// itself never retries.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::SessionNotFound(key) => (
                    StatusCode::NOT_FOUND,
                    "SESSION_NOT_FOUND",
                    format!("Session '{key}' not found"),
                ),
                CoreError::CriterionNotFound(name) => (
                    StatusCode::NOT_FOUND,
                    "CRITERION_NOT_FOUND",
                    format!("Criterion '{name}' not found"),
                ),
                CoreError::SessionNotStarted(name) => (
                    StatusCode::BAD_REQUEST,
                    "CHALLENGE_NOT_STARTED",
                    format!("Challenge for criterion '{name}' has not been started"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::Oracle(oracle) => match oracle {
                OracleError::Unavailable { reason } => {
                    tracing::warn!(error = %reason, "Oracle unavailable");
                    (
                        StatusCode::BAD_GATEWAY,
                        "ORACLE_UNAVAILABLE",
                        "The evidence analysis service is unavailable. Please try again."
                            .to_string(),
                    )
                }
                OracleError::Malformed { reason } => {
                    tracing::error!(error = %reason, "Oracle returned malformed response");
                    (
                        StatusCode::BAD_GATEWAY,
                        "ORACLE_MALFORMED_RESPONSE",
                        "The evidence analysis service returned an unexpected response. Please try again."
                            .to_string(),
                    )
                }
            },
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
