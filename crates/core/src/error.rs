//! Domain-level error type shared by the store, orchestration, and API
//! layers.

/// Errors produced by domain logic and session lookups.
///
/// Oracle transport/decoding failures have their own type in
/// `visaprep-oracle`; this enum covers caller-input errors, which are
/// surfaced immediately and never retried.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No work session exists under the given key.
    #[error("Session '{0}' not found")]
    SessionNotFound(String),

    /// The criterion name is not one of the 8 O-1A criteria.
    #[error("Criterion '{0}' not found")]
    CriterionNotFound(String),

    /// A challenge operation was attempted before the challenge was started.
    #[error("Challenge for criterion '{0}' has not been started")]
    SessionNotStarted(String),

    /// A request payload failed validation.
    #[error("{0}")]
    Validation(String),
}
