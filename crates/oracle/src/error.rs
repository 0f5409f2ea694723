//! Errors from the evidence oracle boundary.

/// Failures talking to or decoding the external inference service.
///
/// Both variants are retryable from the caller's point of view; the oracle
/// layer itself performs no retries.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// The service could not be reached, timed out, or returned a non-2xx
    /// status.
    #[error("Oracle unavailable: {reason}")]
    Unavailable {
        /// Transport-level detail for logs.
        reason: String,
    },

    /// A response was received but could not be decoded into the expected
    /// shape.
    #[error("Oracle returned a malformed response: {reason}")]
    Malformed {
        /// What failed to decode.
        reason: String,
    },
}

impl OracleError {
    /// Transport/availability failure.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Decoding failure.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        // Timeouts are indistinguishable from unreachability for callers.
        Self::Unavailable {
            reason: err.to_string(),
        }
    }
}
