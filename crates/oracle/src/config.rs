//! Oracle configuration loaded from environment variables.

/// Which oracle implementation to wire at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleMode {
    /// Real inference service (OpenAI-compatible chat completions).
    OpenAi,
    /// Deterministic scripted oracle for tests and offline development.
    Scripted,
}

impl OracleMode {
    /// Display label for health reporting.
    pub fn label(&self) -> &'static str {
        match self {
            OracleMode::OpenAi => "openai",
            OracleMode::Scripted => "scripted",
        }
    }
}

/// Oracle connection settings.
///
/// All fields have defaults suitable for local development except the API
/// key, which is required in `openai` mode.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// Implementation selector (default: `openai`).
    pub mode: OracleMode,
    /// Base URL of the inference service (default: `https://api.openai.com`).
    pub base_url: String,
    /// Bearer token for the inference service.
    pub api_key: String,
    /// Model identifier (default: `gpt-4o-mini`).
    pub model: String,
    /// Per-request timeout in seconds (default: `60`).
    pub timeout_secs: u64,
}

impl OracleConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                   |
    /// |-----------------------|---------------------------|
    /// | `ORACLE_MODE`         | `openai`                  |
    /// | `ORACLE_BASE_URL`     | `https://api.openai.com`  |
    /// | `ORACLE_API_KEY`      | (empty)                   |
    /// | `ORACLE_MODEL`        | `gpt-4o-mini`             |
    /// | `ORACLE_TIMEOUT_SECS` | `60`                      |
    pub fn from_env() -> Self {
        let mode = match std::env::var("ORACLE_MODE").as_deref() {
            Ok("scripted") => OracleMode::Scripted,
            _ => OracleMode::OpenAi,
        };

        let base_url = std::env::var("ORACLE_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com".into());

        let api_key = std::env::var("ORACLE_API_KEY").unwrap_or_default();

        let model = std::env::var("ORACLE_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());

        let timeout_secs: u64 = std::env::var("ORACLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("ORACLE_TIMEOUT_SECS must be a valid u64");

        Self {
            mode,
            base_url,
            api_key,
            model,
            timeout_secs,
        }
    }
}
