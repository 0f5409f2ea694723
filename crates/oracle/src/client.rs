//! Reqwest client for an OpenAI-compatible chat-completions endpoint.
//!
//! One blocking request per oracle operation, no streaming, no retries.
//! Transport failures and timeouts surface as [`OracleError::Unavailable`];
//! undecodable payloads as [`OracleError::Malformed`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use visaprep_core::assessment::CriterionVerdict;
use visaprep_core::chat::{ChatRole, ChatTurn};

use crate::config::OracleConfig;
use crate::error::OracleError;
use crate::{parse, prompts, EvidenceOracle, OracleReply, RescoreOutcome};

/// Token budgets per operation, matching the response sizes each prompt asks
/// for.
const MAX_TOKENS_OPENING: u32 = 300;
const MAX_TOKENS_DIALOGUE: u32 = 400;
const MAX_TOKENS_RESCORE: u32 = 1_024;
const MAX_TOKENS_ASSESS: u32 = 4_096;

/// HTTP client for the inference service.
pub struct OpenAiOracle {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiOracle {
    /// Build a client from configuration. The per-request timeout is set on
    /// the underlying [`reqwest::Client`].
    pub fn new(config: &OracleConfig) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Send one chat-completions request and return the model's message
    /// content.
    async fn complete(
        &self,
        messages: Vec<serde_json::Value>,
        max_tokens: u32,
    ) -> Result<String, OracleError> {
        let body = json!({
            "model": self.model,
            "messages": messages,
            "response_format": { "type": "json_object" },
            "max_tokens": max_tokens,
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "Oracle request rejected");
            return Err(OracleError::unavailable(format!(
                "inference service returned {status}: {body}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| OracleError::malformed(format!("completion envelope: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| OracleError::malformed("completion envelope: no choices"))
    }

    fn system(content: String) -> serde_json::Value {
        json!({ "role": "system", "content": content })
    }

    fn user(content: String) -> serde_json::Value {
        json!({ "role": "user", "content": content })
    }

    fn turn(turn: &ChatTurn) -> serde_json::Value {
        let role = match turn.role {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        };
        json!({ "role": role, "content": turn.content })
    }
}

#[async_trait]
impl EvidenceOracle for OpenAiOracle {
    async fn assess_all(&self, document_text: &str) -> Result<Vec<CriterionVerdict>, OracleError> {
        let messages = vec![
            Self::system(prompts::assess_all_system()),
            Self::user(prompts::assess_all_user(document_text)),
        ];
        let content = self.complete(messages, MAX_TOKENS_ASSESS).await?;
        parse::parse_assessment(&content)
    }

    async fn opening(
        &self,
        verdict: &CriterionVerdict,
        document_text: &str,
    ) -> Result<OracleReply, OracleError> {
        let messages = vec![
            Self::system(prompts::opening_system(verdict)),
            Self::user(prompts::opening_user(document_text)),
        ];
        let content = self.complete(messages, MAX_TOKENS_OPENING).await?;
        parse::parse_reply(&content)
    }

    async fn reply(
        &self,
        verdict: &CriterionVerdict,
        transcript: &[ChatTurn],
        user_message: &str,
    ) -> Result<OracleReply, OracleError> {
        let mut messages = vec![Self::system(prompts::dialogue_system(verdict))];
        messages.extend(transcript.iter().map(Self::turn));
        messages.push(Self::user(user_message.to_string()));

        let content = self.complete(messages, MAX_TOKENS_DIALOGUE).await?;
        parse::parse_reply(&content)
    }

    async fn rescore(
        &self,
        verdict: &CriterionVerdict,
        transcript: &[ChatTurn],
        document_text: &str,
    ) -> Result<RescoreOutcome, OracleError> {
        let messages = vec![
            Self::system(prompts::rescore_system(verdict)),
            Self::user(prompts::rescore_user(document_text, transcript)),
        ];
        let content = self.complete(messages, MAX_TOKENS_RESCORE).await?;
        parse::parse_rescore(&content)
    }
}
