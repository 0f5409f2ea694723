//! Challenge chat transcript types.
//!
//! A [`ChallengeSession`] is the per-(work session, criterion) conversation
//! used to surface evidence the resume did not capture. Transcripts are
//! append-only: the first turn is always the assistant's opening
//! explanation, and every successful exchange appends exactly a user turn
//! followed by an assistant turn.

use serde::{Deserialize, Serialize};

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The person challenging their verdict.
    User,
    /// The advisor (oracle-generated).
    Assistant,
}

/// One turn in a challenge conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Turn author.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatTurn {
    /// A user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// An assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Conversational state for one criterion challenge.
///
/// Created on challenge start; starting again replaces the session wholesale
/// (restart semantics). Per-turn prompt suggestions are display-only hints
/// regenerated on every call and are deliberately not part of this durable
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSession {
    /// The criterion this dialogue concerns.
    pub criterion_name: String,
    /// Ordered transcript, first entry always assistant.
    pub messages: Vec<ChatTurn>,
}

impl ChallengeSession {
    /// Create a fresh session holding only the assistant's opening message.
    pub fn open(criterion_name: impl Into<String>, opening_message: impl Into<String>) -> Self {
        Self {
            criterion_name: criterion_name.into(),
            messages: vec![ChatTurn::assistant(opening_message)],
        }
    }

    /// Append one completed exchange: the user's message followed by the
    /// assistant's response. Transcript length grows by exactly 2.
    pub fn record_exchange(
        &mut self,
        user_message: impl Into<String>,
        assistant_message: impl Into<String>,
    ) {
        self.messages.push(ChatTurn::user(user_message));
        self.messages.push(ChatTurn::assistant(assistant_message));
    }

    /// Flatten the transcript into a role-prefixed text block for rescore
    /// prompts.
    pub fn transcript_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| {
                let role = match m.role {
                    ChatRole::User => "User",
                    ChatRole::Assistant => "Assistant",
                };
                format!("{role}: {}", m.content)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
