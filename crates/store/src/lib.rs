//! In-memory keyed storage for work sessions.
//!
//! A work session owns a resume's extracted text, its current assessment,
//! and the per-criterion challenge sessions. The store is an explicit
//! capability constructed at process start and injected into the API state;
//! there is no ambient global and no persistence across restarts.
//!
//! Each session lives behind its own `tokio::sync::Mutex`. Handlers hold
//! that mutex across the whole load -> oracle call -> write-back sequence,
//! so concurrent operations against the same key are serialized while
//! operations against different keys never contend (the registry itself is
//! only read-locked for lookups).

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use visaprep_core::assessment::Assessment;
use visaprep_core::chat::ChallengeSession;
use visaprep_core::error::CoreError;
use visaprep_core::types::Timestamp;

/// Everything stored for one analyzed resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkSession {
    /// Original filename, when the caller supplied one.
    pub filename: Option<String>,
    /// Full extracted resume text.
    pub resume_text: String,
    /// Current 8-criterion assessment with derived score and tier.
    pub assessment: Assessment,
    /// Challenge conversations keyed by criterion name, created lazily on
    /// first start.
    pub challenges: HashMap<String, ChallengeSession>,
    /// Creation time.
    pub created_at: Timestamp,
}

impl WorkSession {
    /// Create a session with no challenges yet.
    pub fn new(filename: Option<String>, resume_text: String, assessment: Assessment) -> Self {
        Self {
            filename,
            resume_text,
            assessment,
            challenges: HashMap::new(),
            created_at: chrono::Utc::now(),
        }
    }
}

/// Registry of work sessions addressed by opaque keys.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<WorkSession>>>>,
}

impl SessionStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new session and return its generated key.
    pub async fn insert(&self, session: WorkSession) -> String {
        let key = uuid::Uuid::new_v4().to_string();
        self.sessions
            .write()
            .await
            .insert(key.clone(), Arc::new(Mutex::new(session)));
        key
    }

    /// Fetch the lock handle for a session.
    ///
    /// Callers lock the returned mutex for the duration of their
    /// read-modify-write sequence.
    pub async fn session(&self, key: &str) -> Result<Arc<Mutex<WorkSession>>, CoreError> {
        self.sessions
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| CoreError::SessionNotFound(key.to_string()))
    }

    /// Clone the current state of a session (for read-only handlers).
    pub async fn snapshot(&self, key: &str) -> Result<WorkSession, CoreError> {
        let handle = self.session(key).await?;
        let guard = handle.lock().await;
        Ok(guard.clone())
    }

    /// Number of live sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use visaprep_core::assessment::CriterionVerdict;
    use visaprep_core::criteria::CRITERION_COUNT;

    fn session() -> WorkSession {
        WorkSession::new(
            Some("resume.pdf".to_string()),
            "resume text".to_string(),
            Assessment::degraded("seed"),
        )
    }

    #[tokio::test]
    async fn insert_then_snapshot_round_trips() {
        let store = SessionStore::new();
        let key = store.insert(session()).await;

        let snap = store.snapshot(&key).await.unwrap();
        assert_eq!(snap.resume_text, "resume text");
        assert_eq!(snap.assessment.criteria.len(), CRITERION_COUNT);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn keys_are_unique() {
        let store = SessionStore::new();
        let a = store.insert(session()).await;
        let b = store.insert(session()).await;
        assert_ne!(a, b);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn unknown_key_is_session_not_found() {
        let store = SessionStore::new();
        assert_matches!(
            store.snapshot("missing").await,
            Err(CoreError::SessionNotFound(_))
        );
    }

    #[tokio::test]
    async fn per_session_mutex_serializes_racing_writers() {
        let store = Arc::new(SessionStore::new());
        let key = store.insert(session()).await;

        let mut handles = Vec::new();
        for i in 0..16u8 {
            let store = Arc::clone(&store);
            let key = key.clone();
            handles.push(tokio::spawn(async move {
                let handle = store.session(&key).await.unwrap();
                let mut guard = handle.lock().await;
                // Whole-verdict replacement under the session lock, the same
                // discipline the rescore handler uses.
                let name = guard.assessment.criteria[(i % 8) as usize].name.clone();
                let verdict = CriterionVerdict {
                    name: name.clone(),
                    description: String::new(),
                    met: i % 2 == 0,
                    evidence: None,
                    reasoning: Some(format!("writer {i}")),
                };
                guard.assessment.replace_verdict(verdict).unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // The final assessment is well-formed regardless of write order:
        // exactly 8 verdicts, one per criterion, score consistent.
        let snap = store.snapshot(&key).await.unwrap();
        assert_eq!(snap.assessment.criteria.len(), CRITERION_COUNT);
        let met = snap.assessment.criteria.iter().filter(|c| c.met).count() as u8;
        assert_eq!(snap.assessment.score, met);
        let names: std::collections::HashSet<&str> = snap
            .assessment
            .criteria
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names.len(), CRITERION_COUNT);
    }
}
