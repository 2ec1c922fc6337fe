//! Attempt identity for correlating node executions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Identifies one authentication attempt.
///
/// Carried alongside the shared state purely for log correlation; nodes
/// never persist it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptIdentity {
    /// The unique ID for this attempt.
    pub attempt_id: Uuid,

    /// The session the attempt belongs to, when the engine tracks one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,

    /// When the attempt started.
    pub started_at: DateTime<Utc>,
}

impl Default for AttemptIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptIdentity {
    /// Creates a new attempt identity with a generated attempt ID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attempt_id: Uuid::new_v4(),
            session_id: None,
            started_at: Utc::now(),
        }
    }

    /// Creates an attempt identity with a specific attempt ID.
    #[must_use]
    pub fn with_attempt_id(attempt_id: Uuid) -> Self {
        Self {
            attempt_id,
            ..Self::new()
        }
    }

    /// Sets the session ID.
    #[must_use]
    pub fn with_session_id(mut self, session_id: Uuid) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Converts to a dictionary with string values (or null).
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        map.insert(
            "attempt_id".to_string(),
            serde_json::json!(self.attempt_id.to_string()),
        );
        map.insert(
            "session_id".to_string(),
            self.session_id
                .map_or(serde_json::Value::Null, |id| serde_json::json!(id.to_string())),
        );
        map.insert(
            "started_at".to_string(),
            serde_json::json!(self.started_at.to_rfc3339()),
        );

        map
    }
}
