//! The result a node hands back to the tree engine.

use crate::context::SharedContext;
use serde::{Deserialize, Serialize};

/// A node's decision: which outcome to follow, and optionally the shared
/// state the engine should carry forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The outcome id to follow.
    pub outcome: String,

    /// Replacement shared state; `None` keeps the incoming state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_state: Option<SharedContext>,
}

impl Action {
    /// Starts building an action that follows `outcome`.
    #[must_use]
    pub fn go_to(outcome: impl Into<String>) -> ActionBuilder {
        ActionBuilder {
            outcome: outcome.into(),
            shared_state: None,
        }
    }

    /// Returns true if the action replaces the shared state.
    #[must_use]
    pub fn replaces_shared_state(&self) -> bool {
        self.shared_state.is_some()
    }

    /// Returns the shared state the engine should persist after this action.
    #[must_use]
    pub fn shared_state_or<'a>(&'a self, incoming: &'a SharedContext) -> &'a SharedContext {
        self.shared_state.as_ref().unwrap_or(incoming)
    }
}

/// Builder for [`Action`].
#[derive(Debug, Clone)]
pub struct ActionBuilder {
    outcome: String,
    shared_state: Option<SharedContext>,
}

impl ActionBuilder {
    /// Replaces the shared state carried to the next node.
    #[must_use]
    pub fn replace_shared_state(mut self, shared_state: SharedContext) -> Self {
        self.shared_state = Some(shared_state);
        self
    }

    /// Builds the action.
    #[must_use]
    pub fn build(self) -> Action {
        Action {
            outcome: self.outcome,
            shared_state: self.shared_state,
        }
    }
}
