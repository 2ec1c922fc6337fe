//! The per-invocation context a tree engine hands to a node.

use super::{keys, AttemptIdentity, SharedContext};

/// Context passed to [`Node::process`](crate::node::Node::process).
///
/// Holds the attempt identity and the current shared state snapshot. Nodes
/// only ever see it by shared reference.
#[derive(Debug, Clone, Default)]
pub struct TreeContext {
    attempt: AttemptIdentity,
    shared_state: SharedContext,
}

impl TreeContext {
    /// Creates a tree context for a new attempt.
    #[must_use]
    pub fn new(shared_state: SharedContext) -> Self {
        Self {
            attempt: AttemptIdentity::new(),
            shared_state,
        }
    }

    /// Sets the attempt identity.
    #[must_use]
    pub fn with_attempt(mut self, attempt: AttemptIdentity) -> Self {
        self.attempt = attempt;
        self
    }

    /// Returns the attempt identity.
    #[must_use]
    pub fn attempt(&self) -> &AttemptIdentity {
        &self.attempt
    }

    /// Returns the current shared state snapshot.
    #[must_use]
    pub fn shared_state(&self) -> &SharedContext {
        &self.shared_state
    }

    /// Returns the username collected earlier in the tree, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.shared_state.get_str(keys::USERNAME)
    }

    /// Returns the realm of the attempt, if any.
    #[must_use]
    pub fn realm(&self) -> Option<&str> {
        self.shared_state.get_str(keys::REALM)
    }
}
