//! Node outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One outgoing edge of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// Stable id used for routing.
    pub id: String,
    /// Label shown to tree authors.
    pub display_name: String,
}

impl Outcome {
    /// Creates a new outcome.
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// The outcome set of nodes that always continue to the same next node.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleOutcome;

impl SingleOutcome {
    /// The id of the only outcome.
    pub const ID: &'static str = "outcome";

    /// The display name of the only outcome.
    pub const DISPLAY_NAME: &'static str = "Outcome";

    /// Returns the outcome list.
    #[must_use]
    pub fn outcomes() -> Vec<Outcome> {
        vec![Outcome::new(Self::ID, Self::DISPLAY_NAME)]
    }
}
