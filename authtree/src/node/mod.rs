//! Node trait and node implementations.
//!
//! A node is one step of an authentication tree. The engine calls
//! [`Node::process`] once per attempt that reaches the node; the node answers
//! with an [`Action`] naming the outcome to follow and, optionally, the
//! shared state to carry forward.

mod action;
mod config;
#[cfg(test)]
mod integration_tests;
mod metadata;
mod outcome;
mod profile_property;

pub use action::{Action, ActionBuilder};
pub use config::ProfilePropertyConfig;
pub use metadata::{AttributeKind, ConfigAttribute, NodeMetadata};
pub use outcome::{Outcome, SingleOutcome};
pub use profile_property::GetProfilePropertyNode;

use crate::context::TreeContext;
use std::fmt::Debug;

/// Trait for authentication tree nodes.
///
/// Implementations are shared across concurrent attempts and must not keep
/// per-attempt state.
pub trait Node: Send + Sync + Debug {
    /// Processes one attempt.
    ///
    /// The incoming context is only borrowed; any change to shared state is
    /// returned as a replacement snapshot in the action.
    fn process(&self, context: &TreeContext) -> Action;

    /// Returns the outcomes this node can take.
    fn outcomes(&self) -> Vec<Outcome>;
}
