//! Attempt-scoped state for tree nodes.
//!
//! This module provides:
//! - Copy-on-write shared state snapshots
//! - The attempt identity used for log correlation
//! - The tree context handed to each node

#[cfg(test)]
mod context_tests;
mod execution;
mod identity;
pub mod keys;
mod snapshot;

pub use execution::TreeContext;
pub use identity::AttemptIdentity;
pub use snapshot::SharedContext;
