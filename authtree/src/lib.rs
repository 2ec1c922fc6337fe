//! # Authtree
//!
//! Nodes for authentication trees.
//!
//! An authentication tree is walked once per login attempt. Each node reads
//! the attempt's shared state, may hand back a new copy of it, and names the
//! outcome to follow. This crate provides:
//!
//! - **Copy-on-write shared state**: nodes borrow the incoming snapshot and
//!   return a replacement, so a prior snapshot is never changed underneath
//!   concurrent readers
//! - **Identity store boundary**: a resolver trait for reading profile
//!   attributes, with an in-memory implementation
//! - **`GetProfilePropertyNode`**: copies configured profile attributes of the
//!   authenticating user into the shared state without ever failing the
//!   attempt
//! - **Diagnostics and logging**: `tracing`-backed diagnostics sinks and
//!   subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use authtree::prelude::*;
//! use std::sync::Arc;
//!
//! let config = ProfilePropertyConfig::from_json_str(
//!     r#"{"properties": {"mail": "userEmail", "cn": "displayName"}}"#,
//! )?;
//! let node = GetProfilePropertyNode::new(Arc::new(config), Arc::new(store));
//!
//! let action = node.process(&TreeContext::new(shared_state));
//! let next_state = action.shared_state_or(&shared_state);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod context;
pub mod diagnostics;
pub mod errors;
pub mod identity;
pub mod node;
pub mod observability;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{keys, AttemptIdentity, SharedContext, TreeContext};
    pub use crate::diagnostics::{
        CollectingDiagnostics, DiagnosticsSink, NoOpDiagnostics, TracingDiagnostics,
    };
    pub use crate::errors::{
        AttributeLookupError, AuthTreeError, ConfigError, IdentityResolutionError,
    };
    pub use crate::identity::{
        AttributeValues, IdentityAttributeResolver, IdentityHandle, InMemoryIdentityStore,
    };
    pub use crate::node::{
        Action, GetProfilePropertyNode, Node, NodeMetadata, Outcome, ProfilePropertyConfig,
        SingleOutcome,
    };
    pub use crate::observability::{init_logging, LoggingConfig};
}
