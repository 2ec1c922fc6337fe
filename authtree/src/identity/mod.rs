//! Identity store boundary.
//!
//! Nodes read profile attributes through [`IdentityAttributeResolver`]. The
//! resolver is shared by every concurrent attempt, so implementations must
//! be `Send + Sync` and safe to call from many threads at once.

mod memory;

pub use memory::InMemoryIdentityStore;

use crate::errors::{AttributeLookupError, IdentityResolutionError};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The values of a (possibly multi-valued) profile attribute.
///
/// Ordered so that "the first value" is well defined.
pub type AttributeValues = IndexSet<String>;

/// A resolved reference to an identity in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityHandle {
    /// The username the identity was resolved from.
    pub username: String,
    /// The realm the identity lives in.
    pub realm: String,
    /// The store's stable identifier for the identity.
    pub universal_id: String,
}

impl IdentityHandle {
    /// Creates a new identity handle.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        realm: impl Into<String>,
        universal_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            realm: realm.into(),
            universal_id: universal_id.into(),
        }
    }
}

/// Reads profile attributes of users from an identity store.
///
/// Both calls block until the store answers.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityAttributeResolver: Send + Sync {
    /// Resolves a `(username, realm)` pair to an identity.
    ///
    /// # Errors
    ///
    /// Returns `IdentityResolutionError` if no usable identity exists.
    fn resolve_identity(
        &self,
        username: &str,
        realm: &str,
    ) -> Result<IdentityHandle, IdentityResolutionError>;

    /// Reads all values of `attribute` for `identity`.
    ///
    /// An attribute the identity does not have yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns `AttributeLookupError` if the store cannot be read.
    fn attribute_values(
        &self,
        identity: &IdentityHandle,
        attribute: &str,
    ) -> Result<AttributeValues, AttributeLookupError>;
}
