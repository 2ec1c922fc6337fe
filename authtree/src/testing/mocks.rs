//! Mock collaborators for testing nodes.

use parking_lot::Mutex;
use std::collections::HashMap;

use crate::errors::{AttributeLookupError, IdentityResolutionError};
use crate::identity::{AttributeValues, IdentityAttributeResolver, IdentityHandle};

/// A resolver that answers from a fixed script and records every
/// attribute lookup.
///
/// Attributes that were not scripted resolve to an empty set.
#[derive(Debug)]
pub struct ScriptedResolver {
    identity: Result<IdentityHandle, IdentityResolutionError>,
    attributes: HashMap<String, Result<AttributeValues, AttributeLookupError>>,
    lookups: Mutex<Vec<String>>,
}

impl ScriptedResolver {
    /// Creates a resolver that resolves every identity to `username` in `realm`.
    #[must_use]
    pub fn for_user(username: &str, realm: &str) -> Self {
        Self {
            identity: Ok(IdentityHandle::new(
                username,
                realm,
                format!("id={username},ou=user"),
            )),
            attributes: HashMap::new(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Creates a resolver whose identity resolution always fails.
    #[must_use]
    pub fn unresolvable(error: IdentityResolutionError) -> Self {
        Self {
            identity: Err(error),
            attributes: HashMap::new(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Scripts the values of an attribute.
    #[must_use]
    pub fn with_values<I, S>(mut self, attribute: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.insert(
            attribute.to_string(),
            Ok(values.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Scripts a lookup failure for an attribute.
    #[must_use]
    pub fn with_failure(mut self, attribute: &str, error: AttributeLookupError) -> Self {
        self.attributes.insert(attribute.to_string(), Err(error));
        self
    }

    /// Returns the attributes looked up so far, in call order.
    #[must_use]
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().clone()
    }

    /// Returns the number of attribute lookups so far.
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().len()
    }
}

impl IdentityAttributeResolver for ScriptedResolver {
    fn resolve_identity(
        &self,
        _username: &str,
        _realm: &str,
    ) -> Result<IdentityHandle, IdentityResolutionError> {
        self.identity.clone()
    }

    fn attribute_values(
        &self,
        _identity: &IdentityHandle,
        attribute: &str,
    ) -> Result<AttributeValues, AttributeLookupError> {
        self.lookups.lock().push(attribute.to_string());
        self.attributes
            .get(attribute)
            .cloned()
            .unwrap_or_else(|| Ok(AttributeValues::new()))
    }
}
