//! In-memory identity store.

use super::{AttributeValues, IdentityAttributeResolver, IdentityHandle};
use crate::errors::{AttributeLookupError, IdentityResolutionError};
use dashmap::DashMap;
use indexmap::IndexMap;
use uuid::Uuid;

/// A stored user profile.
#[derive(Debug, Clone)]
struct IdentityRecord {
    universal_id: String,
    /// Keyed by lowercased attribute name.
    attributes: IndexMap<String, AttributeValues>,
}

/// A concurrent in-memory identity store keyed by `(realm, username)`.
///
/// Attribute names match case-insensitively, like directory attributes do.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    users: DashMap<(String, String), IdentityRecord>,
}

impl InMemoryIdentityStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user with no attributes and returns its universal ID.
    ///
    /// An existing user with the same name in the same realm is replaced.
    pub fn insert_user(&self, realm: &str, username: &str) -> String {
        let universal_id = format!("id={username},ou=user,{}", Uuid::new_v4());
        self.users.insert(
            (realm.to_string(), username.to_string()),
            IdentityRecord {
                universal_id: universal_id.clone(),
                attributes: IndexMap::new(),
            },
        );
        universal_id
    }

    /// Sets the values of an attribute, replacing previous values.
    ///
    /// Returns false if the user does not exist.
    pub fn set_attribute<I, S>(
        &self,
        realm: &str,
        username: &str,
        attribute: &str,
        values: I,
    ) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(mut record) = self
            .users
            .get_mut(&(realm.to_string(), username.to_string()))
        else {
            return false;
        };

        record.attributes.insert(
            attribute.to_lowercase(),
            values.into_iter().map(Into::into).collect(),
        );
        true
    }

    /// Removes a user. Returns true if the user existed.
    pub fn remove_user(&self, realm: &str, username: &str) -> bool {
        self.users
            .remove(&(realm.to_string(), username.to_string()))
            .is_some()
    }

    /// Returns the number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if no users are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl IdentityAttributeResolver for InMemoryIdentityStore {
    fn resolve_identity(
        &self,
        username: &str,
        realm: &str,
    ) -> Result<IdentityHandle, IdentityResolutionError> {
        if username.is_empty() {
            return Err(IdentityResolutionError::invalid("username is empty"));
        }

        self.users
            .get(&(realm.to_string(), username.to_string()))
            .map(|record| IdentityHandle::new(username, realm, record.universal_id.clone()))
            .ok_or_else(|| IdentityResolutionError::not_found(username, realm))
    }

    fn attribute_values(
        &self,
        identity: &IdentityHandle,
        attribute: &str,
    ) -> Result<AttributeValues, AttributeLookupError> {
        let record = self
            .users
            .get(&(identity.realm.clone(), identity.username.clone()))
            .filter(|record| record.universal_id == identity.universal_id)
            .ok_or_else(|| {
                AttributeLookupError::repository(
                    attribute,
                    format!("identity {} no longer exists", identity.universal_id),
                )
            })?;

        Ok(record
            .attributes
            .get(&attribute.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}
