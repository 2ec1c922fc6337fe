//! Test fixtures for node testing.

use crate::context::{keys, AttemptIdentity, SharedContext, TreeContext};
use crate::identity::InMemoryIdentityStore;

/// A builder for the context of one test attempt.
#[derive(Debug, Default)]
pub struct TestAttempt {
    state: SharedContext,
    attempt: Option<AttemptIdentity>,
}

impl TestAttempt {
    /// Creates an attempt with empty shared state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an attempt for `username` in `realm`.
    #[must_use]
    pub fn for_user(username: &str, realm: &str) -> Self {
        Self::new()
            .with_state(keys::USERNAME, username)
            .with_state(keys::REALM, realm)
    }

    /// Adds a shared state entry.
    #[must_use]
    pub fn with_state(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.state.put(key, value);
        self
    }

    /// Uses a specific attempt identity.
    #[must_use]
    pub fn with_attempt(mut self, attempt: AttemptIdentity) -> Self {
        self.attempt = Some(attempt);
        self
    }

    /// Returns the shared state built so far.
    #[must_use]
    pub fn state(&self) -> &SharedContext {
        &self.state
    }

    /// Builds the tree context.
    #[must_use]
    pub fn build(self) -> TreeContext {
        let ctx = TreeContext::new(self.state);
        match self.attempt {
            Some(attempt) => ctx.with_attempt(attempt),
            None => ctx,
        }
    }
}

/// A user profile to seed into an [`InMemoryIdentityStore`].
#[derive(Debug, Clone)]
pub struct TestProfile {
    /// Realm of the user.
    pub realm: String,
    /// Username.
    pub username: String,
    /// Attribute name and values.
    pub attributes: Vec<(String, Vec<String>)>,
}

impl TestProfile {
    /// Creates a profile with no attributes.
    #[must_use]
    pub fn new(realm: &str, username: &str) -> Self {
        Self {
            realm: realm.to_string(),
            username: username.to_string(),
            attributes: Vec::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, values: &[&str]) -> Self {
        self.attributes.push((
            name.to_string(),
            values.iter().map(|v| (*v).to_string()).collect(),
        ));
        self
    }

    /// Builds a store holding the given profiles.
    #[must_use]
    pub fn store(profiles: &[Self]) -> InMemoryIdentityStore {
        let store = InMemoryIdentityStore::new();
        for profile in profiles {
            store.insert_user(&profile.realm, &profile.username);
            for (name, values) in &profile.attributes {
                store.set_attribute(
                    &profile.realm,
                    &profile.username,
                    name,
                    values.iter().cloned(),
                );
            }
        }
        store
    }
}
