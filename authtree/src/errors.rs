//! Error types for authentication-tree nodes.
//!
//! Identity and attribute errors are produced by resolvers and recovered
//! locally by nodes; they never abort an authentication attempt. The
//! umbrella [`AuthTreeError`] covers the crate's genuinely fallible surfaces
//! (configuration parsing and logging setup).

use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;

/// The main error type for authtree operations.
#[derive(Debug, Error)]
pub enum AuthTreeError {
    /// Node configuration was rejected.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Identity resolution failed.
    #[error("{0}")]
    IdentityResolution(#[from] IdentityResolutionError),

    /// An attribute lookup failed.
    #[error("{0}")]
    AttributeLookup(#[from] AttributeLookupError),

    /// The logging subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Error raised when a `(username, realm)` pair cannot be mapped to an identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityResolutionError {
    /// No identity exists for the user in the realm.
    #[error("Identity not found: user '{username}' in realm '{realm}'")]
    NotFound {
        /// The username that was looked up.
        username: String,
        /// The realm that was searched.
        realm: String,
    },

    /// The identity reference itself is unusable (e.g. empty username).
    #[error("Invalid identity: {reason}")]
    InvalidIdentity {
        /// Why the reference was rejected.
        reason: String,
    },

    /// The identity repository reported an error.
    #[error("Identity repository error: {message}")]
    Repository {
        /// The repository's message.
        message: String,
    },
}

impl IdentityResolutionError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(username: impl Into<String>, realm: impl Into<String>) -> Self {
        Self::NotFound {
            username: username.into(),
            realm: realm.into(),
        }
    }

    /// Creates an invalid-identity error.
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidIdentity {
            reason: reason.into(),
        }
    }

    /// Creates a repository error.
    #[must_use]
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        match self {
            Self::NotFound { username, realm } => {
                map.insert("type".to_string(), json!("IdentityNotFound"));
                map.insert("username".to_string(), json!(username));
                map.insert("realm".to_string(), json!(realm));
            }
            Self::InvalidIdentity { reason } => {
                map.insert("type".to_string(), json!("InvalidIdentity"));
                map.insert("reason".to_string(), json!(reason));
            }
            Self::Repository { .. } => {
                map.insert("type".to_string(), json!("IdentityRepositoryError"));
            }
        }

        map.insert("message".to_string(), json!(self.to_string()));
        map
    }
}

/// Error raised when reading a single attribute of an identity fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeLookupError {
    /// The identity repository failed while reading the attribute.
    #[error("Repository error reading attribute '{attribute}': {message}")]
    Repository {
        /// The attribute being read.
        attribute: String,
        /// The repository's message.
        message: String,
    },

    /// The caller's session or token was rejected by the repository.
    #[error("Session error: {message}")]
    Session {
        /// The session error message.
        message: String,
    },

    /// The identity handle was never resolved, so nothing can be read.
    #[error("Cannot read attribute '{attribute}': identity was not resolved")]
    UnresolvedIdentity {
        /// The attribute being read.
        attribute: String,
    },
}

impl AttributeLookupError {
    /// Creates a repository error.
    #[must_use]
    pub fn repository(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Repository {
            attribute: attribute.into(),
            message: message.into(),
        }
    }

    /// Creates a session error.
    #[must_use]
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    /// Creates an unresolved-identity error.
    #[must_use]
    pub fn unresolved(attribute: impl Into<String>) -> Self {
        Self::UnresolvedIdentity {
            attribute: attribute.into(),
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        match self {
            Self::Repository { attribute, .. } => {
                map.insert("type".to_string(), json!("AttributeRepositoryError"));
                map.insert("attribute".to_string(), json!(attribute));
            }
            Self::Session { .. } => {
                map.insert("type".to_string(), json!("AttributeSessionError"));
            }
            Self::UnresolvedIdentity { attribute } => {
                map.insert("type".to_string(), json!("UnresolvedIdentity"));
                map.insert("attribute".to_string(), json!(attribute));
            }
        }

        map.insert("message".to_string(), json!(self.to_string()));
        map
    }
}

/// Error raised when a node configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A mapping has an empty source attribute name.
    #[error("Property mapping has an empty source attribute name")]
    EmptySourceAttribute,

    /// A mapping has an empty destination key.
    #[error("Property mapping for '{source_attribute}' has an empty destination key")]
    EmptyDestinationKey {
        /// The source attribute of the offending mapping.
        source_attribute: String,
    },

    /// The configuration document could not be parsed.
    #[error("Invalid configuration: {0}")]
    Parse(String),
}
