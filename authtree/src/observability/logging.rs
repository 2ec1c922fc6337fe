//! Logging setup for hosts embedding tree nodes.

use crate::errors::AuthTreeError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Configuration for the global `tracing` subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives, e.g. `authtree=debug`.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Whether `RUST_LOG` overrides `filter` when set.
    #[serde(default = "default_respect_env")]
    pub respect_env: bool,
    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
    /// Include the event target in each line.
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_filter() -> String {
    "authtree=info".to_string()
}

fn default_respect_env() -> bool {
    true
}

fn default_with_target() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            respect_env: default_respect_env(),
            json: false,
            with_target: default_with_target(),
        }
    }
}

impl LoggingConfig {
    /// Creates a logging configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter directives.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Ignores `RUST_LOG`.
    #[must_use]
    pub fn ignore_env(mut self) -> Self {
        self.respect_env = false;
        self
    }

    /// Switches JSON output on or off.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Builds the filter this configuration describes.
    pub fn env_filter(&self) -> Result<EnvFilter, AuthTreeError> {
        if self.respect_env {
            if let Ok(filter) = EnvFilter::try_from_default_env() {
                return Ok(filter);
            }
        }
        EnvFilter::try_new(&self.filter).map_err(|e| AuthTreeError::Logging(e.to_string()))
    }
}

/// Installs a global fmt subscriber.
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AuthTreeError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_target(config.with_target);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| AuthTreeError::Logging(e.to_string()))
}
