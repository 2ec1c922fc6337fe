//! Configuration for the profile property node.

use crate::errors::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Maps profile attribute names to shared state keys.
///
/// Iteration order is configuration order, which is also the order in which
/// attributes are looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePropertyConfig {
    /// Source attribute name to destination shared state key.
    #[serde(default)]
    properties: IndexMap<String, String>,
}

impl ProfilePropertyConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mapping, builder style. A repeated source replaces the earlier
    /// destination but keeps its position.
    #[must_use]
    pub fn with_property(
        mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        self.properties.insert(source.into(), destination.into());
        self
    }

    /// Builds a validated configuration from `(source, destination)` pairs.
    pub fn from_properties<I, S, D>(properties: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<String>,
    {
        let config = Self {
            properties: properties
                .into_iter()
                .map(|(s, d)| (s.into(), d.into()))
                .collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration document such as
    /// `{"properties": {"mail": "userEmail"}}`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a configuration from a JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that no mapping has an empty side.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (source, destination) in &self.properties {
            if source.trim().is_empty() {
                return Err(ConfigError::EmptySourceAttribute);
            }
            if destination.trim().is_empty() {
                return Err(ConfigError::EmptyDestinationKey {
                    source_attribute: source.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns the mappings in configuration order.
    #[must_use]
    pub fn properties(&self) -> &IndexMap<String, String> {
        &self.properties
    }

    /// Returns the destination key for a source attribute.
    #[must_use]
    pub fn destination_for(&self, source: &str) -> Option<&str> {
        self.properties.get(source).map(String::as_str)
    }

    /// Returns every destination key, in configuration order.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.properties.values().map(String::as_str)
    }

    /// Returns the number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if there are no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
