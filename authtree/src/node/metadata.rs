//! Static description of a node type for the tree configuration system.

use super::Outcome;
use serde::{Deserialize, Serialize};

/// The shape of a configuration attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// A single string.
    String,
    /// A map of string keys to string values.
    StringMap,
}

/// One configuration field a node declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigAttribute {
    /// Field name in the node's configuration document.
    pub name: String,
    /// Value shape.
    pub kind: AttributeKind,
    /// Position in the configuration UI.
    pub order: u32,
    /// Whether the field must be present.
    pub required: bool,
}

impl ConfigAttribute {
    /// Creates a new configuration attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: AttributeKind, order: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            order,
            required: false,
        }
    }

    /// Marks the attribute as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Describes a node type: its name, outcomes, and configuration fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetadata {
    /// Node type name.
    pub node_type: String,
    /// The outcomes the node can take.
    pub outcomes: Vec<Outcome>,
    /// The configuration fields, sorted by `order`.
    pub config_attributes: Vec<ConfigAttribute>,
}

impl NodeMetadata {
    /// Creates metadata for a node type.
    #[must_use]
    pub fn new(node_type: impl Into<String>, outcomes: Vec<Outcome>) -> Self {
        Self {
            node_type: node_type.into(),
            outcomes,
            config_attributes: Vec::new(),
        }
    }

    /// Declares a configuration attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: ConfigAttribute) -> Self {
        self.config_attributes.push(attribute);
        self.config_attributes.sort_by_key(|a| a.order);
        self
    }

    /// Looks up a configuration attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&ConfigAttribute> {
        self.config_attributes.iter().find(|a| a.name == name)
    }
}
