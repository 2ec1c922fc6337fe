//! Diagnostics sink trait and implementations.

use crate::errors::{AttributeLookupError, IdentityResolutionError};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt;
use tracing::{error, info};

/// Receives diagnostic messages from nodes.
pub trait DiagnosticsSink: Send + Sync {
    /// Records an informational message.
    fn info(&self, message: &str);

    /// Records an error, with the underlying cause when there is one.
    fn error(&self, message: &str, cause: Option<&(dyn Error + 'static)>);
}

/// Returns the structured fields of a cause raised by an identity resolver.
///
/// Other error types have no structured form and yield `None`.
#[must_use]
pub fn error_details(cause: &(dyn Error + 'static)) -> Option<Value> {
    let dict = if let Some(err) = cause.downcast_ref::<AttributeLookupError>() {
        err.to_dict()
    } else if let Some(err) = cause.downcast_ref::<IdentityResolutionError>() {
        err.to_dict()
    } else {
        return None;
    };
    Some(Value::Object(dict.into_iter().collect()))
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDiagnostics;

impl DiagnosticsSink for NoOpDiagnostics {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str, _cause: Option<&(dyn Error + 'static)>) {}
}

/// A sink that forwards to the `tracing` framework.
///
/// Every event carries a `node` field naming the emitting node type.
#[derive(Debug, Clone)]
pub struct TracingDiagnostics {
    node: String,
}

impl TracingDiagnostics {
    /// Creates a tracing sink for the given node type.
    #[must_use]
    pub fn new(node: impl Into<String>) -> Self {
        Self { node: node.into() }
    }

    /// Returns the node type this sink reports for.
    #[must_use]
    pub fn node(&self) -> &str {
        &self.node
    }
}

impl DiagnosticsSink for TracingDiagnostics {
    fn info(&self, message: &str) {
        info!(node = %self.node, "{}", message);
    }

    fn error(&self, message: &str, cause: Option<&(dyn Error + 'static)>) {
        match cause {
            Some(cause) => match error_details(cause) {
                Some(details) => error!(
                    node = %self.node,
                    error = %cause,
                    details = %details,
                    "{}",
                    message
                ),
                None => error!(node = %self.node, error = %cause, "{}", message),
            },
            None => error!(node = %self.node, "{}", message),
        }
    }
}

/// Severity of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// Informational.
    Info,
    /// Error.
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic captured by [`CollectingDiagnostics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// Severity.
    pub level: DiagnosticLevel,
    /// The message.
    pub message: String,
    /// The rendered cause, for errors that had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    /// Structured fields of the cause, when it has them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// When the diagnostic was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// A sink that keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    records: RwLock<Vec<DiagnosticRecord>>,
}

impl CollectingDiagnostics {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected records.
    #[must_use]
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.records.read().clone()
    }

    /// Returns the records of one level.
    #[must_use]
    pub fn records_at(&self, level: DiagnosticLevel) -> Vec<DiagnosticRecord> {
        self.records
            .read()
            .iter()
            .filter(|r| r.level == level)
            .cloned()
            .collect()
    }

    /// Returns the number of collected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Clears all collected records.
    pub fn clear(&self) {
        self.records.write().clear();
    }

    fn push(
        &self,
        level: DiagnosticLevel,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
    ) {
        self.records.write().push(DiagnosticRecord {
            level,
            message: message.to_string(),
            cause: cause.map(ToString::to_string),
            details: cause.and_then(error_details),
            recorded_at: Utc::now(),
        });
    }
}

impl DiagnosticsSink for CollectingDiagnostics {
    fn info(&self, message: &str) {
        self.push(DiagnosticLevel::Info, message, None);
    }

    fn error(&self, message: &str, cause: Option<&(dyn Error + 'static)>) {
        self.push(DiagnosticLevel::Error, message, cause);
    }
}
