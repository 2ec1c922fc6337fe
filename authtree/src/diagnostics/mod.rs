//! Diagnostics sinks for node observability.
//!
//! Nodes report what they looked up and what went wrong through a
//! [`DiagnosticsSink`]. Reporting is fire-and-forget: a sink never returns
//! an error and never influences which outcome a node takes.

mod sink;

pub use sink::{
    error_details, CollectingDiagnostics, DiagnosticLevel, DiagnosticRecord, DiagnosticsSink,
    NoOpDiagnostics, TracingDiagnostics,
};
