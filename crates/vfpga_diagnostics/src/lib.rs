//! Non-fatal diagnostics for the virtual FPGA CAD back-end.
//!
//! Hard failures (capacity exhaustion, routing divergence, malformed input)
//! are typed errors returned by the stage that detects them. Everything else
//! worth telling the caller — a placement's final cost, a routing iteration
//! that left a sink unreachable — goes through a [`DiagnosticSink`] instead.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod severity;
pub mod sink;

pub use diagnostic::Diagnostic;
pub use severity::Severity;
pub use sink::DiagnosticSink;
