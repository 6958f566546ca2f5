//! A single diagnostic message.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A non-fatal observation surfaced by a stage of the back-end flow.
///
/// Unlike the typed errors each stage returns on hard failure, diagnostics
/// accumulate across a run and are only reported to the caller afterward —
/// a net's unreachable sink does not stop routing, but it is worth saying.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity of this observation.
    pub severity: Severity,
    /// The message text.
    pub message: String,
}

impl Diagnostic {
    /// Creates a note-severity diagnostic.
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Note,
            message: message.into(),
        }
    }

    /// Creates a warning-severity diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_has_note_severity() {
        let d = Diagnostic::note("placed with cost 12.0");
        assert_eq!(d.severity, Severity::Note);
    }

    #[test]
    fn warning_display() {
        let d = Diagnostic::warning("sink unreachable at (4, 4)");
        assert_eq!(format!("{d}"), "warning: sink unreachable at (4, 4)");
    }
}
