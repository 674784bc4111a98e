use serde::Serialize;

use crate::decl::Declaration;

/// Severity of a reported condition. The generator only reports; whether an
/// error fails the overall pass is the host's policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Note,
}

/// A structured report produced during a pass. Diagnostics are plain values
/// returned to the caller, never thrown control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// The declaration the report refers to, when there is one.
    pub decl: Option<Declaration>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, decl: Option<&Declaration>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            decl: decl.cloned(),
        }
    }

    pub fn note(message: impl Into<String>, decl: Option<&Declaration>) -> Self {
        Self {
            severity: Severity::Note,
            message: message.into(),
            decl: decl.cloned(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
