use std::fmt;

use crate::ast::Position;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation failed and produced no value.
    Error,
    /// An operator was applied to operand types it does not support.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A non-fatal problem found while lexing or evaluating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Error or warning.
    pub severity: Severity,
    /// Human readable description, without location.
    pub message:  String,
    /// Where the problem was found.
    pub position: Position,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self { severity: Severity::Error,
               message: message.into(),
               position }
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>, position: Position) -> Self {
        Self { severity: Severity::Warning,
               message: message.into(),
               position }
    }
}

impl fmt::Display for Diagnostic {
    /// Formats the diagnostic as `<message> in line <l> column <c>`.
    ///
    /// # Example
    /// ```
    /// use juicy::{ast::Position, error::Diagnostic};
    ///
    /// let d = Diagnostic::error("Variable 'x' is not defined", Position::new(3, 7));
    /// assert_eq!(d.to_string(), "Variable 'x' is not defined in line 3 column 7");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.message, self.position)
    }
}

/// Receives diagnostics as they are produced.
///
/// The interpreter never prints diagnostics itself. The command-line binary
/// colors them for a terminal; tests collect them in a `Vec`.
pub trait DiagnosticSink {
    /// Handles one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
