//! Diagnostic types, shaped after the teacher's `tsz-common::diagnostics`
//! but sized to the error kinds this core actually raises (spec §7):
//! lexical and syntactic diagnostics are the (out-of-scope) parser's
//! responsibility and are represented only so `dtc-parser`'s contract can
//! name a concrete type; substitution refusal is the one error this core
//! itself produces.

use serde::Serialize;

use crate::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

/// A diagnostic message anchored at a (line, column) position.
///
/// Spec §7: lexical diagnostics go to stderr and lexing continues;
/// syntactic diagnostics go to stdout and parsing aborts. This type does
/// not pick a stream — that choice belongs to whatever prints it
/// (`dtc-cli`), matching the teacher's split between `Diagnostic` (data)
/// and its printing (presentation).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub position: Position,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn error(position: Position, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            position,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(position: Position, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            position,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.category {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
        };
        write!(
            f,
            "{}:{}: {}: {}",
            self.position.line + 1,
            self.position.column + 1,
            kind,
            self.message
        )
    }
}
