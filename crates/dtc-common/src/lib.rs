//! Common types shared across the dtc compiler front end.
//!
//! This crate provides the foundational, non-AST pieces the rest of the
//! workspace builds on:
//! - String interning (`Symbol`, `Interner`)
//! - Finite symbol sets (`SymbolSet`)
//! - Source spans and (line, column) positions (`Span`, `Position`, `LineMap`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`)
//! - Centralized recursion/capacity limits (`limits`)

pub mod diagnostics;
pub mod interner;
pub mod limits;
pub mod position;
pub mod span;
pub mod symbol_set;

pub use diagnostics::{Diagnostic, DiagnosticCategory};
pub use interner::{Interner, Symbol};
pub use limits::Limits;
pub use position::{LineMap, Position};
pub use span::Span;
pub use symbol_set::SymbolSet;

/// Per-invocation context: owns the symbol registry.
///
/// Spec §5: "the per-invocation context owns the symbol registry and the
/// input token stream; it is passed by reference to every operation that
/// may need to intern or gensym. There is no implicit process-wide state."
///
/// The input token stream itself belongs to the (out-of-scope) lexer, so
/// this `Context` carries only the interner — every operation in
/// `dtc-ast` that needs a fresh symbol takes a `&mut Context`.
#[derive(Debug, Default)]
pub struct Context {
    pub interner: Interner,
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning the canonical `Symbol` for it.
    pub fn intern(&mut self, text: &str) -> Symbol {
        self.interner.intern(text)
    }

    /// Allocate a fresh symbol distinct from every symbol interned so far,
    /// derived textually from `base`.
    pub fn gensym(&mut self, base: Symbol) -> Symbol {
        self.interner.gensym(base)
    }
}
