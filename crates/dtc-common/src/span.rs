//! `Span` — byte-offset source location tracking for AST nodes.
//!
//! A `Span` is a half-open byte range `[start, end)`. Spans are small
//! (8 bytes) and cheap to copy; converting to a (line, column) `Position`
//! for diagnostics is a separate step done via [`crate::position::LineMap`].

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// A synthetic span for nodes produced by substitution rather than the
    /// parser (e.g. a renamed binder, or a spliced-in replacement).
    #[must_use]
    pub const fn synthetic() -> Self {
        Span {
            start: u32::MAX,
            end: u32::MAX,
        }
    }

    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        self.start == u32::MAX && self.end == u32::MAX
    }

    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
