//! Position/line-map utilities: converting byte offsets to (line, column).
//!
//! Spec §6 requires diagnostics to carry (line, column); the AST itself
//! tracks byte-offset [`crate::Span`]s (teacher idiom), so `LineMap`
//! bridges the two on demand, same split as the teacher's
//! `position.rs`/`span.rs` pair.

use serde::{Deserialize, Serialize};

/// A 0-indexed (line, column) position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[must_use]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Maps byte offsets to (line, column) positions for one source file.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map from source text.
    #[must_use]
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a `Position`.
    #[must_use]
    pub fn offset_to_position(&self, offset: u32) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        Position::new(
            u32::try_from(line).unwrap_or(u32::MAX),
            offset.saturating_sub(line_start),
        )
    }
}
