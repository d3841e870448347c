//! Source location tracking for keyfreq input files
//!
//! Positions are zero-indexed on every axis. Column counts characters, not
//! bytes or display cells, so a multi-byte character still advances the
//! column by one while the offset grows by its encoded width.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with byte offset, row and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Byte offset from start of input (0-based)
    pub offset: usize,
    /// Row number (0-based)
    pub row: u32,
    /// Column number (0-based)
    pub column: u32,
}

impl Position {
    /// Create a new position
    pub fn new(offset: usize, row: u32, column: u32) -> Self {
        Self {
            offset,
            row,
            column,
        }
    }

    /// The position of the first character of an input
    pub fn start() -> Self {
        Self::default()
    }

    /// Step past `ch`, which occupied `width` bytes of the input
    pub fn step(self, ch: char, width: usize) -> Self {
        match ch {
            '\n' => Self {
                offset: self.offset + width,
                row: self.row.saturating_add(1),
                column: 0,
            },
            _ => Self {
                offset: self.offset + width,
                row: self.row,
                column: self.column.saturating_add(1),
            },
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}:{} ({})", self.row, self.column, self.offset)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a new span
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "Span start must not be after end"
        );
        Self { start, end }
    }
}
