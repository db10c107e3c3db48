//! Cursor position (line/column) derived from a flat character offset.

use std::fmt;

use super::buffer::TextBuffer;

/// A 1-based line and column for the status readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Line 1, column 1
    pub const fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: {}, Col: {}", self.line, self.column)
    }
}

/// Resolve a character offset to a 1-based line/column.
///
/// Only `\n` terminates a line; a terminator counts when its index is
/// strictly before `offset`. Offsets past the end clamp to the buffer length.
/// This is a linear scan over the text before the offset.
pub fn resolve_position<B: TextBuffer + ?Sized>(buffer: &B, offset: usize) -> CursorPosition {
    let offset = offset.min(buffer.len_chars());
    let Ok(prefix) = buffer.slice_cow(0..offset) else {
        return CursorPosition::start();
    };

    let mut line = 1;
    let mut line_start = 0;
    for (idx, ch) in prefix.chars().enumerate() {
        if ch == '\n' {
            line += 1;
            line_start = idx + 1;
        }
    }

    CursorPosition {
        line,
        column: offset - line_start + 1,
    }
}
