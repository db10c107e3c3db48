//! Selection type: a caret or a character range in the buffer.

use std::ops::Range;

/// A selection as a start offset and a length in characters.
/// A length of 0 is a plain caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Offset of the first selected character (or the caret)
    pub location: usize,
    /// Number of selected characters
    pub length: usize,
}

impl Selection {
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Create a collapsed selection (caret with no selection)
    pub const fn caret(location: usize) -> Self {
        Self {
            location,
            length: 0,
        }
    }

    /// Selection covering a character range
    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            location: range.start,
            length: range.end.saturating_sub(range.start),
        }
    }

    /// Check if selection is empty (caret only)
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Offset just past the selection
    pub fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }

    pub fn range(&self) -> Range<usize> {
        self.location..self.end()
    }

    /// Clamp into a buffer of `len` characters so that `location + length <= len`
    pub fn clamped(&self, len: usize) -> Self {
        let location = self.location.min(len);
        let length = self.length.min(len - location);
        Self { location, length }
    }

    /// Check whether the selection already fits a buffer of `len` characters
    pub fn fits(&self, len: usize) -> bool {
        self.location <= len && self.end() <= len
    }

}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::from_range(range)
    }
}
