//! Text buffer traits and implementations.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits
//! that abstract over buffer backends (String for small inputs, Rope for documents).
//! All offsets are character indices. Every access is bounds-checked: a range
//! past the end of the buffer is an [`EditError::OutOfRange`], never a panic
//! and never a partial edit.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;

use super::error::EditError;

/// Read-only view into a text buffer.
pub trait TextBuffer {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Total length in bytes
    fn len_bytes(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Text in `range`, borrowed when the backend stores it contiguously
    fn slice_cow(&self, range: Range<usize>) -> Result<Cow<'_, str>, EditError>;

    /// Get full content as String (may be expensive for large buffers)
    fn content(&self) -> String;

    /// Text in `range` as an owned String
    fn substring(&self, range: Range<usize>) -> Result<String, EditError> {
        self.slice_cow(range).map(Cow::into_owned)
    }

    /// Validate that `range` is ordered and lies within the buffer
    fn check_range(&self, range: &Range<usize>) -> Result<(), EditError> {
        let len = self.len_chars();
        if range.start > range.end || range.end > len {
            return Err(EditError::out_of_range(range, len));
        }
        Ok(())
    }
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Replace the characters in `range` with `text`, returning the removed text.
    ///
    /// The buffer length changes by `text.chars().count() - range.len()`.
    fn replace(&mut self, range: Range<usize>, text: &str) -> Result<String, EditError>;

    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str) -> Result<(), EditError> {
        self.replace(offset..offset, text).map(|_| ())
    }

    /// Remove text in character range, returning it
    fn remove(&mut self, range: Range<usize>) -> Result<String, EditError> {
        self.replace(range, "")
    }

    /// Set content, replacing everything
    fn set_content(&mut self, text: &str);
}

// =============================================================================
// StringBuffer - for short inputs and scratch text
// =============================================================================

/// TextBuffer implementation wrapping String.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a StringBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert char offset to byte offset (clamped to the end)
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextBuffer for StringBuffer {
    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn len_bytes(&self) -> usize {
        self.text.len()
    }

    fn line_count(&self) -> usize {
        self.text.matches('\n').count() + 1
    }

    fn slice_cow(&self, range: Range<usize>) -> Result<Cow<'_, str>, EditError> {
        self.check_range(&range)?;
        let start = self.char_to_byte(range.start);
        let end = self.char_to_byte(range.end);
        Ok(Cow::Borrowed(&self.text[start..end]))
    }

    fn content(&self) -> String {
        self.text.clone()
    }
}

impl TextBufferMut for StringBuffer {
    fn replace(&mut self, range: Range<usize>, text: &str) -> Result<String, EditError> {
        self.check_range(&range)?;
        let start = self.char_to_byte(range.start);
        let end = self.char_to_byte(range.end);
        let removed = self.text[start..end].to_string();
        self.text.replace_range(start..end, text);
        Ok(removed)
    }

    fn set_content(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

// =============================================================================
// RopeBuffer - for document editing
// =============================================================================

/// TextBuffer implementation wrapping ropey::Rope.
/// Used for the open document, with efficient edits on large files.
#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Access the underlying Rope for rope-specific operations
    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl TextBuffer for RopeBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn slice_cow(&self, range: Range<usize>) -> Result<Cow<'_, str>, EditError> {
        self.check_range(&range)?;
        let slice = self.rope.slice(range);
        // Contiguous slices (the common case for small documents) avoid allocation
        Ok(match slice.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(slice.to_string()),
        })
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl TextBufferMut for RopeBuffer {
    fn replace(&mut self, range: Range<usize>, text: &str) -> Result<String, EditError> {
        self.check_range(&range)?;
        let removed = self.rope.slice(range.clone()).to_string();
        if range.start < range.end {
            self.rope.remove(range.clone());
        }
        if !text.is_empty() {
            self.rope.insert(range.start, text);
        }
        Ok(removed)
    }

    fn set_content(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }
}

impl From<&str> for RopeBuffer {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<String> for RopeBuffer {
    fn from(s: String) -> Self {
        Self {
            rope: Rope::from(s),
        }
    }
}
