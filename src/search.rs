//! Find and replace over a text buffer.
//!
//! All operations are literal, case-sensitive substring matches on character
//! offsets. They take the buffer and the current selection and hand back a new
//! selection; the replace operations also mutate the buffer and return the
//! [`Edit`]s they made so the caller can record them for undo.
//!
//! "Not found" is a normal outcome ([`FindOutcome::NotFound`]). An empty query
//! is [`EditError::InvalidQuery`] and never touches the buffer.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::editable::{Edit, EditError, Selection, TextBuffer, TextBufferMut};

/// How find-next/find-previous retry after the first directional scan fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WrapPolicy {
    /// One wraparound scan over the whole buffer
    #[default]
    Single,
    /// Scan only the part of the buffer on the far side of the selection,
    /// or the whole buffer when the first scan range was empty
    Legacy,
}

/// Result of a find operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    /// Match found in the primary scan direction
    Found(Selection),
    /// Match found only after wrapping around the document boundary
    FoundWrapped(Selection),
    /// No occurrence anywhere the scans looked
    NotFound,
}

impl FindOutcome {
    /// The matched range, if any
    pub fn selection(&self) -> Option<Selection> {
        match self {
            FindOutcome::Found(sel) | FindOutcome::FoundWrapped(sel) => Some(*sel),
            FindOutcome::NotFound => None,
        }
    }
}

/// Result of replacing the current match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// The replacement performed, if the selection matched the query
    pub edit: Option<Edit>,
    /// The follow-up find-next
    pub next: FindOutcome,
    /// Selection the host should show: the next match, or the caret after
    /// the replacement when there is none
    pub selection: Selection,
}

impl ReplaceOutcome {
    pub fn replaced(&self) -> bool {
        self.edit.is_some()
    }
}

/// Result of replacing every occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceAllOutcome {
    /// Edits in the order they were applied (rightmost occurrence first)
    pub edits: Vec<Edit>,
    /// Selection after the operation (always the caret at offset 0)
    pub selection: Selection,
}

impl ReplaceAllOutcome {
    pub fn count(&self) -> usize {
        self.edits.len()
    }
}

// =============================================================================
// Scan primitives
// =============================================================================

/// First occurrence of `query` lying entirely inside `range`.
pub fn find_forward<B: TextBuffer + ?Sized>(
    buffer: &B,
    query: &str,
    range: Range<usize>,
) -> Option<Range<usize>> {
    scan(buffer, query, range, false)
}

/// Last occurrence of `query` lying entirely inside `range` (closest to its end).
pub fn find_backward<B: TextBuffer + ?Sized>(
    buffer: &B,
    query: &str,
    range: Range<usize>,
) -> Option<Range<usize>> {
    scan(buffer, query, range, true)
}

fn scan<B: TextBuffer + ?Sized>(
    buffer: &B,
    query: &str,
    range: Range<usize>,
    backwards: bool,
) -> Option<Range<usize>> {
    if query.is_empty() || range.start >= range.end {
        return None;
    }
    let haystack = buffer.slice_cow(range.clone()).ok()?;
    let byte_idx = if backwards {
        haystack.rfind(query)?
    } else {
        haystack.find(query)?
    };
    // Byte offset → char offset within the scanned range
    let start = range.start + haystack[..byte_idx].chars().count();
    Some(start..start + query.chars().count())
}

/// Count non-overlapping occurrences, scanning left to right.
pub fn count_occurrences<B: TextBuffer + ?Sized>(buffer: &B, query: &str) -> usize {
    if query.is_empty() {
        return 0;
    }
    buffer
        .slice_cow(0..buffer.len_chars())
        .map(|text| text.matches(query).count())
        .unwrap_or(0)
}

// =============================================================================
// Engine
// =============================================================================

/// Find/replace operations parameterised by a wraparound policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchEngine {
    pub wrap_policy: WrapPolicy,
}

impl SearchEngine {
    pub fn new(wrap_policy: WrapPolicy) -> Self {
        Self { wrap_policy }
    }

    /// Select the nearest occurrence after the current selection, wrapping to
    /// the start of the buffer if there is none.
    pub fn find_next<B: TextBuffer + ?Sized>(
        &self,
        buffer: &B,
        selection: Selection,
        query: &str,
    ) -> Result<FindOutcome, EditError> {
        if query.is_empty() {
            return Err(EditError::InvalidQuery);
        }
        let len = buffer.len_chars();
        let sel = selection.clamped(len);
        let search_start = sel.end();

        let outcome = match self.wrap_policy {
            WrapPolicy::Single => {
                if let Some(found) = find_forward(buffer, query, search_start..len) {
                    FindOutcome::Found(found.into())
                } else if search_start > 0 {
                    wrapped(find_forward(buffer, query, 0..len))
                } else {
                    // The forward scan already covered the whole buffer
                    FindOutcome::NotFound
                }
            }
            WrapPolicy::Legacy => {
                if search_start == len {
                    wrapped(find_forward(buffer, query, 0..len))
                } else if let Some(found) = find_forward(buffer, query, search_start..len) {
                    FindOutcome::Found(found.into())
                } else {
                    wrapped(find_forward(buffer, query, 0..sel.location))
                }
            }
        };

        tracing::debug!(?sel, ?outcome, policy = ?self.wrap_policy, "find_next");
        Ok(outcome)
    }

    /// Select the nearest occurrence before the current selection, wrapping to
    /// the end of the buffer if there is none.
    pub fn find_previous<B: TextBuffer + ?Sized>(
        &self,
        buffer: &B,
        selection: Selection,
        query: &str,
    ) -> Result<FindOutcome, EditError> {
        if query.is_empty() {
            return Err(EditError::InvalidQuery);
        }
        let len = buffer.len_chars();
        let sel = selection.clamped(len);

        let outcome = match self.wrap_policy {
            WrapPolicy::Single => {
                if let Some(found) = find_backward(buffer, query, 0..sel.location) {
                    FindOutcome::Found(found.into())
                } else if sel.location < len {
                    wrapped(find_backward(buffer, query, 0..len))
                } else {
                    // The backward scan already covered the whole buffer
                    FindOutcome::NotFound
                }
            }
            WrapPolicy::Legacy => {
                if sel.location == 0 {
                    wrapped(find_backward(buffer, query, 0..len))
                } else if let Some(found) = find_backward(buffer, query, 0..sel.location) {
                    FindOutcome::Found(found.into())
                } else {
                    wrapped(find_backward(buffer, query, sel.end()..len))
                }
            }
        };

        tracing::debug!(?sel, ?outcome, policy = ?self.wrap_policy, "find_previous");
        Ok(outcome)
    }

    /// Replace the selection if it is exactly `query`, then find the next occurrence.
    ///
    /// A caret or a selection holding other text is left alone; the call then
    /// only advances to the next match.
    pub fn replace_one<B: TextBufferMut + ?Sized>(
        &self,
        buffer: &mut B,
        selection: Selection,
        query: &str,
        replacement: &str,
    ) -> Result<ReplaceOutcome, EditError> {
        if query.is_empty() {
            return Err(EditError::InvalidQuery);
        }
        let sel = selection.clamped(buffer.len_chars());

        let matches = !sel.is_empty() && buffer.slice_cow(sel.range())? == query;
        let (edit, caret) = if matches {
            let deleted = buffer.replace(sel.range(), replacement)?;
            let caret = Selection::caret(sel.location + replacement.chars().count());
            tracing::debug!(at = sel.location, "replaced selection");
            (
                Some(Edit::new(sel.location, deleted, replacement.to_string())),
                caret,
            )
        } else {
            (None, sel)
        };

        let next = self.find_next(buffer, caret, query)?;
        Ok(ReplaceOutcome {
            edit,
            next,
            selection: next.selection().unwrap_or(caret),
        })
    }

    /// Replace every occurrence of `query`, scanning from the end of the buffer
    /// toward the start so unprocessed occurrences keep their offsets.
    pub fn replace_all<B: TextBufferMut + ?Sized>(
        &self,
        buffer: &mut B,
        query: &str,
        replacement: &str,
    ) -> Result<ReplaceAllOutcome, EditError> {
        if query.is_empty() {
            return Err(EditError::InvalidQuery);
        }

        let mut edits = Vec::new();
        let mut bound = buffer.len_chars();
        while bound > 0 {
            let Some(found) = find_backward(buffer, query, 0..bound) else {
                break;
            };
            let deleted = buffer.replace(found.clone(), replacement)?;
            edits.push(Edit::new(found.start, deleted, replacement.to_string()));
            bound = found.start;
        }

        tracing::debug!(count = edits.len(), "replace_all");
        Ok(ReplaceAllOutcome {
            edits,
            selection: Selection::caret(0),
        })
    }
}

fn wrapped(found: Option<Range<usize>>) -> FindOutcome {
    match found {
        Some(range) => FindOutcome::FoundWrapped(range.into()),
        None => FindOutcome::NotFound,
    }
}
