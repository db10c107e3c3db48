//! Document model - represents the text buffer and file state

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::editable::{
    resolve_position, CursorPosition, Edit, EditError, EditHistory, EditOperation, RopeBuffer,
    Selection, TextBuffer, TextBufferMut,
};
use crate::search::{FindOutcome, ReplaceAllOutcome, ReplaceOutcome, SearchEngine};
use crate::util::TextStatistics;

/// Name shown for a document that has never been saved
pub const UNTITLED_NAME: &str = "Untitled.txt";

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The text buffer
    pub buffer: RopeBuffer,
    /// Current selection (a caret when empty)
    pub selection: Selection,
    /// Undo/redo history
    pub history: EditHistory,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Document revision counter (incremented on each mutation)
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: RopeBuffer::from_text(text),
            ..Self::default()
        }
    }

    /// Replace the whole document with loaded content
    ///
    /// Resets the selection and history. A load is never an unsaved change.
    pub fn load_content(&mut self, text: &str, path: Option<PathBuf>) {
        self.buffer.set_content(text);
        self.selection = Selection::caret(0);
        self.history.clear();
        self.file_path = path;
        self.is_modified = false;
        self.bump_revision();
    }

    /// Get the display name for this document.
    /// Returns the filename if saved, or "Untitled.txt" as fallback.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| UNTITLED_NAME.to_string())
    }

    /// Full buffer content
    pub fn content(&self) -> String {
        self.buffer.content()
    }

    /// Number of characters in the buffer
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Set the selection, clamped to the buffer
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(self.buffer.len_chars());
    }

    /// Line/column readout for the caret (the selection's start)
    pub fn cursor_position(&self) -> CursorPosition {
        resolve_position(&self.buffer, self.selection.location)
    }

    /// Character and word counts for the whole buffer
    pub fn statistics(&self) -> TextStatistics {
        TextStatistics::from_buffer(&self.buffer)
    }

    /// Record a successful save
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.file_path = Some(path);
        self.is_modified = false;
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Replace `range` with `text` as a direct user edit
    ///
    /// The caret lands after the inserted text.
    pub fn apply_user_edit(&mut self, range: Range<usize>, text: &str) -> Result<(), EditError> {
        let before = self.selection;
        let deleted = self.buffer.replace(range.clone(), text)?;
        let after = Selection::caret(range.start + text.chars().count());

        self.push_edit(EditOperation::single(
            Edit::new(range.start, deleted, text.to_string()),
            before,
            after,
        ));
        self.selection = after;
        Ok(())
    }

    /// Push an edit operation onto the undo stack and clear redo stack
    pub fn push_edit(&mut self, op: EditOperation) {
        if op.is_empty() {
            return;
        }
        self.history.push(op);
        self.is_modified = true;
        self.bump_revision();
    }

    /// Undo the last operation. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, EditError> {
        let Some(op) = self.history.pop_undo() else {
            return Ok(false);
        };
        op.revert(&mut self.buffer)?;
        self.set_selection(op.selection_before);
        self.is_modified = true;
        self.bump_revision();
        Ok(true)
    }

    /// Redo the last undone operation. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool, EditError> {
        let Some(op) = self.history.pop_redo() else {
            return Ok(false);
        };
        op.apply(&mut self.buffer)?;
        self.set_selection(op.selection_after);
        self.is_modified = true;
        self.bump_revision();
        Ok(true)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // =========================================================================
    // Find / replace
    // =========================================================================

    /// Move the selection to the next occurrence of `query`
    pub fn find_next(
        &mut self,
        engine: &SearchEngine,
        query: &str,
    ) -> Result<FindOutcome, EditError> {
        let outcome = engine.find_next(&self.buffer, self.selection, query)?;
        if let Some(sel) = outcome.selection() {
            self.selection = sel;
        }
        Ok(outcome)
    }

    /// Move the selection to the previous occurrence of `query`
    pub fn find_previous(
        &mut self,
        engine: &SearchEngine,
        query: &str,
    ) -> Result<FindOutcome, EditError> {
        let outcome = engine.find_previous(&self.buffer, self.selection, query)?;
        if let Some(sel) = outcome.selection() {
            self.selection = sel;
        }
        Ok(outcome)
    }

    /// Replace the selected match and advance to the next one
    pub fn replace_one(
        &mut self,
        engine: &SearchEngine,
        query: &str,
        replacement: &str,
    ) -> Result<ReplaceOutcome, EditError> {
        let before = self.selection;
        let outcome = engine.replace_one(&mut self.buffer, before, query, replacement)?;

        if let Some(edit) = &outcome.edit {
            let caret = Selection::caret(edit.offset + replacement.chars().count());
            self.push_edit(EditOperation::single(edit.clone(), before, caret));
        }
        self.selection = outcome.selection;
        Ok(outcome)
    }

    /// Replace every occurrence of `query` as a single undo step
    pub fn replace_all(
        &mut self,
        engine: &SearchEngine,
        query: &str,
        replacement: &str,
    ) -> Result<ReplaceAllOutcome, EditError> {
        let before = self.selection;
        let outcome = engine.replace_all(&mut self.buffer, query, replacement)?;

        self.push_edit(EditOperation::batch(
            outcome.edits.clone(),
            before,
            outcome.selection,
        ));
        self.selection = outcome.selection;
        Ok(outcome)
    }
}
