//! Edit history (undo/redo).
//!
//! An [`EditOperation`] groups one or more primitive [`Edit`]s that undo and
//! redo as a single step. Replace-all records every replacement it makes in one
//! operation, so a single undo restores the whole document.

use super::buffer::TextBufferMut;
use super::error::EditError;
use super::selection::Selection;

/// One primitive replacement: `deleted_text` at `offset` became `inserted_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Character offset where the edit occurred
    pub offset: usize,
    /// Text that was removed (empty for pure inserts)
    pub deleted_text: String,
    /// Text that was inserted (empty for pure deletes)
    pub inserted_text: String,
}

impl Edit {
    pub fn new(offset: usize, deleted_text: String, inserted_text: String) -> Self {
        Self {
            offset,
            deleted_text,
            inserted_text,
        }
    }

    fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }

    fn deleted_len(&self) -> usize {
        self.deleted_text.chars().count()
    }

    /// Re-apply this edit to a buffer in its pre-edit state
    pub fn apply<B: TextBufferMut + ?Sized>(&self, buffer: &mut B) -> Result<(), EditError> {
        buffer.replace(
            self.offset..self.offset + self.deleted_len(),
            &self.inserted_text,
        )?;
        Ok(())
    }

    /// Revert this edit on a buffer in its post-edit state
    pub fn revert<B: TextBufferMut + ?Sized>(&self, buffer: &mut B) -> Result<(), EditError> {
        buffer.replace(
            self.offset..self.offset + self.inserted_len(),
            &self.deleted_text,
        )?;
        Ok(())
    }
}

/// A single undoable step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation {
    /// Primitive edits, in the order they were applied
    pub edits: Vec<Edit>,
    /// Selection before the operation
    pub selection_before: Selection,
    /// Selection after the operation
    pub selection_after: Selection,
}

impl EditOperation {
    /// Operation made of a single edit
    pub fn single(edit: Edit, selection_before: Selection, selection_after: Selection) -> Self {
        Self {
            edits: vec![edit],
            selection_before,
            selection_after,
        }
    }

    /// Operation grouping several edits (applied in order) into one undo step
    pub fn batch(edits: Vec<Edit>, selection_before: Selection, selection_after: Selection) -> Self {
        Self {
            edits,
            selection_before,
            selection_after,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Redo: apply edits in forward order
    pub fn apply<B: TextBufferMut + ?Sized>(&self, buffer: &mut B) -> Result<(), EditError> {
        for edit in &self.edits {
            edit.apply(buffer)?;
        }
        Ok(())
    }

    /// Undo: revert edits in reverse order
    pub fn revert<B: TextBufferMut + ?Sized>(&self, buffer: &mut B) -> Result<(), EditError> {
        for edit in self.edits.iter().rev() {
            edit.revert(buffer)?;
        }
        Ok(())
    }
}

/// Edit history with undo/redo stacks.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<EditOperation>,
    redo_stack: Vec<EditOperation>,
    max_size: usize,
}

impl EditHistory {
    /// Create a new edit history with default max size
    pub fn new() -> Self {
        Self::with_max_size(1000)
    }

    /// Create a new edit history with specified max size
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Push an operation onto the undo stack (clears redo stack)
    pub fn push(&mut self, op: EditOperation) {
        if op.is_empty() {
            return;
        }
        self.redo_stack.clear();
        self.undo_stack.push(op);

        // Trim if exceeded max size
        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Take the most recent operation to revert (moves it to the redo stack)
    pub fn pop_undo(&mut self) -> Option<EditOperation> {
        let op = self.undo_stack.pop()?;
        self.redo_stack.push(op.clone());
        Some(op)
    }

    /// Take the most recently undone operation to re-apply (moves it to the undo stack)
    pub fn pop_redo(&mut self) -> Option<EditOperation> {
        let op = self.redo_stack.pop()?;
        self.undo_stack.push(op.clone());
        Some(op)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of operations in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of operations in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}
