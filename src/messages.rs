//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::ops::Range;
use std::path::PathBuf;

use crate::editable::Selection;
use crate::model::FontChoice;

/// Find/replace panel messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindMsg {
    /// Show the panel
    Show,
    /// Hide the panel ("Done"); the query is kept
    Hide,
    /// Find field text changed
    SetQuery(String),
    /// Replace field text changed
    SetReplacement(String),
    /// Select the next occurrence
    FindNext,
    /// Select the previous occurrence
    FindPrevious,
    /// Replace the selected occurrence and advance
    ReplaceOne,
    /// Replace every occurrence as one undo step
    ReplaceAll,
    /// Return pressed in the find field
    SubmitQuery,
    /// Return pressed in the replace field
    SubmitReplacement,
}

/// Document editing messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Replace the current selection with text (typing, paste)
    InsertText(String),
    /// Replace an explicit character range with text
    Edit { range: Range<usize>, text: String },
    /// Delete the selection, or the character before the caret
    DeleteBackward,
    /// Move or extend the selection
    SetSelection(Selection),
    /// Select the whole buffer
    SelectAll,
    /// Undo last edit
    Undo,
    /// Redo last undone edit
    Redo,
}

/// UI messages (fonts, statistics, status)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Switch font family
    SetFont(FontChoice),
    /// Step to the next font size
    CycleFontSize,
    /// Compute and show character/word counts
    ShowStatistics,
    /// Hide the statistics readout
    DismissStatistics,
    /// Set the persistent status message
    SetStatus(String),
    /// Clear the transient status message
    ClearTransientMessage,
}

/// Application-level messages (file operations)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Start a new, empty document
    NewFile,
    /// Start an empty document for a path that does not exist yet
    NewFileAt(PathBuf),
    /// Save current file
    SaveFile,
    /// Load a file
    LoadFile(PathBuf),
    /// File save completed
    SaveCompleted {
        path: PathBuf,
        /// Document revision that was written
        revision: u64,
        result: Result<(), String>,
    },
    /// File load completed
    FileLoaded {
        path: PathBuf,
        result: Result<String, String>,
    },
    /// Quit the application
    Quit,

    // === File Dialog Messages ===
    /// User requested "Save As..." dialog
    SaveFileAs,
    /// Save As dialog returned a path (or None if cancelled)
    SaveFileAsDialogResult { path: Option<PathBuf> },
    /// User requested "Open File..." dialog
    OpenFileDialog,
    /// Open File dialog returned a path (or None if cancelled)
    OpenFileDialogResult { path: Option<PathBuf> },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Find/replace panel messages
    Find(FindMsg),
    /// Document editing messages
    Document(DocumentMsg),
    /// UI messages
    Ui(UiMsg),
    /// Application messages
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Type text over the current selection
    pub fn insert_text(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::InsertText(text.into()))
    }

    /// Set the find field text
    pub fn set_query(query: impl Into<String>) -> Self {
        Msg::Find(FindMsg::SetQuery(query.into()))
    }

    /// Set the replace field text
    pub fn set_replacement(replacement: impl Into<String>) -> Self {
        Msg::Find(FindMsg::SetReplacement(replacement.into()))
    }

    /// Move the selection
    pub fn select(selection: Selection) -> Self {
        Msg::Document(DocumentMsg::SetSelection(selection))
    }
}
