//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::config::EditorConfig;

/// Side effects returned from `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the UI
    Redraw,
    /// Scroll the text view so the selection is visible
    ScrollToSelection,
    /// Audible "not found" feedback
    Beep,
    /// Write file content
    SaveFile {
        path: PathBuf,
        content: String,
        /// Document revision being written
        revision: u64,
    },
    /// Read file content
    LoadFile { path: PathBuf },
    /// Persist editor settings
    SaveConfig(EditorConfig),
    /// Execute multiple commands
    Batch(Vec<Cmd>),

    // File dialogs
    /// Show native open file dialog
    ShowOpenFileDialog,
    /// Show native save file dialog
    ShowSaveFileDialog {
        /// Suggested file name (for pre-filling the dialog)
        suggested_name: String,
    },

    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }
}

