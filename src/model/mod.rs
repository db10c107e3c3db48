//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod status_bar;
pub mod ui;

pub use document::{Document, UNTITLED_NAME};
pub use status_bar::{
    sync_status_bar, RenderedSegment, SegmentContent, SegmentId, SegmentPosition, StatusBar,
    StatusBarLayout, StatusSegment, TransientMessage,
};
pub use ui::{
    line_spacing, next_font_size, FindReplaceState, FontChoice, UiState, DEFAULT_FONT_SIZE,
    FONT_SIZES,
};

use crate::config::EditorConfig;
use crate::search::SearchEngine;

/// The complete application model
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    /// The open document
    pub document: Document,
    /// UI state (status bar, find panel, fonts)
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a model with an empty document and the given configuration
    pub fn new(config: EditorConfig) -> Self {
        let mut ui = UiState::new();
        ui.font = config.font;
        ui.font_size = config.font_size;

        let mut model = Self {
            document: Document::new(),
            ui,
            config,
        };
        sync_status_bar(&mut model);
        model
    }

    /// Search engine configured from the current settings
    pub fn search_engine(&self) -> SearchEngine {
        SearchEngine::new(self.config.wrap_policy)
    }
}
