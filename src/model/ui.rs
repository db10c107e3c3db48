//! UI state - status bar, find/replace panel, fonts, and statistics readout

use serde::{Deserialize, Serialize};

use super::status_bar::{StatusBar, TransientMessage};
use crate::util::TextStatistics;
use std::time::Duration;

/// How long a transient status message stays visible
pub const TRANSIENT_MESSAGE_DURATION: Duration = Duration::from_secs(3);

// ============================================================================
// Find/Replace panel
// ============================================================================

/// State for the find/replace panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindReplaceState {
    /// Search query
    pub query: String,
    /// Replacement text
    pub replacement: String,
    /// Whether the panel is shown
    pub visible: bool,
}

impl FindReplaceState {
    /// Find and replace actions are only available with a non-empty query
    pub fn can_search(&self) -> bool {
        !self.query.is_empty()
    }
}

// ============================================================================
// Fonts
// ============================================================================

/// Selectable font sizes, in order
pub const FONT_SIZES: [u32; 6] = [16, 18, 20, 22, 24, 26];

/// Font size used when none is configured
pub const DEFAULT_FONT_SIZE: u32 = 18;

/// Font families offered by the editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontChoice {
    #[default]
    Lato,
    Arial,
    System,
    Serif,
}

impl FontChoice {
    /// Font face name handed to the renderer
    pub fn face_name(&self) -> &'static str {
        match self {
            FontChoice::Lato => "Lato-Regular",
            FontChoice::Arial => "Arial",
            FontChoice::System => ".AppleSystemUIFont",
            FontChoice::Serif => "Times New Roman",
        }
    }

    /// Label shown on the font button
    pub fn label(&self) -> &'static str {
        match self {
            FontChoice::Lato => "Lato",
            FontChoice::Arial => "Arial",
            FontChoice::System => "System",
            FontChoice::Serif => "Serif",
        }
    }
}

/// The size after `size` in [`FONT_SIZES`], wrapping to the smallest
///
/// A size not in the list restarts the cycle.
pub fn next_font_size(size: u32) -> u32 {
    match FONT_SIZES.iter().position(|&s| s == size) {
        Some(idx) => FONT_SIZES[(idx + 1) % FONT_SIZES.len()],
        None => FONT_SIZES[0],
    }
}

/// Line spacing (points) for a font size
pub fn line_spacing(size: u32) -> f32 {
    size as f32 * 0.5
}

// ============================================================================
// UiState
// ============================================================================

/// UI state - status messages, panels, and presentation settings
#[derive(Debug, Clone)]
pub struct UiState {
    /// Persistent status message
    pub status_message: String,
    /// Structured status bar with segments
    pub status_bar: StatusBar,
    /// Transient message with auto-expiry
    pub transient_message: Option<TransientMessage>,
    /// Find/replace panel
    pub find: FindReplaceState,
    /// Current font family
    pub font: FontChoice,
    /// Current font size
    pub font_size: u32,
    /// Last computed statistics, shown until dismissed
    pub statistics: Option<TextStatistics>,
    /// Whether a file is currently being loaded
    pub is_loading: bool,
    /// Whether a file is currently being saved
    pub is_saving: bool,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self {
            status_message: String::new(),
            status_bar: StatusBar::new(),
            transient_message: None,
            find: FindReplaceState::default(),
            font: FontChoice::default(),
            font_size: DEFAULT_FONT_SIZE,
            statistics: None,
            is_loading: false,
            is_saving: false,
        }
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::new()
        }
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Show a message that disappears after a few seconds
    pub fn flash(&mut self, message: impl Into<String>) {
        self.transient_message = Some(TransientMessage::new(message, TRANSIENT_MESSAGE_DURATION));
    }

    /// Message to show right now: a live transient message, else the status
    pub fn current_message(&self) -> &str {
        match &self.transient_message {
            Some(msg) if !msg.is_expired() => &msg.text,
            _ => &self.status_message,
        }
    }

    /// Line spacing for the current font size
    pub fn line_spacing(&self) -> f32 {
        line_spacing(self.font_size)
    }

    /// Check if the UI is busy (loading or saving)
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_saving
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_faces() {
        assert_eq!(FontChoice::default().face_name(), "Lato-Regular");
        assert_eq!(FontChoice::System.face_name(), ".AppleSystemUIFont");
        assert_eq!(FontChoice::Serif.face_name(), "Times New Roman");
        assert_eq!(FontChoice::Arial.face_name(), "Arial");
    }

    #[test]
    fn test_next_font_size_cycles() {
        assert_eq!(next_font_size(18), 20);
        assert_eq!(next_font_size(26), 16);
        assert_eq!(next_font_size(17), 16);

        let mut size = DEFAULT_FONT_SIZE;
        for _ in 0..FONT_SIZES.len() {
            size = next_font_size(size);
        }
        assert_eq!(size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_line_spacing_is_half_the_size() {
        assert_eq!(line_spacing(18), 9.0);
        assert_eq!(UiState::new().line_spacing(), 9.0);
    }

    #[test]
    fn test_can_search_requires_query() {
        let mut find = FindReplaceState::default();
        assert!(!find.can_search());
        find.query = "x".into();
        assert!(find.can_search());
    }

    #[test]
    fn test_transient_message_overrides_status() {
        let mut ui = UiState::with_status("Ready");
        assert_eq!(ui.current_message(), "Ready");

        ui.flash("Saved");
        assert_eq!(ui.current_message(), "Saved");

        ui.transient_message = Some(TransientMessage::new("old", Duration::ZERO));
        assert_eq!(ui.current_message(), "Ready");
    }
}
