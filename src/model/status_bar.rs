//! Status bar model - segments and layout
//!
//! Segments: file name, modified indicator, caret position and the current
//! status message. The host renders them; [`StatusBar::render`] lays them out
//! as a single line of text.

use std::time::{Duration, Instant};

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// File name display
    FileName,
    /// Modified indicator ("*")
    ModifiedIndicator,
    /// Transient status messages (e.g., "Saved draft.txt")
    StatusMessage,
    /// Caret position ("Line: 3, Col: 1")
    CursorPosition,
}

/// Position of a segment in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// Content of a segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Empty/hidden segment
    Empty,
    /// Text content
    Text(String),
}

impl SegmentContent {
    /// Get the display text for this content
    pub fn display_text(&self) -> &str {
        match self {
            SegmentContent::Empty => "",
            SegmentContent::Text(s) => s,
        }
    }

    /// Check if this content is empty (nothing to display)
    pub fn is_empty(&self) -> bool {
        match self {
            SegmentContent::Empty => true,
            SegmentContent::Text(s) => s.is_empty(),
        }
    }

    /// Get the character width of this content
    pub fn char_width(&self) -> usize {
        self.display_text().chars().count()
    }
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    pub id: SegmentId,
    pub position: SegmentPosition,
    pub content: SegmentContent,
}

impl StatusSegment {
    /// Create a new segment with the given ID and content
    pub fn new(id: SegmentId, content: SegmentContent) -> Self {
        let position = match id {
            SegmentId::FileName | SegmentId::ModifiedIndicator | SegmentId::StatusMessage => {
                SegmentPosition::Left
            }
            SegmentId::CursorPosition => SegmentPosition::Right,
        };

        Self {
            id,
            position,
            content,
        }
    }
}

/// The complete status bar state
#[derive(Debug, Clone)]
pub struct StatusBar {
    segments: Vec<StatusSegment>,
    /// Spacing between segments (character units)
    pub separator_spacing: usize,
    /// Padding on each side (character units)
    pub padding: usize,
}

impl StatusBar {
    /// Create a new status bar with default segments
    pub fn new() -> Self {
        Self {
            segments: vec![
                StatusSegment::new(
                    SegmentId::FileName,
                    SegmentContent::Text(super::document::UNTITLED_NAME.into()),
                ),
                StatusSegment::new(SegmentId::ModifiedIndicator, SegmentContent::Empty),
                StatusSegment::new(SegmentId::StatusMessage, SegmentContent::Empty),
                StatusSegment::new(
                    SegmentId::CursorPosition,
                    SegmentContent::Text("Line: 1, Col: 1".into()),
                ),
            ],
            separator_spacing: 2,
            padding: 1,
        }
    }

    /// Get a segment by ID
    pub fn get_segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Display text of a segment ("" when hidden)
    pub fn segment_text(&self, id: SegmentId) -> &str {
        self.get_segment(id)
            .map(|s| s.content.display_text())
            .unwrap_or("")
    }

    /// Update a segment's content
    pub fn update_segment(&mut self, id: SegmentId, content: SegmentContent) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.content = content;
        }
    }

    /// Iterate over visible segments (non-empty content)
    pub fn visible_segments(&self) -> impl Iterator<Item = &StatusSegment> {
        self.segments.iter().filter(|s| !s.content.is_empty())
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Transient Message
// =============================================================================

/// A transient status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

// =============================================================================
// Layout
// =============================================================================

/// A rendered segment with calculated position
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSegment {
    pub id: SegmentId,
    /// X position in character units
    pub x: usize,
    /// Width in character units
    pub width: usize,
    pub text: String,
}

/// Complete layout of the status bar
#[derive(Debug, Clone)]
pub struct StatusBarLayout {
    pub left: Vec<RenderedSegment>,
    pub right: Vec<RenderedSegment>,
}

impl StatusBar {
    /// Calculate the layout for rendering within `available_width` characters
    pub fn layout(&self, available_width: usize) -> StatusBarLayout {
        let mut left = Vec::new();
        let mut left_x = self.padding;
        for seg in self
            .visible_segments()
            .filter(|s| s.position == SegmentPosition::Left)
        {
            let width = seg.content.char_width();
            left.push(RenderedSegment {
                id: seg.id,
                x: left_x,
                width,
                text: seg.content.display_text().to_string(),
            });
            left_x += width + self.separator_spacing;
        }

        // Right segments are placed from the right edge, backwards
        let mut right = Vec::new();
        let mut right_x = available_width.saturating_sub(self.padding);
        let right_segs: Vec<_> = self
            .visible_segments()
            .filter(|s| s.position == SegmentPosition::Right)
            .collect();
        for seg in right_segs.iter().rev() {
            let width = seg.content.char_width();
            right_x = right_x.saturating_sub(width);
            right.push(RenderedSegment {
                id: seg.id,
                x: right_x,
                width,
                text: seg.content.display_text().to_string(),
            });
            right_x = right_x.saturating_sub(self.separator_spacing);
        }
        right.reverse();

        StatusBarLayout { left, right }
    }

    /// Lay the segments out as one line of `width` characters
    ///
    /// Right segments win when the line is too narrow for everything.
    pub fn render(&self, width: usize) -> String {
        let layout = self.layout(width);
        let mut line: Vec<char> = vec![' '; width];
        for seg in layout.left.iter().chain(layout.right.iter()) {
            for (i, c) in seg.text.chars().enumerate() {
                if let Some(slot) = line.get_mut(seg.x + i) {
                    *slot = c;
                }
            }
        }
        line.into_iter().collect::<String>().trim_end().to_string()
    }
}

// =============================================================================
// Sync Function
// =============================================================================

use super::AppModel;

/// Synchronize status bar segments with current document state
pub fn sync_status_bar(model: &mut AppModel) {
    let filename = model.document.display_name();
    model
        .ui
        .status_bar
        .update_segment(SegmentId::FileName, SegmentContent::Text(filename));

    let modified = if model.document.is_modified {
        SegmentContent::Text("*".to_string())
    } else {
        SegmentContent::Empty
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::ModifiedIndicator, modified);

    let cursor_text = model.document.cursor_position().to_string();
    model
        .ui
        .status_bar
        .update_segment(SegmentId::CursorPosition, SegmentContent::Text(cursor_text));

    let message = model.ui.current_message().to_string();
    let message = if message.is_empty() {
        SegmentContent::Empty
    } else {
        SegmentContent::Text(message)
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::StatusMessage, message);
}
