//! Utility functions for text statistics

use crate::editable::TextBuffer;

/// Character and word counts for the statistics readout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStatistics {
    /// Number of characters (Unicode scalar values)
    pub characters: usize,
    /// Number of maximal runs of non-whitespace characters
    pub words: usize,
}

impl TextStatistics {
    /// Compute statistics for a plain string
    pub fn from_text(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: word_count(text),
        }
    }

    /// Compute statistics over a buffer's full content
    pub fn from_buffer<B: TextBuffer + ?Sized>(buffer: &B) -> Self {
        let characters = buffer.len_chars();
        let words = buffer
            .slice_cow(0..characters)
            .map(|text| word_count(&text))
            .unwrap_or(0);
        Self { characters, words }
    }

    /// Text shown in the statistics alert
    pub fn summary(&self) -> String {
        format!("Characters: {}\nWords: {}", self.characters, self.words)
    }
}

/// Count maximal runs of non-whitespace characters
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
