//! Utility modules

pub mod file_validation;
pub mod text;

pub use text::{word_count, TextStatistics};

// Re-export file validation utilities
pub use file_validation::{
    ensure_text_extension, filename_for_display, is_likely_binary, read_text_file,
    validate_file_for_opening, write_text_file, FileOpenError, MAX_FILE_SIZE,
};
