//! Error type shared by buffer mutation and the search engine.

use std::ops::Range;

/// Errors raised by buffer access and find/replace operations.
///
/// "Not found" is not an error: searches report it through
/// [`crate::search::FindOutcome::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The find text is empty, so there is nothing to search for
    InvalidQuery,
    /// A range reached outside the buffer (a caller bug)
    OutOfRange { start: usize, end: usize, len: usize },
}

impl EditError {
    pub fn out_of_range(range: &Range<usize>, len: usize) -> Self {
        Self::OutOfRange {
            start: range.start,
            end: range.end,
            len,
        }
    }
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery => write!(f, "find text is empty"),
            Self::OutOfRange { start, end, len } => {
                write!(f, "range {}..{} is outside buffer of length {}", start, end, len)
            }
        }
    }
}

impl std::error::Error for EditError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = EditError::out_of_range(&(3..9), 5);
        assert_eq!(err.to_string(), "range 3..9 is outside buffer of length 5");
    }

    #[test]
    fn test_invalid_query_message() {
        assert_eq!(EditError::InvalidQuery.to_string(), "find text is empty");
    }
}
