//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using PasteError.
pub type Result<T> = std::result::Result<T, PasteError>;

/// Errors that can occur while turning a paste into a deck.
///
/// Both are recoverable: the caller keeps the paste surface open and the
/// user may try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasteError {
    #[error("no data found in clipboard")]
    EmptyClipboard,

    #[error("no valid rows")]
    NoValidRows,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_valid_rows() {
        assert_eq!(PasteError::NoValidRows.to_string(), "no valid rows");
    }

    #[test]
    fn display_empty_clipboard() {
        assert_eq!(
            PasteError::EmptyClipboard.to_string(),
            "no data found in clipboard"
        );
    }
}
