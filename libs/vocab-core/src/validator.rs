//! Deck validation.

use crate::error::{PasteError, Result};
use crate::types::FlashcardRecord;

/// Check that a parsed paste can become a deck.
///
/// The parser already guarantees every record has both sides, so the only
/// failure is an empty result.
pub fn validate(records: &[FlashcardRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(PasteError::NoValidRows);
    }
    Ok(())
}
