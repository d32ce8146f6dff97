//! Paste-to-deck pipeline: parse, validate, shuffle.

use rand::Rng;
use serde::Serialize;

use crate::error::{PasteError, Result};
use crate::parser::{parse_report, ParseReport};
use crate::shuffle::shuffle;
use crate::types::{FlashcardRecord, HeaderLabels};
use crate::validator::validate;

/// Ordered, fixed set of records studied in one session.
///
/// The order is settled when the deck is built; nothing inserts or removes
/// cards afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<FlashcardRecord>,
}

impl Deck {
    /// Validate and shuffle parsed records into a deck.
    pub fn from_records<R: Rng + ?Sized>(
        records: &[FlashcardRecord],
        rng: &mut R,
    ) -> Result<Self> {
        validate(records)?;
        Ok(Self {
            cards: shuffle(records, rng),
        })
    }

    /// Run the whole pipeline on raw pasted text.
    ///
    /// The parse report comes back alongside the deck so callers can log
    /// how many lines were skipped.
    pub fn from_paste<R: Rng + ?Sized>(
        raw: &str,
        labels: &HeaderLabels,
        rng: &mut R,
    ) -> Result<(Self, ParseReport)> {
        ensure_pasted(raw)?;
        let report = parse_report(raw, labels);
        let deck = Self::from_records(&report.records, rng)?;
        Ok((deck, report))
    }

    /// Deck in the given order, without shuffling or validation.
    pub fn in_order(cards: Vec<FlashcardRecord>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FlashcardRecord> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[FlashcardRecord] {
        &self.cards
    }
}

/// Fail with `EmptyClipboard` when nothing but whitespace was pasted.
pub fn ensure_pasted(raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(PasteError::EmptyClipboard);
    }
    Ok(())
}
