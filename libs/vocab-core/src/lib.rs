//! Paste-to-deck pipeline for English ↔ Brazilian-Portuguese flashcards.
//!
//! Provides:
//! - TSV parser for rows pasted from a spreadsheet
//! - Deck validation and Fisher-Yates shuffling
//! - Navigation state machine (cursor, flip, direction, breakdown)
//! - Pronunciation requests for the text-to-speech collaborator

pub mod deck;
pub mod error;
pub mod navigator;
pub mod parser;
pub mod shuffle;
pub mod speech;
pub mod types;
pub mod validator;

pub use deck::{ensure_pasted, Deck};
pub use error::{PasteError, Result};
pub use navigator::{NavEvent, NavigationState, Navigator};
pub use parser::{parse, parse_report, ParseReport};
pub use shuffle::{shuffle, shuffle_with_thread_rng};
pub use speech::{SpeechRequest, VoiceGender};
pub use types::{FlashcardRecord, HeaderLabels, Progress, StudyDirection};
pub use validator::validate;
