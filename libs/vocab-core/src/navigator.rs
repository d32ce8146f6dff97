//! Deck navigation state machine.
//!
//! `NavigationState` is a plain value with pure transitions over a deck
//! length; `Navigator` pairs it with the deck it walks.

use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::speech::{SpeechRequest, VoiceGender};
use crate::types::{FlashcardRecord, Progress, StudyDirection};

/// Cursor, flip, direction and breakdown flags for one study session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub cursor: usize,
    pub flipped: bool,
    pub direction: StudyDirection,
    pub breakdown_visible: bool,
}

impl NavigationState {
    /// Advance one card. Stops at the last card without wrapping.
    pub fn next(self, len: usize) -> Self {
        if self.cursor + 1 < len {
            Self {
                cursor: self.cursor + 1,
                flipped: false,
                ..self
            }
        } else {
            self
        }
    }

    /// Step back one card. Stops at the first card.
    pub fn previous(self) -> Self {
        if self.cursor > 0 {
            Self {
                cursor: self.cursor - 1,
                flipped: false,
                ..self
            }
        } else {
            self
        }
    }

    pub fn flip(self) -> Self {
        Self {
            flipped: !self.flipped,
            ..self
        }
    }

    /// Swap question and answer languages. The revealed side no longer
    /// means the same thing, so the card turns face down.
    pub fn toggle_direction(self) -> Self {
        Self {
            direction: self.direction.toggled(),
            flipped: false,
            ..self
        }
    }

    pub fn toggle_breakdown(self) -> Self {
        Self {
            breakdown_visible: !self.breakdown_visible,
            ..self
        }
    }
}

/// A discrete user action on the study screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavEvent {
    Next,
    Previous,
    Flip,
    ToggleDirection,
    ToggleBreakdown,
    ToggleVoice,
}

impl NavEvent {
    /// Keyboard shortcut mapping used by the study screen.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Enter" => Some(Self::Flip),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "b" | "B" => Some(Self::ToggleBreakdown),
            _ => None,
        }
    }
}

/// Drives a `NavigationState` over an immutable deck.
#[derive(Debug, Clone)]
pub struct Navigator {
    deck: Deck,
    state: NavigationState,
    voice: VoiceGender,
}

impl Navigator {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            state: NavigationState::default(),
            voice: VoiceGender::default(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn voice(&self) -> VoiceGender {
        self.voice
    }

    pub fn next(&mut self) {
        self.state = self.state.next(self.deck.len());
    }

    pub fn previous(&mut self) {
        self.state = self.state.previous();
    }

    pub fn flip(&mut self) {
        self.state = self.state.flip();
    }

    pub fn toggle_direction(&mut self) {
        self.state = self.state.toggle_direction();
    }

    pub fn toggle_breakdown(&mut self) {
        self.state = self.state.toggle_breakdown();
    }

    pub fn toggle_voice(&mut self) {
        self.voice = self.voice.toggled();
    }

    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::Next => self.next(),
            NavEvent::Previous => self.previous(),
            NavEvent::Flip => self.flip(),
            NavEvent::ToggleDirection => self.toggle_direction(),
            NavEvent::ToggleBreakdown => self.toggle_breakdown(),
            NavEvent::ToggleVoice => self.toggle_voice(),
        }
    }

    /// The card under the cursor, or `None` for an empty deck.
    pub fn current_card(&self) -> Option<&FlashcardRecord> {
        self.deck.get(self.state.cursor)
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.state.cursor, self.deck.len())
    }

    /// Question side text for the current direction.
    pub fn front_text(&self) -> Option<&str> {
        let card = self.current_card()?;
        Some(match self.state.direction {
            StudyDirection::SourceToTarget => card.source.as_str(),
            StudyDirection::TargetToSource => card.target.as_str(),
        })
    }

    /// Answer side text for the current direction.
    pub fn back_text(&self) -> Option<&str> {
        let card = self.current_card()?;
        Some(match self.state.direction {
            StudyDirection::SourceToTarget => card.target.as_str(),
            StudyDirection::TargetToSource => card.source.as_str(),
        })
    }

    /// Pronunciation of the current card. Always the Portuguese side.
    pub fn pronunciation(&self) -> Option<SpeechRequest> {
        let card = self.current_card()?;
        SpeechRequest::new(&card.target, self.voice)
    }
}
