//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from vocab-core
pub use vocab_core::{
    Deck, FlashcardRecord, NavEvent, NavigationState, Progress, StudyDirection, VoiceGender,
};

// === Session Views ===

/// The card under the cursor, already resolved for the study direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub id: Uuid,
    pub front: String,
    pub back: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub card: Option<CardView>,
    pub state: NavigationState,
    pub voice_gender: VoiceGender,
    pub progress: Progress,
    pub created_at: DateTime<Utc>,
}

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub text: String,
}

/// Either a named event or a keyboard key to map onto one.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionEventRequest {
    #[serde(default)]
    pub event: Option<NavEvent>,
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeckResponse {
    pub session_id: Uuid,
    pub cards: Deck,
}

#[derive(Debug, Deserialize)]
pub struct TtsQuery {
    pub text: Option<String>,
    pub gender: Option<String>,
}
