//! Same-origin text-to-speech proxy

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use vocab_core::{SpeechRequest, VoiceGender};

use crate::error::{ApiError, Result};
use crate::models::TtsQuery;
use crate::AppState;

/// Wrap upstream MP3 bytes in a cacheable audio response.
pub(crate) fn audio_response(audio: Bytes) -> Response {
    (
        [
            (CONTENT_TYPE, "audio/mpeg"),
            (CACHE_CONTROL, "public, max-age=3600"),
        ],
        audio,
    )
        .into_response()
}

/// GET /tts?text=...&gender=male|female
pub async fn proxy(
    State(state): State<AppState>,
    Query(query): Query<TtsQuery>,
) -> Result<Response> {
    let gender = match query.gender.as_deref() {
        Some(gender) => gender.parse::<VoiceGender>().map_err(ApiError::BadRequest)?,
        None => VoiceGender::default(),
    };

    let request = query
        .text
        .as_deref()
        .and_then(|text| SpeechRequest::new(text, gender))
        .ok_or_else(|| ApiError::BadRequest("Text parameter is required".to_string()))?;

    let audio = state.tts.fetch(&request).await?;
    Ok(audio_response(audio))
}
