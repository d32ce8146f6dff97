//! Study session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use uuid::Uuid;
use vocab_core::{Deck, HeaderLabels, NavEvent};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::tts::audio_response;
use crate::AppState;

fn session_not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Session {} not found", id))
}

/// Parse, validate and shuffle a paste.
fn build_deck(text: &str, labels: &HeaderLabels) -> Result<Deck> {
    let (deck, report) = Deck::from_paste(text, labels, &mut rand::rng())?;
    tracing::debug!(
        records = report.records.len(),
        skipped = report.skipped,
        header = report.header_dropped,
        "Parsed paste"
    );

    Ok(deck)
}

/// POST /api/sessions
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionView>)> {
    let deck = build_deck(&payload.text, &state.labels)?;
    let view = state.sessions.create(deck).await;

    tracing::info!("Created session {} with {} cards", view.id, view.progress.total);

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/sessions/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>> {
    let view = state
        .sessions
        .view(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(view))
}

/// GET /api/sessions/{id}/deck
pub async fn deck(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeckResponse>> {
    let cards = state
        .sessions
        .deck(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(DeckResponse {
        session_id: id,
        cards,
    }))
}

/// DELETE /api/sessions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    if !state.sessions.remove(id).await {
        return Err(session_not_found(id));
    }

    tracing::info!("Removed session {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sessions/{id}/events
pub async fn event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SessionEventRequest>,
) -> Result<Json<SessionView>> {
    let event = match (payload.event, payload.key.as_deref()) {
        (Some(event), _) => event,
        (None, Some(key)) => NavEvent::from_key(key)
            .ok_or_else(|| ApiError::BadRequest(format!("No action bound to key {:?}", key)))?,
        (None, None) => {
            return Err(ApiError::BadRequest(
                "Either event or key is required".to_string(),
            ))
        }
    };

    let view = state
        .sessions
        .with_session(id, |session| {
            session.navigator.apply(event);
            session.view()
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    tracing::debug!("Session {} applied {:?}", id, event);
    Ok(Json(view))
}

/// POST /api/sessions/{id}/speak
///
/// Speaks the current card's Portuguese text. A newer speak request on the
/// same session aborts this one, which then answers 409. Deleting or
/// evicting the session mid-fetch answers 404.
pub async fn speak(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Response> {
    let request = state
        .sessions
        .with_session(id, |session| session.navigator.pronunciation())
        .await
        .ok_or_else(|| session_not_found(id))?
        .ok_or_else(|| ApiError::NotFound("No card available".to_string()))?;

    let tts = state.tts.clone();
    let task = tokio::spawn(async move { tts.fetch(&request).await });

    let superseded = state
        .sessions
        .with_session(id, |session| session.speech.replace(task.abort_handle()))
        .await;
    match superseded {
        Some(true) => tracing::debug!("Session {} superseded an active speech request", id),
        Some(false) => {}
        None => {
            task.abort();
            return Err(session_not_found(id));
        }
    }

    match task.await {
        Ok(audio) => Ok(audio_response(audio?)),
        Err(e) if e.is_cancelled() => match state.sessions.view(id).await {
            Some(_) => Err(ApiError::Superseded),
            None => Err(session_not_found(id)),
        },
        Err(e) => Err(ApiError::Internal(format!("Speech task failed: {}", e))),
    }
}
