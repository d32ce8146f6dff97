pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::HeaderLabels;

use crate::config::Config;
use crate::services::sessions::SessionStore;
use crate::services::tts::{TtsClient, TtsError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub tts: Arc<TtsClient>,
    pub labels: Arc<HeaderLabels>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, TtsError> {
        Ok(Self {
            sessions: Arc::new(SessionStore::new()),
            tts: Arc::new(TtsClient::new(config.tts.clone())?),
            labels: Arc::new(config.header_labels.clone()),
        })
    }
}

/// Build the full router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/tts", get(routes::tts::proxy))
        .route("/api/sessions", post(routes::sessions::create))
        .route(
            "/api/sessions/{id}",
            get(routes::sessions::get).delete(routes::sessions::delete),
        )
        .route("/api/sessions/{id}/deck", get(routes::sessions::deck))
        .route("/api/sessions/{id}/events", post(routes::sessions::event))
        .route("/api/sessions/{id}/speak", post(routes::sessions::speak))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("TTS upstream: {} ({})", config.tts.upstream_url, config.tts.language);
    let state = AppState::new(&config)?;

    tracing::info!(
        "Sessions expire after {}s idle",
        config.session_idle_timeout.as_secs()
    );
    state
        .sessions
        .clone()
        .spawn_reaper(config.session_idle_timeout);

    let app = router(state);

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
