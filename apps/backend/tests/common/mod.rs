//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the app to a local fake TTS upstream
//! - Helper functions for creating sessions

pub mod fixtures;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{
        header::{CONTENT_TYPE, REFERER},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_test::TestServer;
use vocab_core::HeaderLabels;

use vocab_flashcards_backend::config::{Config, TtsConfig};
use vocab_flashcards_backend::{router, AppState};

/// Audio bytes served by the fake upstream.
pub const FAKE_AUDIO: &[u8] = b"ID3\x04fake-mp3-frames";

/// `q` value that makes the fake upstream stall.
pub const SLOW_TEXT: &str = "devagar";

/// `q` value that makes the fake upstream fail.
pub const FAILING_TEXT: &str = "falha";

/// A request seen by the fake upstream.
#[derive(Debug, Clone)]
pub struct UpstreamCall {
    pub query: HashMap<String, String>,
    pub referer: Option<String>,
}

type CallLog = Arc<Mutex<Vec<UpstreamCall>>>;

/// Test context with the app router and a running fake TTS upstream.
pub struct TestContext {
    pub state: AppState,
    calls: CallLog,
}

impl TestContext {
    /// Start the fake upstream and build app state pointing at it.
    pub async fn new() -> Self {
        let calls = CallLog::default();
        let addr = spawn_fake_upstream(calls.clone()).await;

        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            header_labels: HeaderLabels::default(),
            session_idle_timeout: Duration::from_secs(3600),
            tts: TtsConfig {
                upstream_url: format!("http://{}/translate_tts", addr),
                ..TtsConfig::default()
            },
        };

        let state = AppState::new(&config).expect("Failed to build app state");

        Self { state, calls }
    }

    /// Test server over the full router.
    pub fn server(&self) -> TestServer {
        TestServer::new(router(self.state.clone())).unwrap()
    }

    /// Requests received by the fake upstream so far.
    pub fn upstream_calls(&self) -> Vec<UpstreamCall> {
        self.calls.lock().unwrap().clone()
    }
}

async fn spawn_fake_upstream(calls: CallLog) -> SocketAddr {
    let app = Router::new()
        .route("/translate_tts", get(fake_tts))
        .with_state(calls);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake upstream");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    addr
}

async fn fake_tts(
    State(calls): State<CallLog>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let text = query.get("q").cloned().unwrap_or_default();
    calls.lock().unwrap().push(UpstreamCall {
        query,
        referer: headers
            .get(REFERER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    if text == FAILING_TEXT {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    if text == SLOW_TEXT {
        tokio::time::sleep(Duration::from_millis(1500)).await;
    }

    ([(CONTENT_TYPE, "audio/mpeg")], FAKE_AUDIO).into_response()
}
