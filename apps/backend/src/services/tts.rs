//! Text-to-speech upstream client.
//!
//! Fetches MP3 audio for a pronunciation request from a Google Translate
//! style endpoint. The voice gender hint is logged but the upstream has no
//! way to honour it.

use axum::body::Bytes;
use reqwest::{
    header::{REFERER, USER_AGENT},
    Client,
};
use thiserror::Error;
use vocab_core::SpeechRequest;

use crate::config::TtsConfig;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const TTS_REFERER: &str = "https://translate.google.com/";

#[derive(Debug, Error)]
pub enum TtsError {
    #[error("TTS request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("TTS upstream returned {0}")]
    Status(u16),
}

/// Client for the upstream text-to-speech endpoint.
pub struct TtsClient {
    client: Client,
    config: TtsConfig,
}

impl TtsClient {
    pub fn new(config: TtsConfig) -> Result<Self, TtsError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Fetch audio for the request.
    pub async fn fetch(&self, request: &SpeechRequest) -> Result<Bytes, TtsError> {
        tracing::info!(
            "Requesting {} voice for: {:?}",
            request.gender,
            preview(&request.text)
        );

        let speed = self.config.speed.to_string();
        let response = self
            .client
            .get(&self.config.upstream_url)
            .query(&[
                ("ie", "UTF-8"),
                ("tl", self.config.language.as_str()),
                ("client", "tw-ob"),
                ("q", request.text.as_str()),
                ("ttsspeed", speed.as_str()),
            ])
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(REFERER, TTS_REFERER)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("TTS upstream returned {}", status);
            return Err(TtsError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?)
    }
}

/// First 50 characters of the text, for log lines.
fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(50).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
