//! Server configuration loaded from the environment.

use std::time::Duration;

use thiserror::Error;
use vocab_core::HeaderLabels;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings for the HTTP server and the TTS proxy.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub header_labels: HeaderLabels,
    /// Sessions untouched for this long are dropped.
    pub session_idle_timeout: Duration,
    pub tts: TtsConfig,
}

/// Upstream text-to-speech settings.
#[derive(Debug, Clone)]
pub struct TtsConfig {
    pub upstream_url: String,
    /// Language code sent upstream, e.g. `pt-BR`.
    pub language: String,
    pub speed: f32,
    pub timeout: Duration,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            upstream_url: "https://translate.google.com/translate_tts".to_string(),
            language: "pt-BR".to_string(),
            speed: 0.9,
            timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// Recognised variables:
    /// - HOST: bind address (default `0.0.0.0`)
    /// - PORT: bind port (default `3001`)
    /// - HEADER_SOURCE_LABEL / HEADER_TARGET_LABEL: header row labels
    ///   (default `english` / `portuguese`)
    /// - TTS_UPSTREAM_URL: text-to-speech endpoint
    /// - TTS_LANGUAGE: language code (default `pt-BR`)
    /// - TTS_SPEED: playback speed hint (default `0.9`)
    /// - TTS_TIMEOUT_SECS: upstream request timeout (default `10`)
    /// - SESSION_IDLE_TIMEOUT_SECS: idle session lifetime (default `3600`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = TtsConfig::default();

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or("PORT", lookup("PORT"), 3001)?;

        let mut header_labels = HeaderLabels::default();
        if let Some(label) = lookup("HEADER_SOURCE_LABEL") {
            header_labels.source = label;
        }
        if let Some(label) = lookup("HEADER_TARGET_LABEL") {
            header_labels.target = label;
        }

        let session_idle_timeout = Duration::from_secs(parse_or(
            "SESSION_IDLE_TIMEOUT_SECS",
            lookup("SESSION_IDLE_TIMEOUT_SECS"),
            3600,
        )?);

        let tts = TtsConfig {
            upstream_url: lookup("TTS_UPSTREAM_URL").unwrap_or(defaults.upstream_url),
            language: lookup("TTS_LANGUAGE").unwrap_or(defaults.language),
            speed: parse_or("TTS_SPEED", lookup("TTS_SPEED"), defaults.speed)?,
            timeout: Duration::from_secs(parse_or(
                "TTS_TIMEOUT_SECS",
                lookup("TTS_TIMEOUT_SECS"),
                defaults.timeout.as_secs(),
            )?),
        };

        Ok(Self {
            host,
            port,
            header_labels,
            session_idle_timeout,
            tts,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
