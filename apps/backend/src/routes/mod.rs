pub mod sessions;
pub mod tts;
