//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

/// Header row as copied from the vocabulary sheet.
pub const HEADER_ROW: &str = "English\tPortuguese\tBreakdown";

/// Build a paste with a header and `num_rows` numbered rows.
pub fn sample_paste(num_rows: usize) -> String {
    let rows = (0..num_rows).map(|i| format!("word {}\tpalavra {}\tnote {}", i + 1, i + 1, i + 1));
    std::iter::once(HEADER_ROW.to_string())
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Request body for POST /api/sessions.
pub fn create_request(text: &str) -> Value {
    json!({ "text": text })
}

/// Request body for POST /api/sessions/{id}/events.
pub fn event_request(event: &str) -> Value {
    json!({ "event": event })
}

/// Request body mapping a keyboard key onto an event.
pub fn key_request(key: &str) -> Value {
    json!({ "key": key })
}
