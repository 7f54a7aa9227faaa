//! Translation log entries recorded by the backend.

use std::fmt;

use serde::Deserialize;

use crate::json::null_as_default;

/// One past translation as reported by `GET /logs`.
///
/// Every field is optional on the wire and falls back to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    /// Backend timestamp, displayed verbatim.
    #[serde(deserialize_with = "null_as_default")]
    pub translated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub original_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub translated_text: String,
    /// Destination language code.
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} → {} ({})",
            self.translated_at, self.original_text, self.translated_text, self.language
        )
    }
}
