//! Translation payloads and the bulk input rules.

use serde::{Deserialize, Serialize};

use crate::json::null_as_default;

/// Advertised per-text character limit.
///
/// Shown as a hint next to the input fields only. The backend is the sole
/// validator and its errors are displayed as-is.
pub const MAX_INPUT_CHARS: usize = 1000;

/// Body of `POST /translate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateRequest {
    pub input_text: String,
    pub destination_language: String,
}

/// Body of `POST /translate/bulk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkTranslateRequest {
    pub input_texts: Vec<String>,
    pub destination_language: String,
}

/// Success body of `POST /translate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Translation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_text: String,
}

/// Success body of `POST /translate/bulk`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BulkTranslation {
    /// Outputs positionally aligned with the submitted inputs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_texts: Vec<String>,
}

/// One input line matched with its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedPair {
    /// 1-based position in the submitted batch.
    pub position: usize,
    pub input: String,
    pub output: String,
}

/// Split raw multi-line input into the texts of a bulk request.
///
/// Lines are trimmed; blank and whitespace-only lines are dropped. Order is
/// preserved.
#[must_use]
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pair inputs with outputs by position, stopping at the shorter sequence.
///
/// A backend returning fewer outputs than inputs yields only the matched
/// prefix; the mismatch is not an error.
#[must_use]
pub fn pair_outputs(inputs: &[String], outputs: Vec<String>) -> Vec<TranslatedPair> {
    inputs
        .iter()
        .zip(outputs)
        .enumerate()
        .map(|(idx, (input, output))| TranslatedPair {
            position: idx + 1,
            input: input.clone(),
            output,
        })
        .collect()
}
