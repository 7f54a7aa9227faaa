//! Error detail: the `detail` field of a rejected backend response.

use serde_json::Value;

/// Error payload supplied by the backend on a non-success response.
///
/// The backend sends either one message or an ordered list of messages.
/// Each message becomes one error line on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    /// A single message.
    Message(String),
    /// An ordered list of messages.
    Messages(Vec<String>),
}

impl ErrorDetail {
    /// Unwrap the detail from a raw response body.
    ///
    /// Falls back to a single `HTTP <status>` line when the body is not JSON,
    /// carries no usable `detail` field, or carries an empty list.
    #[must_use]
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|mut value| value.get_mut("detail").map(Value::take))
            .and_then(Self::from_value)
            .unwrap_or_else(|| Self::Message(format!("HTTP {status}")))
    }

    /// Interpret a JSON `detail` value.
    ///
    /// Strings map to [`ErrorDetail::Message`] and arrays to
    /// [`ErrorDetail::Messages`]. Array items that are objects with a string
    /// `msg` field (validation errors) are reduced to that field; any other
    /// non-string item is kept as compact JSON. `null` and empty arrays
    /// yield `None`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(message) => Some(Self::Message(message)),
            Value::Array(items) if items.is_empty() => None,
            Value::Array(items) => Some(Self::Messages(
                items.into_iter().map(item_message).collect(),
            )),
            other => Some(Self::Message(other.to_string())),
        }
    }

    /// The error lines to display, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Message(message) => std::slice::from_ref(message),
            Self::Messages(messages) => messages,
        }
    }
}

fn item_message(item: Value) -> String {
    match item {
        Value::String(message) => message,
        Value::Object(ref fields) => match fields.get("msg") {
            Some(Value::String(msg)) => msg.clone(),
            _ => item.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_yield_one_line_for_scalar_detail() {
        let detail = ErrorDetail::from_body(422, br#"{"detail": "unsupported language code"}"#);
        assert_eq!(detail.lines(), ["unsupported language code"]);
    }

    #[test]
    fn should_yield_one_line_per_list_entry_in_order() {
        let detail = ErrorDetail::from_body(
            422,
            br#"{"detail": ["text too long", "language missing", "third"]}"#,
        );
        assert_eq!(
            detail.lines(),
            ["text too long", "language missing", "third"]
        );
    }

    #[test]
    fn should_reduce_validation_objects_to_their_message() {
        let detail = ErrorDetail::from_value(json!([
            {"loc": ["body", "input_text"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body"], "type": "unknown"}
        ]))
        .unwrap();
        assert_eq!(detail.lines().len(), 2);
        assert_eq!(detail.lines()[0], "field required");
        assert!(detail.lines()[1].contains("\"unknown\""));
    }

    #[test]
    fn should_fall_back_to_status_when_detail_missing() {
        let detail = ErrorDetail::from_body(503, br#"{"error": "nope"}"#);
        assert_eq!(detail, ErrorDetail::Message("HTTP 503".to_string()));
    }

    #[test]
    fn should_fall_back_to_status_when_body_is_not_json() {
        let detail = ErrorDetail::from_body(502, b"<html>Bad Gateway</html>");
        assert_eq!(detail.lines(), ["HTTP 502"]);
    }

    #[test]
    fn should_fall_back_to_status_when_detail_is_null_or_empty() {
        assert_eq!(
            ErrorDetail::from_body(400, br#"{"detail": null}"#).lines(),
            ["HTTP 400"]
        );
        assert_eq!(
            ErrorDetail::from_body(400, br#"{"detail": []}"#).lines(),
            ["HTTP 400"]
        );
    }

    #[test]
    fn should_keep_non_string_scalar_as_json() {
        let detail = ErrorDetail::from_value(json!(42)).unwrap();
        assert_eq!(detail.lines(), ["42"]);
    }
}
