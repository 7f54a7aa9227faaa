//! Inline notices: the success, info, and error lines shown on a page.

use transdash_app::services::dashboard_service::GuideLoadFailure;
use transdash_domain::error::BackendError;

/// Visual severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Error,
}

impl Level {
    /// CSS class used by the templates.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// One line of feedback rendered inline on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            text: text.into(),
        }
    }
}

/// Error lines for a failed single or bulk translation.
///
/// A rejection yields one line per detail message, in order. Anything else
/// yields a single generic line carrying the underlying error text.
#[must_use]
pub fn translation_failure(err: &BackendError) -> Vec<Notice> {
    match err.detail() {
        Some(detail) => detail.lines().iter().map(Notice::error).collect(),
        None => vec![Notice::error(format!("Request failed: {}", err.report()))],
    }
}

/// Error line for a language guide that could not be loaded.
#[must_use]
pub fn guide_failure(failure: &GuideLoadFailure) -> Notice {
    match failure {
        GuideLoadFailure::Rejected { .. } => Notice::error("Failed to load supported languages."),
        GuideLoadFailure::Unreachable { reason } => {
            Notice::error(format!("Backend connection error: {reason}"))
        }
    }
}
