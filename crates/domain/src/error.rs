//! Error types shared across the workspace.
//!
//! Every call to the translation backend ends in exactly one of the
//! [`BackendError`] variants when it does not succeed. Adapters wrap their
//! own typed errors and convert via `From`.

use std::error::Error as StdError;

use crate::detail::ErrorDetail;

/// Boxed error carried across the port boundary.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Failure of a single call to the translation backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// No HTTP response was received (name resolution, refused connection,
    /// transport-level timeout).
    #[error("could not reach backend")]
    Transport(#[source] BoxError),

    /// The backend answered with a status other than `200 OK`.
    #[error("backend responded with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Error detail unwrapped from the response body.
        detail: ErrorDetail,
    },

    /// The backend answered `200 OK` but the body could not be decoded.
    #[error("unexpected response body")]
    Decode(#[source] BoxError),
}

impl BackendError {
    /// Render the error together with its whole source chain, joined by `": "`.
    #[must_use]
    pub fn report(&self) -> String {
        match self.source_report() {
            Some(sources) => format!("{self}: {sources}"),
            None => self.to_string(),
        }
    }

    /// Render only the source chain, without this error's own message.
    #[must_use]
    pub fn source_report(&self) -> Option<String> {
        let mut source = self.source()?;
        let mut message = source.to_string();
        while let Some(next) = source.source() {
            message.push_str(": ");
            message.push_str(&next.to_string());
            source = next;
        }
        Some(message)
    }

    /// The status code of a rejected call.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// The error detail of a rejected call.
    #[must_use]
    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            Self::Rejected { detail, .. } => Some(detail),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Inner;

    #[test]
    fn should_report_full_source_chain() {
        let err = BackendError::Transport(Box::new(Outer(Inner)));
        assert_eq!(
            err.report(),
            "could not reach backend: outer: connection refused"
        );
    }

    #[test]
    fn should_expose_status_and_detail_only_when_rejected() {
        let rejected = BackendError::Rejected {
            status: 422,
            detail: ErrorDetail::Message("bad".to_string()),
        };
        assert_eq!(rejected.status(), Some(422));
        assert_eq!(rejected.detail().map(ErrorDetail::lines), Some(&["bad".to_string()][..]));

        let transport = BackendError::Transport(Box::new(Inner));
        assert_eq!(transport.status(), None);
        assert!(transport.detail().is_none());
    }

    #[test]
    fn should_render_source_chain_without_outer_message() {
        let err = BackendError::Transport(Box::new(Outer(Inner)));
        assert_eq!(
            err.source_report().as_deref(),
            Some("outer: connection refused")
        );
    }

    #[test]
    fn should_report_rejection_without_source() {
        let err = BackendError::Rejected {
            status: 500,
            detail: ErrorDetail::Message("boom".to_string()),
        };
        assert_eq!(err.report(), "backend responded with status 500");
        assert!(err.source_report().is_none());
    }
}
