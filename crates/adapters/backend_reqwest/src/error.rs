//! reqwest adapter error types.

use transdash_domain::error::BackendError;

/// Errors specific to the reqwest backend adapter.
#[derive(Debug, thiserror::Error)]
pub enum ReqwestBackendError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// Sending the request or reading the response failed.
    #[error("HTTP request failed")]
    Request(#[source] reqwest::Error),

    /// A `200 OK` body did not match the expected shape.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),
}

impl From<ReqwestBackendError> for BackendError {
    fn from(err: ReqwestBackendError) -> Self {
        match err {
            ReqwestBackendError::Build(inner) | ReqwestBackendError::Request(inner) => {
                Self::Transport(Box::new(inner))
            }
            ReqwestBackendError::Decode(inner) => Self::Decode(Box::new(inner)),
        }
    }
}
