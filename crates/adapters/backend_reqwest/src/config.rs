//! Backend connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where the translation backend lives and how to talk to it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// Overall per-request timeout in seconds. `None` keeps reqwest's
    /// default (no timeout).
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    /// The configured timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: None,
        }
    }
}
