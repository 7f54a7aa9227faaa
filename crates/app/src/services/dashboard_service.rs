//! Dashboard service: the controller behind the four dashboard views.
//!
//! Each user action maps to exactly one backend call and returns an explicit
//! `Result`. Rendering the outcome is left to the driving adapter.

use tokio::sync::RwLock;

use transdash_domain::error::BackendError;
use transdash_domain::health::HealthStatus;
use transdash_domain::language::LanguageGuide;
use transdash_domain::log::LogEntry;
use transdash_domain::translation::{
    BulkTranslateRequest, TranslateRequest, TranslatedPair, Translation, pair_outputs,
    split_lines,
};

use crate::ports::TranslationBackend;

/// Why the language guide could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideLoadFailure {
    /// The backend answered with a non-success status.
    Rejected { status: u16 },
    /// The backend could not be reached or sent an unreadable body.
    Unreachable { reason: String },
}

/// The language guide as last loaded, with the failure of that load if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageGuideState {
    pub guide: LanguageGuide,
    pub failure: Option<GuideLoadFailure>,
}

/// Application service behind the dashboard.
pub struct DashboardService<B> {
    backend: B,
    guide: RwLock<LanguageGuideState>,
}

impl<B: TranslationBackend + Sync> DashboardService<B> {
    /// Create a new service with an empty language guide.
    ///
    /// Call [`load_language_guide`](Self::load_language_guide) once at startup.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            guide: RwLock::new(LanguageGuideState::default()),
        }
    }

    /// Fetch the language guide from the backend and keep it.
    ///
    /// Never fails: on any error the stored guide is emptied and the failure
    /// is recorded so the dashboard can show it. Other operations keep
    /// working regardless.
    #[tracing::instrument(skip(self))]
    pub async fn load_language_guide(&self) -> LanguageGuideState {
        let state = match self.backend.supported_languages().await {
            Ok(guide) => {
                tracing::debug!(languages = guide.len(), "language guide loaded");
                LanguageGuideState {
                    guide,
                    failure: None,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err.report(), "failed to load language guide");
                let failure = match err.status() {
                    Some(status) => GuideLoadFailure::Rejected { status },
                    None => GuideLoadFailure::Unreachable {
                        reason: err.report(),
                    },
                };
                LanguageGuideState {
                    guide: LanguageGuide::default(),
                    failure: Some(failure),
                }
            }
        };

        let mut guard = self.guide.write().await;
        guard.clone_from(&state);
        state
    }

    /// The language guide as last loaded.
    pub async fn language_guide(&self) -> LanguageGuideState {
        self.guide.read().await.clone()
    }

    /// Translate a single text.
    ///
    /// The text is sent as-is; length and language are validated by the
    /// backend only.
    ///
    /// # Errors
    ///
    /// Returns the [`BackendError`] of the underlying call.
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn translate(
        &self,
        text: String,
        language: String,
    ) -> Result<Translation, BackendError> {
        let request = TranslateRequest {
            input_text: text,
            destination_language: language,
        };
        let result = self.backend.translate(request).await;
        log_outcome("translate", &result);
        result
    }

    /// Translate every non-blank line of `raw`.
    ///
    /// Inputs are paired with outputs by position, truncated to the shorter
    /// of the two.
    ///
    /// # Errors
    ///
    /// Returns the [`BackendError`] of the underlying call. A short
    /// `output_texts` sequence is not an error.
    #[tracing::instrument(skip(self, raw))]
    pub async fn translate_bulk(
        &self,
        raw: &str,
        language: String,
    ) -> Result<Vec<TranslatedPair>, BackendError> {
        let inputs = split_lines(raw);
        let request = BulkTranslateRequest {
            input_texts: inputs.clone(),
            destination_language: language,
        };
        let result = self.backend.translate_bulk(request).await;
        log_outcome("translate_bulk", &result);
        let translation = result?;

        if translation.output_texts.len() < inputs.len() {
            tracing::debug!(
                inputs = inputs.len(),
                outputs = translation.output_texts.len(),
                "backend returned fewer outputs than inputs"
            );
        }
        Ok(pair_outputs(&inputs, translation.output_texts))
    }

    /// Query backend health.
    ///
    /// # Errors
    ///
    /// Returns the [`BackendError`] of the underlying call.
    #[tracing::instrument(skip(self))]
    pub async fn check_health(&self) -> Result<HealthStatus, BackendError> {
        let result = self.backend.health().await;
        log_outcome("health", &result);
        result
    }

    /// Fetch translation logs in backend order.
    ///
    /// # Errors
    ///
    /// Returns the [`BackendError`] of the underlying call.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_logs(&self) -> Result<Vec<LogEntry>, BackendError> {
        let result = self.backend.logs().await;
        log_outcome("logs", &result);
        result
    }
}

fn log_outcome<T>(operation: &'static str, result: &Result<T, BackendError>) {
    match result {
        Ok(_) => tracing::debug!(operation, "backend call succeeded"),
        Err(err) => tracing::warn!(operation, error = %err.report(), "backend call failed"),
    }
}
