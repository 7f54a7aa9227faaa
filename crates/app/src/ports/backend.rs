//! Backend port: the remote translation service.

use std::future::Future;

use transdash_domain::error::BackendError;
use transdash_domain::health::HealthStatus;
use transdash_domain::language::LanguageGuide;
use transdash_domain::log::LogEntry;
use transdash_domain::translation::{
    BulkTranslateRequest, BulkTranslation, TranslateRequest, Translation,
};

/// Client for the translation backend.
///
/// Each method issues exactly one request. Implementations must treat any
/// status other than `200 OK` as [`BackendError::Rejected`] and must not
/// retry.
pub trait TranslationBackend {
    /// `GET /supported-languages`
    fn supported_languages(
        &self,
    ) -> impl Future<Output = Result<LanguageGuide, BackendError>> + Send;

    /// `POST /translate`
    fn translate(
        &self,
        request: TranslateRequest,
    ) -> impl Future<Output = Result<Translation, BackendError>> + Send;

    /// `POST /translate/bulk`
    fn translate_bulk(
        &self,
        request: BulkTranslateRequest,
    ) -> impl Future<Output = Result<BulkTranslation, BackendError>> + Send;

    /// `GET /health`
    fn health(&self) -> impl Future<Output = Result<HealthStatus, BackendError>> + Send;

    /// `GET /logs`, in backend order.
    fn logs(&self) -> impl Future<Output = Result<Vec<LogEntry>, BackendError>> + Send;
}
