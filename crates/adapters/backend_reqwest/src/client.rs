//! `TranslationBackend` implementation over HTTP.

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use transdash_app::ports::TranslationBackend;
use transdash_domain::detail::ErrorDetail;
use transdash_domain::error::BackendError;
use transdash_domain::health::HealthStatus;
use transdash_domain::language::{LanguageGuide, SupportedLanguages};
use transdash_domain::log::LogEntry;
use transdash_domain::translation::{
    BulkTranslateRequest, BulkTranslation, TranslateRequest, Translation,
};

use crate::config::BackendConfig;
use crate::error::ReqwestBackendError;

/// Translation backend reached over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: Client,
    base_url: String,
}

impl ReqwestBackend {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ReqwestBackendError::Build`] if the TLS backend or the
    /// underlying client cannot be initialised.
    pub fn new(config: &BackendConfig) -> Result<Self, ReqwestBackendError> {
        let mut builder =
            Client::builder().user_agent(concat!("transdash/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ReqwestBackendError::Build)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL endpoint paths are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        tracing::debug!(path, "GET backend");
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(ReqwestBackendError::Request)?;
        read_json(response).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        tracing::debug!(path, "POST backend");
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ReqwestBackendError::Request)?;
        read_json(response).await
    }
}

/// Decode a `200 OK` body, or unwrap the error detail of any other status.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(ReqwestBackendError::Request)?;

    if status != StatusCode::OK {
        let status = status.as_u16();
        return Err(BackendError::Rejected {
            status,
            detail: ErrorDetail::from_body(status, &body),
        });
    }

    Ok(serde_json::from_slice(&body).map_err(ReqwestBackendError::Decode)?)
}

impl TranslationBackend for ReqwestBackend {
    async fn supported_languages(&self) -> Result<LanguageGuide, BackendError> {
        let body: SupportedLanguages = self.get("/supported-languages").await?;
        Ok(body.language_guide)
    }

    async fn translate(&self, request: TranslateRequest) -> Result<Translation, BackendError> {
        self.post("/translate", &request).await
    }

    async fn translate_bulk(
        &self,
        request: BulkTranslateRequest,
    ) -> Result<BulkTranslation, BackendError> {
        self.post("/translate/bulk", &request).await
    }

    async fn health(&self) -> Result<HealthStatus, BackendError> {
        self.get("/health").await
    }

    async fn logs(&self) -> Result<Vec<LogEntry>, BackendError> {
        let logs: Option<Vec<LogEntry>> = self.get("/logs").await?;
        Ok(logs.unwrap_or_default())
    }
}
