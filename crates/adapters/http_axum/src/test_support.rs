//! Stub backend and request helpers shared by the adapter's tests.

use std::future::Future;

use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;

use transdash_app::ports::TranslationBackend;
use transdash_app::services::dashboard_service::DashboardService;
use transdash_domain::detail::ErrorDetail;
use transdash_domain::error::BackendError;
use transdash_domain::health::HealthStatus;
use transdash_domain::language::LanguageGuide;
use transdash_domain::log::LogEntry;
use transdash_domain::translation::{
    BulkTranslateRequest, BulkTranslation, TranslateRequest, Translation,
};

use crate::state::AppState;

/// How the stub answers health, logs and language-guide calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Healthy,
    Down,
    Rejecting,
}

/// In-memory backend.
///
/// Translation calls are keyed on the destination language when healthy:
/// `xx` is rejected with a scalar detail, `multi` with a two-item list,
/// `short` drops the last bulk output.
pub(crate) struct StubBackend {
    pub mode: Mode,
    pub logs: Vec<LogEntry>,
}

impl StubBackend {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            logs: vec![
                LogEntry {
                    translated_at: "2024-05-01T10:00:00".into(),
                    original_text: "hello".into(),
                    translated_text: "bonjour".into(),
                    language: "fr".into(),
                },
                LogEntry {
                    translated_at: "2024-05-01T10:05:00".into(),
                    original_text: "thanks".into(),
                    translated_text: "gracias".into(),
                    language: "es".into(),
                },
            ],
        }
    }

    fn failure(&self) -> BackendError {
        match self.mode {
            Mode::Rejecting => BackendError::Rejected {
                status: 503,
                detail: ErrorDetail::Message("maintenance".into()),
            },
            Mode::Healthy | Mode::Down => BackendError::Transport(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }

    fn check_language(&self, language: &str) -> Result<(), BackendError> {
        if self.mode != Mode::Healthy {
            return Err(self.failure());
        }
        match language {
            "xx" => Err(BackendError::Rejected {
                status: 422,
                detail: ErrorDetail::Message("unsupported language code".into()),
            }),
            "multi" => Err(BackendError::Rejected {
                status: 422,
                detail: ErrorDetail::Messages(vec![
                    "text too long".into(),
                    "language not supported".into(),
                ]),
            }),
            _ => Ok(()),
        }
    }
}

impl TranslationBackend for StubBackend {
    fn supported_languages(
        &self,
    ) -> impl Future<Output = Result<LanguageGuide, BackendError>> + Send {
        let result = match self.mode {
            Mode::Healthy => Ok([("French", "fr"), ("Spanish", "es"), ("Tamil", "ta")]
                .into_iter()
                .collect()),
            Mode::Down | Mode::Rejecting => Err(self.failure()),
        };
        async { result }
    }

    fn translate(
        &self,
        request: TranslateRequest,
    ) -> impl Future<Output = Result<Translation, BackendError>> + Send {
        let result = self.check_language(&request.destination_language).map(|()| {
            let output_text = match request.input_text.as_str() {
                "hello" => "bonjour".to_string(),
                other => format!("[{}] {other}", request.destination_language),
            };
            Translation { output_text }
        });
        async { result }
    }

    fn translate_bulk(
        &self,
        request: BulkTranslateRequest,
    ) -> impl Future<Output = Result<BulkTranslation, BackendError>> + Send {
        let result = self.check_language(&request.destination_language).map(|()| {
            let mut output_texts: Vec<String> = request
                .input_texts
                .iter()
                .map(|text| text.to_uppercase())
                .collect();
            if request.destination_language == "short" {
                output_texts.pop();
            }
            BulkTranslation { output_texts }
        });
        async { result }
    }

    fn health(&self) -> impl Future<Output = Result<HealthStatus, BackendError>> + Send {
        let result = match self.mode {
            Mode::Healthy => Ok(HealthStatus {
                status: "ok".into(),
            }),
            Mode::Down | Mode::Rejecting => Err(self.failure()),
        };
        async { result }
    }

    fn logs(&self) -> impl Future<Output = Result<Vec<LogEntry>, BackendError>> + Send {
        let result = match self.mode {
            Mode::Healthy => Ok(self.logs.clone()),
            Mode::Down | Mode::Rejecting => Err(self.failure()),
        };
        async { result }
    }
}

/// State backed by `backend`, with the language guide loaded as at startup.
pub(crate) async fn state_with(backend: StubBackend) -> AppState<StubBackend> {
    let service = DashboardService::new(backend);
    service.load_language_guide().await;
    AppState::new(service)
}

pub(crate) async fn test_state(mode: Mode) -> AppState<StubBackend> {
    state_with(StubBackend::new(mode)).await
}

pub(crate) fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// `POST` with an `application/x-www-form-urlencoded` body.
pub(crate) fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub(crate) async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
