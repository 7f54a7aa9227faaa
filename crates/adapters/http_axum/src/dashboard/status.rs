//! Dashboard page for the backend health check.

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use transdash_app::ports::TranslationBackend;
use transdash_domain::error::BackendError;
use transdash_domain::view::View;

use super::chrome::Chrome;
use super::notice::Notice;
use crate::state::AppState;

/// Health check page template.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusPage {
    chrome: Chrome,
    notices: Vec<Notice>,
}

impl IntoResponse for StatusPage {
    fn into_response(self) -> Response {
        super::render(&self)
    }
}

/// `GET /status`: query backend health when the view is opened.
pub async fn show<B>(State(state): State<AppState<B>>) -> StatusPage
where
    B: TranslationBackend + Send + Sync + 'static,
{
    let notice = match state.dashboard.check_health().await {
        Ok(health) => Notice::success(format!("Service is healthy: {}", health.status)),
        Err(BackendError::Rejected { .. }) => Notice::error("Health check failed."),
        Err(err) => {
            let reason = err.source_report().unwrap_or_else(|| err.report());
            Notice::error(format!("Could not connect to backend: {reason}"))
        }
    };

    StatusPage {
        chrome: Chrome::load(&state.dashboard, View::HealthCheck).await,
        notices: vec![notice],
    }
}
