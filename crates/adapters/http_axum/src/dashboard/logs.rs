//! Dashboard page for the backend's translation log.

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use transdash_app::ports::TranslationBackend;
use transdash_domain::error::BackendError;
use transdash_domain::log::LogEntry;
use transdash_domain::view::View;

use super::chrome::Chrome;
use super::notice::Notice;
use crate::state::AppState;

/// Log page template.
#[derive(Template)]
#[template(path = "logs.html")]
pub struct LogsPage {
    chrome: Chrome,
    notices: Vec<Notice>,
    entries: Vec<LogEntry>,
}

impl IntoResponse for LogsPage {
    fn into_response(self) -> Response {
        super::render(&self)
    }
}

/// `GET /logs`: fetch the log when the view is opened, in backend order.
pub async fn show<B>(State(state): State<AppState<B>>) -> LogsPage
where
    B: TranslationBackend + Send + Sync + 'static,
{
    let (notices, entries) = match state.dashboard.fetch_logs().await {
        Ok(entries) if entries.is_empty() => (vec![Notice::info("No logs found.")], entries),
        Ok(entries) => (Vec::new(), entries),
        Err(BackendError::Rejected { .. }) => (
            vec![Notice::error("Could not fetch logs from backend.")],
            Vec::new(),
        ),
        Err(err) => (
            vec![Notice::error(format!("Failed to load logs: {}", err.report()))],
            Vec::new(),
        ),
    };

    LogsPage {
        chrome: Chrome::load(&state.dashboard, View::Logs).await,
        notices,
        entries,
    }
}
