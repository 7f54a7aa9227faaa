//! Server-side rendered HTML dashboard (no JavaScript).

pub mod bulk;
pub mod chrome;
pub mod languages;
pub mod logs;
pub mod notice;
pub mod status;
pub mod translate;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};

use transdash_app::ports::TranslationBackend;
use transdash_domain::view::View;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: TranslationBackend + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route(
            View::SingleTranslate.path(),
            get(translate::show::<B>).post(translate::submit::<B>),
        )
        .route(
            View::BulkTranslate.path(),
            get(bulk::show::<B>).post(bulk::submit::<B>),
        )
        .route(View::HealthCheck.path(), get(status::show::<B>))
        .route(View::Logs.path(), get(logs::show::<B>))
        .route("/languages/reload", post(languages::reload::<B>))
}

/// `GET /`: land on the first view of the side panel.
async fn index() -> Redirect {
    Redirect::to(View::SingleTranslate.path())
}

/// Render a page template into an HTML response.
pub(crate) fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render dashboard template");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to render page".to_string(),
            )
                .into_response()
        }
    }
}
