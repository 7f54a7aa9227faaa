//! Language guide reload action.

use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use transdash_app::ports::TranslationBackend;
use transdash_domain::view::View;

use crate::state::AppState;

/// Form data for the reload button.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReloadForm {
    /// Path of the view the button was pressed on.
    pub return_to: String,
}

/// Response from the reload handler (PRG pattern).
pub enum ReloadResponse {
    /// Redirect back to the originating view.
    Redirect(Redirect),
}

impl IntoResponse for ReloadResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

/// `POST /languages/reload`: fetch the language guide again.
///
/// Only dashboard view paths are accepted as redirect targets; anything else
/// lands on the first view.
pub async fn reload<B>(
    State(state): State<AppState<B>>,
    Form(form): Form<ReloadForm>,
) -> ReloadResponse
where
    B: TranslationBackend + Send + Sync + 'static,
{
    state.dashboard.load_language_guide().await;

    let target = View::ALL
        .iter()
        .map(|view| view.path())
        .find(|path| *path == form.return_to)
        .unwrap_or(View::SingleTranslate.path());

    ReloadResponse::Redirect(Redirect::to(target))
}
