//! Dashboard page for bulk translation.

use askama::Template;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use transdash_app::ports::TranslationBackend;
use transdash_domain::translation::TranslatedPair;
use transdash_domain::view::View;

use super::chrome::Chrome;
use super::notice::{self, Notice};
use crate::state::AppState;

/// Bulk translate page template.
#[derive(Template)]
#[template(path = "bulk.html")]
pub struct BulkPage {
    chrome: Chrome,
    text: String,
    language: String,
    notices: Vec<Notice>,
    pairs: Vec<TranslatedPair>,
}

impl IntoResponse for BulkPage {
    fn into_response(self) -> Response {
        super::render(&self)
    }
}

/// Form data for a bulk translation. `text` holds one sentence per line.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BulkForm {
    pub text: String,
    pub language: String,
}

/// `GET /bulk`: empty form.
pub async fn show<B>(State(state): State<AppState<B>>) -> BulkPage
where
    B: TranslationBackend + Send + Sync + 'static,
{
    BulkPage {
        chrome: Chrome::load(&state.dashboard, View::BulkTranslate).await,
        text: String::new(),
        language: String::new(),
        notices: Vec::new(),
        pairs: Vec::new(),
    }
}

/// `POST /bulk`: translate every non-blank line and render the pairs.
pub async fn submit<B>(
    State(state): State<AppState<B>>,
    Form(form): Form<BulkForm>,
) -> BulkPage
where
    B: TranslationBackend + Send + Sync + 'static,
{
    let result = state
        .dashboard
        .translate_bulk(&form.text, form.language.clone())
        .await;

    let (notices, pairs) = match result {
        Ok(pairs) => (vec![Notice::success("Bulk translation results:")], pairs),
        Err(err) => (notice::translation_failure(&err), Vec::new()),
    };

    BulkPage {
        chrome: Chrome::load(&state.dashboard, View::BulkTranslate).await,
        text: form.text,
        language: form.language,
        notices,
        pairs,
    }
}
