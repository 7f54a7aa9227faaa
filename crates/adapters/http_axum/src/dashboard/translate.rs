//! Dashboard page for single-text translation.

use askama::Template;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use transdash_app::ports::TranslationBackend;
use transdash_domain::view::View;

use super::chrome::Chrome;
use super::notice::{self, Notice};
use crate::state::AppState;

/// Single translate page template.
#[derive(Template)]
#[template(path = "translate.html")]
pub struct TranslatePage {
    chrome: Chrome,
    text: String,
    language: String,
    notices: Vec<Notice>,
    output: Option<String>,
}

impl IntoResponse for TranslatePage {
    fn into_response(self) -> Response {
        super::render(&self)
    }
}

/// Form data for a single translation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TranslateForm {
    pub text: String,
    pub language: String,
}

/// `GET /translate`: empty form.
pub async fn show<B>(State(state): State<AppState<B>>) -> TranslatePage
where
    B: TranslationBackend + Send + Sync + 'static,
{
    TranslatePage {
        chrome: Chrome::load(&state.dashboard, View::SingleTranslate).await,
        text: String::new(),
        language: String::new(),
        notices: Vec::new(),
        output: None,
    }
}

/// `POST /translate`: translate and render the result in place.
pub async fn submit<B>(
    State(state): State<AppState<B>>,
    Form(form): Form<TranslateForm>,
) -> TranslatePage
where
    B: TranslationBackend + Send + Sync + 'static,
{
    let result = state
        .dashboard
        .translate(form.text.clone(), form.language.clone())
        .await;

    let (notices, output) = match result {
        Ok(translation) => (
            vec![Notice::success("Translation successful")],
            Some(translation.output_text),
        ),
        Err(err) => (notice::translation_failure(&err), None),
    };

    TranslatePage {
        chrome: Chrome::load(&state.dashboard, View::SingleTranslate).await,
        text: form.text,
        language: form.language,
        notices,
        output,
    }
}
