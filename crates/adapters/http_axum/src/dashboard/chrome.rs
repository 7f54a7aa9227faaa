//! Page chrome: side navigation and the supported-languages panel shared
//! by every view.

use transdash_app::ports::TranslationBackend;
use transdash_app::services::dashboard_service::{DashboardService, LanguageGuideState};
use transdash_domain::language::Language;
use transdash_domain::translation::MAX_INPUT_CHARS;
use transdash_domain::view::View;

use super::notice::{self, Notice};

/// Side-panel link.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Everything `base.html` needs besides the view's own content.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub title: &'static str,
    pub nav: Vec<NavItem>,
    pub languages: Vec<Language>,
    pub guide_notice: Option<Notice>,
    /// Where the reload form sends the user back to.
    pub return_to: &'static str,
    pub max_chars: usize,
}

impl Chrome {
    /// Chrome for `active`, reading the current language guide.
    pub async fn load<B>(dashboard: &DashboardService<B>, active: View) -> Self
    where
        B: TranslationBackend + Sync,
    {
        Self::new(active, dashboard.language_guide().await)
    }

    #[must_use]
    pub fn new(active: View, guide: LanguageGuideState) -> Self {
        let nav = View::ALL
            .iter()
            .map(|&view| NavItem {
                label: view.label(),
                path: view.path(),
                active: view == active,
            })
            .collect();

        Self {
            title: active.title(),
            nav,
            languages: guide.guide.iter().cloned().collect(),
            guide_notice: guide.failure.as_ref().map(notice::guide_failure),
            return_to: active.path(),
            max_chars: MAX_INPUT_CHARS,
        }
    }
}
