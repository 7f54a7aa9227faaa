//! Shared application state for axum handlers.

use std::sync::Arc;

use transdash_app::ports::TranslationBackend;
use transdash_app::services::dashboard_service::DashboardService;

/// Application state shared across all axum handlers.
///
/// Generic over the backend type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the backend itself does not need to be
/// `Clone`: only the `Arc` wrapper is cloned.
pub struct AppState<B> {
    /// Dashboard controller.
    pub dashboard: Arc<DashboardService<B>>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            dashboard: Arc::clone(&self.dashboard),
        }
    }
}

impl<B> AppState<B>
where
    B: TranslationBackend + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(dashboard: DashboardService<B>) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}
