//! # transdashd: translation dashboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` logging
//! - Construct the HTTP backend client (driven adapter)
//! - Construct the dashboard service and load the language guide once
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use transdash_adapter_backend_reqwest::ReqwestBackend;
use transdash_adapter_http_axum::router;
use transdash_adapter_http_axum::state::AppState;
use transdash_app::services::dashboard_service::DashboardService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Backend
    let backend = ReqwestBackend::new(&config.backend)?;
    tracing::info!(base_url = backend.base_url(), "using translation backend");

    // Services
    let dashboard = DashboardService::new(backend);
    let guide = dashboard.load_language_guide().await;
    match guide.failure {
        Some(failure) => {
            tracing::warn!(?failure, "starting without supported languages");
        }
        None => tracing::info!(languages = guide.guide.len(), "supported languages loaded"),
    }

    // HTTP
    let app = router::build(AppState::new(dashboard));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("transdashd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("transdashd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
