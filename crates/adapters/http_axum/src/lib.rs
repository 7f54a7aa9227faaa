//! # transdash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: pure HTML forms posting back to the server
//! - Map form submissions into `DashboardService` calls (driving adapter)
//! - Render each call's `Result` as success output or inline error lines
//!
//! ## Dashboard approach
//! - Every page is rendered server-side as complete HTML from askama templates.
//! - The side panel selects one of four views; exactly one is active per page.
//! - Translation forms POST to their own view and the result is rendered in
//!   the response. Nothing is stored between requests.
//! - Backend failures never turn into HTTP errors of the dashboard itself.
//!
//! ## Dependency rule
//! Depends on `transdash-app` (for the port trait and the service) and
//! `transdash-domain` (for payload types). Never leaks axum types into the
//! domain.

pub mod dashboard;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
