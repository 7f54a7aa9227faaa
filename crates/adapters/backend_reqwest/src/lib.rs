//! # transdash-adapter-backend-reqwest
//!
//! HTTP client for the translation backend, built on
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `TranslationBackend` port defined in `transdash-app::ports`
//! - Own the single `reqwest::Client` (and thus the connection pool)
//! - Treat every status other than `200 OK` as a rejection and unwrap its
//!   `detail` field
//! - Decode success bodies permissively (missing fields become empty values)
//!
//! ## Dependency rule
//! Depends on `transdash-app` (for the port trait) and `transdash-domain`
//! (for payload types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod client;
pub mod config;
pub mod error;

pub use client::ReqwestBackend;
pub use config::BackendConfig;
pub use error::ReqwestBackendError;
