//! # transdash-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven/outbound port** that adapters must implement:
//!   - `TranslationBackend`: the five calls offered by the remote
//!     translation service
//! - Define the **driving/inbound** use-case struct:
//!   - `DashboardService`: owns the language guide and runs exactly one
//!     backend call per user action
//! - Orchestrate domain objects without knowing *how* the backend is reached
//!
//! ## Dependency rule
//! Depends on `transdash-domain` only (plus `tokio::sync` for the guide lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
