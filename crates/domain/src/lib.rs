//! # transdash-domain
//!
//! Pure domain model for the transdash translation dashboard.
//!
//! ## Responsibilities
//! - Error conventions for calls to the translation backend
//! - Define the **language guide** (display name → language code)
//! - Define **translation** request and response payloads, plus the bulk
//!   line splitting and positional pairing rules
//! - Define the backend **error detail** (one message or a list of messages)
//! - Define **log entries** and **health status** as returned by the backend
//! - Define the dashboard **views** selectable from the side panel
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The backend boundary is expressed as a trait in the `app` crate (port).

pub mod error;

pub mod detail;
pub mod health;
pub mod language;
pub mod log;
pub mod translation;
pub mod view;

mod json;
