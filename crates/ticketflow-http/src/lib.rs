// Rust guideline compliant 2026-10-19

//! REST API server for Ticketflow.
//!
//! Exposes the ticket service over HTTP with axum, traces requests, applies
//! an optional permissive CORS layer and can serve a static front-end bundle.

pub mod error;
pub mod routes;
pub mod server;

pub use error::{status_for, ApiError};
pub use routes::{router, AppState};
pub use server::{parse_log_level, run, ServeArgs, ServerError, ServerOptions};
