// Rust guideline compliant 2026-10-19

//! Shared application services for Ticketflow.
//!
//! This crate sits between the core library and the outer surfaces (HTTP
//! server, CLI). It owns the ticket service, data-directory discovery,
//! list-option parsing, the seed generator, and standardized response
//! envelopes.

pub mod data_dir;
pub mod error;
pub mod list;
pub mod response;
pub mod seed;
pub mod service;

pub use data_dir::{DataDir, DATA_DIR_NAME};
pub use error::{AppError, ErrorCode, Result};
pub use list::{parse_priority, parse_status, parse_topic, ListOptions};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use seed::{seed_store, SeedOptions};
pub use service::{plan_update, TicketService};
