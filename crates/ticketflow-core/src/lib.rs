// Rust guideline compliant 2026-10-19

//! Ticketflow Core Library
//!
//! This crate provides the foundational components for the Ticketflow tracker:
//! - Data models (Ticket, Status, Topic, Priority, patches and drafts)
//! - FSM logic (status transitions and their denial reasons)
//! - Equality filters over tickets
//! - Storage (store trait, in-memory and JSONL stores)
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod filter;
pub mod fsm;
pub mod models;
pub mod storage;

pub use config::{Config, StorageBackend};
pub use error::{Error, Result};
pub use filter::TicketFilter;
pub use fsm::{validate_finalize, validate_transition, Denial};
pub use models::{
    NewTicket, Priority, Status, Ticket, TicketDraft, TicketId, TicketPatch, Topic, UserId,
};
pub use storage::{JsonlStore, MemoryStore, TicketStore};
