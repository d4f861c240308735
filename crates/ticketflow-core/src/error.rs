// Rust guideline compliant 2026-10-19

//! Error types for the Ticketflow core library.

use crate::fsm::Denial;
use crate::models::TicketId;
use thiserror::Error;

/// Result type alias for Ticketflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Ticketflow operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid ticket data.
    #[error("Invalid ticket: {0}")]
    InvalidTicket(String),

    /// Ticket not found.
    #[error("Ticket {0} not found")]
    NotFound(TicketId),

    /// The requested change was rejected by the state machine.
    ///
    /// Displays the bare reason string so callers can surface it verbatim.
    #[error("{0}")]
    InvalidTransition(Denial),

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    Config(String),
}
