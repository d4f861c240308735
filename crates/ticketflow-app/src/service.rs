// Rust guideline compliant 2026-10-19

//! Ticket service: the only writer of stored tickets.
//!
//! Every mutation follows the same shape: fetch a snapshot, compute the next
//! snapshot through the state machine, then persist it. A rejected change
//! never reaches the store.

use crate::error::{AppError, Result};
use std::sync::Arc;
use ticketflow_core::{
    fsm, Denial, Error as CoreError, NewTicket, Status, Ticket, TicketFilter, TicketId,
    TicketPatch, TicketStore,
};

/// Computes the ticket an update would produce, without touching storage.
///
/// `next_status` is the patch status or the current one; `next_assignee` is
/// the patch assignee when the field was supplied (including an explicit
/// clear) or the current one.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTransition`] if the ticket is completed or the
/// state machine rejects the change.
pub fn plan_update(current: &Ticket, patch: &TicketPatch) -> ticketflow_core::Result<Ticket> {
    if current.status.is_terminal() {
        return Err(CoreError::InvalidTransition(Denial::CompletedIsTerminal));
    }

    let next_status = patch.status.unwrap_or(current.status);
    let next_assignee = match patch.assignee_id {
        Some(assignee_id) => assignee_id,
        None => current.assignee_id,
    };

    fsm::validate_transition(current.status, next_status, next_assignee.is_some())?;

    Ok(Ticket {
        status: next_status,
        assignee_id: next_assignee,
        ..current.clone()
    })
}

/// Orchestrates store access around the state machine.
#[derive(Clone)]
pub struct TicketService {
    store: Arc<dyn TicketStore>,
    read_only: bool,
}

impl TicketService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self {
            store,
            read_only: false,
        }
    }

    /// Enables or disables read-only mode.
    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Returns whether mutations are refused.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn TicketStore> {
        &self.store
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(AppError::ReadOnly);
        }
        Ok(())
    }

    /// Opens a new ticket in the `created` status.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The service is read-only
    /// - The input fails validation
    /// - The store cannot be written
    pub fn create(&self, input: NewTicket) -> Result<Ticket> {
        self.ensure_writable()?;
        input.validate()?;

        let ticket = self.store.insert(input.into_draft())?;
        tracing::info!(
            ticket_id = ticket.id,
            requester_id = ticket.requester_id,
            topic = %ticket.topic,
            priority = %ticket.priority,
            "ticket created"
        );
        Ok(ticket)
    }

    /// Loads a ticket by id.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the ticket does not exist.
    pub fn get(&self, id: TicketId) -> Result<Ticket> {
        Ok(self.store.get(id)?)
    }

    /// Lists tickets matching the filter, ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>> {
        tracing::debug!(?filter, "listing tickets");
        Ok(self.store.list(filter)?)
    }

    /// Applies a status and/or assignee change.
    ///
    /// A patch that leaves the ticket as it is succeeds without writing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The service is read-only
    /// - The ticket does not exist
    /// - The ticket is completed or the transition is rejected
    /// - The store cannot be written
    pub fn update(&self, id: TicketId, patch: TicketPatch) -> Result<Ticket> {
        self.ensure_writable()?;
        let current = self.store.get(id)?;

        let next = plan_update(&current, &patch).map_err(|err| {
            log_denial(id, &err);
            err
        })?;

        if next == current {
            tracing::debug!(ticket_id = id, "update is a no-op");
            return Ok(current);
        }

        let stored = self.store.replace(&next)?;
        tracing::info!(
            ticket_id = id,
            from = %current.status,
            to = %stored.status,
            assignee_id = ?stored.assignee_id,
            "ticket updated"
        );
        Ok(stored)
    }

    /// Moves an `in_progress` ticket to `completed`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The service is read-only
    /// - The ticket does not exist
    /// - The ticket is not exactly `in_progress`
    /// - The store cannot be written
    pub fn finalize(&self, id: TicketId) -> Result<Ticket> {
        self.ensure_writable()?;
        let current = self.store.get(id)?;

        fsm::validate_finalize(current.status).map_err(|err| {
            log_denial(id, &err);
            err
        })?;

        let next = Ticket {
            status: Status::Completed,
            ..current
        };
        let stored = self.store.replace(&next)?;
        tracing::info!(ticket_id = id, "ticket finalized");
        Ok(stored)
    }
}

fn log_denial(id: TicketId, err: &CoreError) {
    if let CoreError::InvalidTransition(denial) = err {
        tracing::warn!(ticket_id = id, reason = denial.code(), "change rejected");
    }
}
