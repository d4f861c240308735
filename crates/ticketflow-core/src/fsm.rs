// Rust guideline compliant 2026-10-19

//! Finite State Machine module for status transitions.
//!
//! Tickets move strictly forward:
//!
//! - Created → Created (no-op)
//! - Created → InProgress (only with an assignee)
//! - InProgress → InProgress (only with an assignee)
//! - InProgress → Completed
//!
//! Completed is terminal. Every other pair is denied with a [`Denial`]
//! whose reason string is user-visible.

use crate::{Error, Result, Status};
use serde::Serialize;
use std::fmt;

/// Why a requested change was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Denial {
    /// Created → InProgress without an assignee.
    AssigneeRequiredToStart,
    /// Created → Completed.
    SkipsInProgress,
    /// InProgress → InProgress without an assignee.
    InProgressRequiresAssignee,
    /// InProgress → Created.
    BackwardTransition,
    /// Any change requested on a completed ticket.
    CompletedIsTerminal,
    /// Finalize requested on a ticket that is not in progress.
    FinalizeRequiresInProgress,
}

impl Denial {
    /// Returns the user-visible reason string.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Denial::AssigneeRequiredToStart => "assignee required to start progress",
            Denial::SkipsInProgress => "must pass through in_progress before completed",
            Denial::InProgressRequiresAssignee => "in_progress requires an assignee",
            Denial::BackwardTransition => "invalid status transition",
            Denial::CompletedIsTerminal => "completed tickets cannot change",
            Denial::FinalizeRequiresInProgress => "finalization only allowed from in_progress",
        }
    }

    /// Returns a stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Denial::AssigneeRequiredToStart => "assignee_required_to_start",
            Denial::SkipsInProgress => "skips_in_progress",
            Denial::InProgressRequiresAssignee => "in_progress_requires_assignee",
            Denial::BackwardTransition => "backward_transition",
            Denial::CompletedIsTerminal => "completed_is_terminal",
            Denial::FinalizeRequiresInProgress => "finalize_requires_in_progress",
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl Status {
    /// Checks if a transition to the target status is valid.
    ///
    /// Same-status requests are confirmations rather than transitions, but
    /// `in_progress` is still re-checked for an assignee.
    ///
    /// # Arguments
    ///
    /// * `target` - The status requested
    /// * `assignee_present` - Whether the ticket will have an assignee afterwards
    ///
    /// # Errors
    ///
    /// Returns the [`Denial`] explaining the rejection.
    pub fn can_transition_to(
        self,
        target: Status,
        assignee_present: bool,
    ) -> std::result::Result<(), Denial> {
        match (self, target) {
            (Status::Completed, _) => Err(Denial::CompletedIsTerminal),
            (Status::Created, Status::Created) => Ok(()),
            (Status::Created, Status::InProgress) => {
                if assignee_present {
                    Ok(())
                } else {
                    Err(Denial::AssigneeRequiredToStart)
                }
            }
            (Status::Created, Status::Completed) => Err(Denial::SkipsInProgress),
            (Status::InProgress, Status::InProgress) => {
                if assignee_present {
                    Ok(())
                } else {
                    Err(Denial::InProgressRequiresAssignee)
                }
            }
            (Status::InProgress, Status::Completed) => Ok(()),
            (Status::InProgress, Status::Created) => Err(Denial::BackwardTransition),
        }
    }

    /// Returns the statuses reachable from this one, including itself when
    /// the confirmation would be accepted.
    #[must_use]
    pub fn valid_transitions(self, assignee_present: bool) -> Vec<Status> {
        Status::ALL
            .into_iter()
            .filter(|target| self.can_transition_to(*target, assignee_present).is_ok())
            .collect()
    }
}

/// Validates a requested status change.
///
/// # Arguments
///
/// * `current` - The stored status
/// * `proposed` - The requested status
/// * `assignee_present` - Whether the ticket will have an assignee afterwards
///
/// # Errors
///
/// Returns [`Error::InvalidTransition`] carrying the denial reason.
pub fn validate_transition(current: Status, proposed: Status, assignee_present: bool) -> Result<()> {
    current
        .can_transition_to(proposed, assignee_present)
        .map_err(Error::InvalidTransition)
}

/// Validates that a ticket in `current` may be finalized.
///
/// # Errors
///
/// Returns [`Denial::FinalizeRequiresInProgress`] unless `current` is
/// exactly `in_progress`.
pub fn validate_finalize(current: Status) -> Result<()> {
    if current == Status::InProgress {
        Ok(())
    } else {
        Err(Error::InvalidTransition(Denial::FinalizeRequiresInProgress))
    }
}
