// Rust guideline compliant 2026-10-19

//! Equality filters over tickets.

use crate::{Priority, Status, Ticket, Topic, UserId};
use rayon::prelude::*;

/// Above this many tickets the predicate runs on the rayon pool.
const PARALLEL_THRESHOLD: usize = 1_000;

/// AND-combined equality filters. An absent field matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketFilter {
    /// Filter by status.
    pub status: Option<Status>,
    /// Filter by requester.
    pub requester_id: Option<UserId>,
    /// Filter by assignee.
    pub assignee_id: Option<UserId>,
    /// Filter by topic.
    pub topic: Option<Topic>,
    /// Filter by priority.
    pub priority: Option<Priority>,
}

impl TicketFilter {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true if the ticket satisfies every set field.
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(status) = self.status {
            if ticket.status != status {
                return false;
            }
        }

        if let Some(requester_id) = self.requester_id {
            if ticket.requester_id != requester_id {
                return false;
            }
        }

        if let Some(assignee_id) = self.assignee_id {
            if ticket.assignee_id != Some(assignee_id) {
                return false;
            }
        }

        if let Some(topic) = self.topic {
            if ticket.topic != topic {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if ticket.priority != priority {
                return false;
            }
        }

        true
    }

    /// Keeps the matching tickets, ordered by ascending id.
    #[must_use]
    pub fn apply(&self, tickets: Vec<Ticket>) -> Vec<Ticket> {
        let mut kept: Vec<Ticket> = if tickets.len() >= PARALLEL_THRESHOLD {
            tickets.into_par_iter().filter(|t| self.matches(t)).collect()
        } else {
            tickets.into_iter().filter(|t| self.matches(t)).collect()
        };
        kept.sort_by_key(|t| t.id);
        kept
    }
}
