// Rust guideline compliant 2026-10-19

//! Core data models for Ticketflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Store-assigned ticket identifier.
pub type TicketId = u64;

/// Identifier of a requester or solver.
pub type UserId = i64;

/// Maximum size of a ticket description in bytes.
pub const MAX_DESCRIPTION_BYTES: usize = 64 * 1024;

/// Status of a ticket in the finite state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Ticket has been opened and is waiting for a solver.
    Created,
    /// Ticket is being worked on by its assignee.
    InProgress,
    /// Ticket is done. Terminal.
    Completed,
}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Status; 3] = [Status::Created, Status::InProgress, Status::Completed];

    /// Returns the wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Created => "created",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
        }
    }

    /// Returns true if no further change is permitted from this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Completed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject area of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Billing,
    Bug,
    Feature,
    Other,
}

impl Topic {
    /// Every topic.
    pub const ALL: [Topic; 4] = [Topic::Billing, Topic::Bug, Topic::Feature, Topic::Other];

    /// Returns the wire name of the topic.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Topic::Billing => "billing",
            Topic::Bug => "bug",
            Topic::Feature => "feature",
            Topic::Other => "other",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Every priority, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Returns the wire name of the priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ticket represents one support request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Store-assigned identifier.
    pub id: TicketId,
    /// User who opened the ticket.
    pub requester_id: UserId,
    /// Solver currently attached to the ticket.
    #[serde(default)]
    pub assignee_id: Option<UserId>,
    /// Subject area.
    pub topic: Topic,
    /// Urgency.
    pub priority: Priority,
    /// Current status in the FSM.
    pub status: Status,
    /// Free-text description of the request.
    pub description: String,
    /// Creation time, managed by the store.
    pub created_at: DateTime<Utc>,
    /// Last modification time, managed by the store.
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Returns true if a solver is attached.
    #[must_use]
    pub fn has_assignee(&self) -> bool {
        self.assignee_id.is_some()
    }

    /// Validates a stored ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The description is empty or exceeds the size limit
    /// - The ticket is `in_progress` without an assignee
    pub fn validate(&self) -> crate::Result<()> {
        validate_description(&self.description)?;

        if self.status == Status::InProgress && self.assignee_id.is_none() {
            return Err(crate::Error::InvalidTicket(format!(
                "Ticket {} is {} but has no assignee",
                self.id, self.status
            )));
        }

        Ok(())
    }
}

/// Fields accepted when opening a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTicket {
    /// User opening the ticket.
    pub requester_id: UserId,
    /// Optional solver to pre-assign.
    #[serde(default)]
    pub assignee_id: Option<UserId>,
    /// Subject area.
    pub topic: Topic,
    /// Urgency.
    pub priority: Priority,
    /// Free-text description.
    pub description: String,
}

impl NewTicket {
    /// Validates the input fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the description is blank or too large.
    pub fn validate(&self) -> crate::Result<()> {
        validate_description(&self.description)
    }

    /// Converts the input into a draft with the initial `created` status.
    #[must_use]
    pub fn into_draft(self) -> TicketDraft {
        TicketDraft {
            requester_id: self.requester_id,
            assignee_id: self.assignee_id,
            topic: self.topic,
            priority: self.priority,
            status: Status::Created,
            description: self.description,
        }
    }
}

/// A ticket that has not yet been given an id or timestamps by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub requester_id: UserId,
    pub assignee_id: Option<UserId>,
    pub topic: Topic,
    pub priority: Priority,
    pub status: Status,
    pub description: String,
}

impl TicketDraft {
    /// Materialises the draft with store-managed fields.
    #[must_use]
    pub fn into_ticket(self, id: TicketId, now: DateTime<Utc>) -> Ticket {
        Ticket {
            id,
            requester_id: self.requester_id,
            assignee_id: self.assignee_id,
            topic: self.topic,
            priority: self.priority,
            status: self.status,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Requested change to a ticket's status and assignee.
///
/// `assignee_id` distinguishes an omitted field (`None`, keep the current
/// assignee) from an explicit `null` (`Some(None)`, clear it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPatch {
    /// New assignee, or `Some(None)` to unassign.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub assignee_id: Option<Option<UserId>>,
    /// Target status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl TicketPatch {
    /// Patch that only moves the ticket to `status`.
    #[must_use]
    pub fn status(status: Status) -> Self {
        Self {
            assignee_id: None,
            status: Some(status),
        }
    }

    /// Sets the assignee on the patch.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: Option<UserId>) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }
}

fn deserialize_present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn validate_description(description: &str) -> crate::Result<()> {
    if description.trim().is_empty() {
        return Err(crate::Error::InvalidTicket(
            "Description cannot be empty".to_string(),
        ));
    }

    if description.len() > MAX_DESCRIPTION_BYTES {
        return Err(crate::Error::InvalidTicket(format!(
            "Description exceeds {} bytes",
            MAX_DESCRIPTION_BYTES
        )));
    }

    Ok(())
}
