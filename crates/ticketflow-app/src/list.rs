// Rust guideline compliant 2026-10-19

//! Parsing of raw list options into ticket filters.

use crate::error::{AppError, Result};
use serde::Deserialize;
use ticketflow_core::{Priority, Status, TicketFilter, Topic, UserId};

/// Raw list options as received from a query string or CLI flags.
///
/// Values stay textual until [`ListOptions::into_filter`] so that bad input
/// becomes an `invalid_input` error instead of a framework rejection. Empty
/// values are treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    /// Filter by status.
    pub status: Option<String>,
    /// Filter by requester id.
    pub requester_id: Option<String>,
    /// Filter by assignee id.
    pub assignee_id: Option<String>,
    /// Filter by topic.
    pub topic: Option<String>,
    /// Filter by priority.
    pub priority: Option<String>,
}

impl ListOptions {
    /// Converts the options into a typed filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if any value cannot be parsed.
    pub fn into_filter(self) -> Result<TicketFilter> {
        Ok(TicketFilter {
            status: present(self.status).map(|v| parse_status(&v)).transpose()?,
            requester_id: present(self.requester_id)
                .map(|v| parse_user_id("requester_id", &v))
                .transpose()?,
            assignee_id: present(self.assignee_id)
                .map(|v| parse_user_id("assignee_id", &v))
                .transpose()?,
            topic: present(self.topic).map(|v| parse_topic(&v)).transpose()?,
            priority: present(self.priority)
                .map(|v| parse_priority(&v))
                .transpose()?,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a status string into a `Status` value.
///
/// Accepts the wire form (`in_progress`) and the hyphenated CLI form.
///
/// # Errors
///
/// Returns an error if the status is invalid.
pub fn parse_status(value: &str) -> Result<Status> {
    match value.to_lowercase().as_str() {
        "created" => Ok(Status::Created),
        "in_progress" | "in-progress" => Ok(Status::InProgress),
        "completed" => Ok(Status::Completed),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid status filter: {}",
            value
        ))),
    }
}

/// Parses a topic string into a `Topic` value.
///
/// # Errors
///
/// Returns an error if the topic is invalid.
pub fn parse_topic(value: &str) -> Result<Topic> {
    let lowered = value.to_lowercase();
    Topic::ALL
        .into_iter()
        .find(|topic| topic.as_str() == lowered)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid topic: {}", value)))
}

/// Parses a priority string into a `Priority` value.
///
/// # Errors
///
/// Returns an error if the priority is invalid.
pub fn parse_priority(value: &str) -> Result<Priority> {
    let lowered = value.to_lowercase();
    Priority::ALL
        .into_iter()
        .find(|priority| priority.as_str() == lowered)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid priority: {}", value)))
}

fn parse_user_id(field: &str, value: &str) -> Result<UserId> {
    value
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid {} filter: {}", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_absent() {
        let options = ListOptions {
            status: Some(String::new()),
            requester_id: Some("  ".to_string()),
            ..ListOptions::default()
        };
        assert!(options.into_filter().unwrap().is_empty());
    }

    #[test]
    fn test_full_filter() {
        let options = ListOptions {
            status: Some("in_progress".to_string()),
            requester_id: Some("4".to_string()),
            assignee_id: Some("9".to_string()),
            topic: Some("Bug".to_string()),
            priority: Some("high".to_string()),
        };
        let filter = options.into_filter().unwrap();
        assert_eq!(filter.status, Some(Status::InProgress));
        assert_eq!(filter.requester_id, Some(4));
        assert_eq!(filter.assignee_id, Some(9));
        assert_eq!(filter.topic, Some(Topic::Bug));
        assert_eq!(filter.priority, Some(Priority::High));
    }

    #[test]
    fn test_unknown_status_is_invalid_input() {
        let err = parse_status("closed").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: Invalid status filter: closed");
    }

    #[test]
    fn test_non_numeric_id_is_invalid_input() {
        let options = ListOptions {
            requester_id: Some("abc".to_string()),
            ..ListOptions::default()
        };
        let err = options.into_filter().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Invalid requester_id filter: abc"
        );
    }

    #[test]
    fn test_hyphenated_status() {
        assert_eq!(parse_status("in-progress").unwrap(), Status::InProgress);
    }
}
