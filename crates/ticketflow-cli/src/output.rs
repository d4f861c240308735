// Rust guideline compliant 2026-10-19

//! Output formatting module for the Ticketflow CLI.
//!
//! This module provides functionality for formatting tickets in various
//! output formats (JSON, table, plain text).

use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};
use ticketflow_app::{AppError, ErrorEnvelope, SuccessEnvelope};
use ticketflow_core::Ticket;

const DESCRIPTION_PREVIEW_CHARS: usize = 48;

/// Output formatter trait.
///
/// Defines the interface for formatting tickets in different output formats.
pub trait OutputFormatter {
    /// Formats a single ticket for display.
    fn format_ticket(&self, ticket: &Ticket) -> String;

    /// Formats a list of tickets for display.
    fn format_list(&self, tickets: &[Ticket]) -> String;

    /// Formats the outcome of a command that has no ticket to show.
    ///
    /// Human formats print `message`; JSON prints `data` in the success
    /// envelope.
    fn format_summary(&self, message: &str, data: serde_json::Value) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// JSON output formatter.
///
/// Wraps results in the success envelope and errors in the error envelope.
pub struct JsonFormatter;

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| json!({ "message": "Failed to serialize output" }).to_string())
}

impl OutputFormatter for JsonFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        to_json(&SuccessEnvelope::new(ticket))
    }

    fn format_list(&self, tickets: &[Ticket]) -> String {
        to_json(&SuccessEnvelope::new(json!({
            "tickets": tickets,
            "total": tickets.len(),
        })))
    }

    fn format_summary(&self, _message: &str, data: serde_json::Value) -> String {
        to_json(&SuccessEnvelope::new(data))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        match error.downcast_ref::<AppError>() {
            Some(app_error) => to_json(&ErrorEnvelope::from_error(app_error)),
            None => to_json(&json!({ "message": error.to_string() })),
        }
    }
}

/// Table output formatter.
///
/// Formats tickets as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

fn assignee_label(ticket: &Ticket) -> String {
    ticket
        .assignee_id
        .map_or_else(|| "-".to_string(), |id| id.to_string())
}

fn preview(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(DESCRIPTION_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}

impl OutputFormatter for TableFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", ticket.id));
        output.push_str(&format!("Status:      {}\n", ticket.status));
        output.push_str(&format!("Topic:       {}\n", ticket.topic));
        output.push_str(&format!("Priority:    {}\n", ticket.priority));
        output.push_str(&format!("Requester:   {}\n", ticket.requester_id));
        output.push_str(&format!("Assignee:    {}\n", assignee_label(ticket)));
        output.push_str(&format!("Created:     {}\n", ticket.created_at.to_rfc3339()));
        output.push_str(&format!("Updated:     {}\n", ticket.updated_at.to_rfc3339()));
        output.push_str(&format!("Description: {}\n", ticket.description));

        output
    }

    fn format_list(&self, tickets: &[Ticket]) -> String {
        if tickets.is_empty() {
            return "No tickets found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec![
            "ID",
            "Status",
            "Priority",
            "Topic",
            "Requester",
            "Assignee",
            "Description",
        ]);

        for ticket in tickets {
            builder.push_record(vec![
                ticket.id.to_string(),
                ticket.status.to_string(),
                ticket.priority.to_string(),
                ticket.topic.to_string(),
                ticket.requester_id.to_string(),
                assignee_label(ticket),
                preview(&ticket.description),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_summary(&self, message: &str, _data: serde_json::Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        if !self.use_color {
            return format!("Error: {}", error);
        }

        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error:");
        let _ = buffer.reset();
        let _ = write!(buffer, " {}", error);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }
}

/// Plain text output formatter.
///
/// Formats tickets as simple whitespace-separated lines.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        format!(
            "{} {} {} {} {} {}\n{}",
            ticket.id,
            ticket.status,
            ticket.priority,
            ticket.topic,
            ticket.requester_id,
            assignee_label(ticket),
            ticket.description
        )
    }

    fn format_list(&self, tickets: &[Ticket]) -> String {
        if tickets.is_empty() {
            return "No tickets found.".to_string();
        }

        let mut output = String::new();
        for ticket in tickets {
            output.push_str(&format!(
                "{} {} {} {} {} {}\n",
                ticket.id,
                ticket.status,
                ticket.priority,
                ticket.topic,
                ticket.requester_id,
                assignee_label(ticket)
            ));
        }
        output
    }

    fn format_summary(&self, message: &str, _data: serde_json::Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
