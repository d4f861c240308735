// Rust guideline compliant 2026-10-19

//! Demo data generator.
//!
//! Seeding wipes the store and writes random tickets directly, without going
//! through the service. Generated tickets still respect the assignee rules:
//! `created` tickets are unassigned and every other status has an assignee.

use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ticketflow_core::{Priority, Status, Ticket, TicketDraft, TicketStore, Topic, UserId};

/// Highest user id handed out to generated requesters and assignees.
pub const MAX_SEED_USER_ID: UserId = 20;

const WORDS: [&str; 48] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "voluptate",
    "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat",
];

/// Options for a seeding run.
#[derive(Debug, Clone, Copy)]
pub struct SeedOptions {
    /// Number of tickets to generate.
    pub count: usize,
    /// Fixed RNG seed for reproducible output; random when `None`.
    pub rng_seed: Option<u64>,
}

fn pick<T: Copy, R: Rng>(rng: &mut R, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

fn user_id<R: Rng>(rng: &mut R) -> UserId {
    rng.random_range(1..=MAX_SEED_USER_ID)
}

fn sentence<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(6..=12);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, &WORDS)).collect();
    let text = words.join(" ");

    let mut chars = text.chars();
    match chars.next() {
        Some(initial) => format!("{}{}.", initial.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Generates one random ticket draft.
pub fn random_draft<R: Rng>(rng: &mut R) -> TicketDraft {
    let requester_id = user_id(rng);
    let status = pick(rng, &Status::ALL);
    let assignee_id = match status {
        Status::Created => None,
        Status::InProgress | Status::Completed => Some(user_id(rng)),
    };

    TicketDraft {
        requester_id,
        assignee_id,
        topic: pick(rng, &Topic::ALL),
        priority: pick(rng, &Priority::ALL),
        status,
        description: format!("{} {}", sentence(rng), sentence(rng)),
    }
}

/// Generates `count` random drafts from `rng`.
pub fn generate_drafts<R: Rng>(rng: &mut R, count: usize) -> Vec<TicketDraft> {
    (0..count).map(|_| random_draft(rng)).collect()
}

/// Clears the store and fills it with generated tickets.
///
/// # Errors
///
/// Returns an error if the store cannot be cleared or written.
pub fn seed_store(store: &dyn TicketStore, options: SeedOptions) -> Result<Vec<Ticket>> {
    let mut rng = match options.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let drafts = generate_drafts(&mut rng, options.count);

    store.clear()?;
    let tickets = store.insert_many(drafts)?;
    tracing::info!(
        count = tickets.len(),
        rng_seed = ?options.rng_seed,
        "store seeded"
    );
    Ok(tickets)
}
