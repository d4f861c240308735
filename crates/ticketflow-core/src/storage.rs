// Rust guideline compliant 2026-10-19

//! Storage module for tickets.
//!
//! [`TicketStore`] is the seam the service layer is written against.
//! [`MemoryStore`] keeps tickets in a map and is used in tests and for
//! throwaway servers; [`JsonlStore`] persists one ticket per line in a JSONL
//! file with atomic rewrites and an advisory file lock.
//!
//! Replacement is last-write-wins. Neither store compares versions.

use crate::filter::TicketFilter;
use crate::models::{Ticket, TicketDraft, TicketId};
use crate::{Error, Result};
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Persistence operations required by the ticket service.
pub trait TicketStore: Send + Sync {
    /// Assigns an id and timestamps to the draft and stores it.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is invalid or cannot be written.
    fn insert(&self, draft: TicketDraft) -> Result<Ticket>;

    /// Stores several drafts, assigning consecutive ids.
    ///
    /// # Errors
    ///
    /// Returns an error if any ticket is invalid or cannot be written.
    fn insert_many(&self, drafts: Vec<TicketDraft>) -> Result<Vec<Ticket>> {
        drafts.into_iter().map(|draft| self.insert(draft)).collect()
    }

    /// Loads a ticket by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no ticket has the id.
    fn get(&self, id: TicketId) -> Result<Ticket>;

    /// Returns the tickets matching the filter, ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read.
    fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>>;

    /// Overwrites the stored ticket with the same id and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no ticket has the id.
    fn replace(&self, ticket: &Ticket) -> Result<Ticket>;

    /// Removes every ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be written.
    fn clear(&self) -> Result<()>;
}

fn next_id(tickets: &BTreeMap<TicketId, Ticket>) -> TicketId {
    tickets.keys().next_back().map_or(1, |last| last + 1)
}

/// In-memory ticket store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tickets: Mutex<BTreeMap<TicketId, Ticket>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<TicketId, Ticket>> {
        self.tickets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TicketStore for MemoryStore {
    fn insert(&self, draft: TicketDraft) -> Result<Ticket> {
        let mut tickets = self.lock();
        let ticket = draft.into_ticket(next_id(&tickets), Utc::now());
        ticket.validate()?;
        tickets.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    fn get(&self, id: TicketId) -> Result<Ticket> {
        self.lock().get(&id).cloned().ok_or(Error::NotFound(id))
    }

    fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>> {
        // BTreeMap iteration is already id-ordered.
        Ok(self
            .lock()
            .values()
            .filter(|ticket| filter.matches(ticket))
            .cloned()
            .collect())
    }

    fn replace(&self, ticket: &Ticket) -> Result<Ticket> {
        let mut tickets = self.lock();
        let slot = tickets.get_mut(&ticket.id).ok_or(Error::NotFound(ticket.id))?;
        let mut updated = ticket.clone();
        updated.updated_at = Utc::now();
        updated.validate()?;
        *slot = updated.clone();
        Ok(updated)
    }

    fn clear(&self) -> Result<()> {
        self.lock().clear();
        Ok(())
    }
}

/// JSONL file-backed ticket store.
///
/// Every mutation rewrites the whole file through a temp file and rename
/// while holding an exclusive lock on a sibling `.lock` file.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl JsonlStore {
    /// Creates a new store for the given file.
    ///
    /// The file does not need to exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self { path })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all tickets from the JSONL file, one ticket per line.
    ///
    /// Blank lines are ignored. Malformed lines are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - A well-formed ticket fails validation
    pub fn load_all(&self) -> Result<Vec<Ticket>> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut tickets = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<Ticket>(&line) {
                Ok(ticket) => {
                    ticket.validate()?;
                    tickets.push(ticket);
                }
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        error = %e,
                        "skipping malformed ticket line"
                    );
                }
            }
        }

        Ok(tickets)
    }

    /// Replaces the entire file with the provided tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any ticket fails validation
    /// - The file cannot be written
    /// - The atomic rename fails
    pub fn save_all(&self, tickets: &[Ticket]) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        for ticket in tickets {
            ticket.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let mut file = File::create(&temp_path)?;

            for ticket in tickets {
                let json = serde_json::to_string(ticket)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }

            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    /// Executes a closure with an exclusive lock on the storage file.
    ///
    /// Blocks until the lock is available. The lock is released when the
    /// closure returns, whether or not it failed.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock file cannot be opened or locked, or if
    /// the closure fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.lock_exclusive()?;
        let result = f();
        let _ = lock_file.unlock();

        result
    }

    fn load_map(&self) -> Result<BTreeMap<TicketId, Ticket>> {
        Ok(self
            .load_all()?
            .into_iter()
            .map(|ticket| (ticket.id, ticket))
            .collect())
    }

    fn save_map(&self, tickets: &BTreeMap<TicketId, Ticket>) -> Result<()> {
        let tickets: Vec<Ticket> = tickets.values().cloned().collect();
        self.save_all(&tickets)
    }
}

impl TicketStore for JsonlStore {
    fn insert(&self, draft: TicketDraft) -> Result<Ticket> {
        let mut created = self.insert_many(vec![draft])?;
        created
            .pop()
            .ok_or_else(|| Error::InvalidTicket("insert produced no ticket".to_string()))
    }

    fn insert_many(&self, drafts: Vec<TicketDraft>) -> Result<Vec<Ticket>> {
        self.with_lock(|| {
            let mut tickets = self.load_map()?;
            let now = Utc::now();
            let mut created = Vec::with_capacity(drafts.len());

            for draft in drafts {
                let ticket = draft.into_ticket(next_id(&tickets), now);
                ticket.validate()?;
                tickets.insert(ticket.id, ticket.clone());
                created.push(ticket);
            }

            self.save_map(&tickets)?;
            Ok(created)
        })
    }

    fn get(&self, id: TicketId) -> Result<Ticket> {
        self.load_all()?
            .into_iter()
            .find(|ticket| ticket.id == id)
            .ok_or(Error::NotFound(id))
    }

    fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>> {
        Ok(filter.apply(self.load_all()?))
    }

    fn replace(&self, ticket: &Ticket) -> Result<Ticket> {
        self.with_lock(|| {
            let mut tickets = self.load_map()?;
            let slot = tickets.get_mut(&ticket.id).ok_or(Error::NotFound(ticket.id))?;
            let mut updated = ticket.clone();
            updated.updated_at = Utc::now();
            *slot = updated.clone();
            self.save_map(&tickets)?;
            Ok(updated)
        })
    }

    fn clear(&self) -> Result<()> {
        self.with_lock(|| self.save_all(&[]))
    }
}
