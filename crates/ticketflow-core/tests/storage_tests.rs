// Rust guideline compliant 2026-10-19

//! Unit tests for the storage module.
//!
//! Behavioural checks run against both stores through the trait; the JSONL
//! specifics (file format, malformed lines, reopening) are tested separately.

use std::fs;
use tempfile::TempDir;
use ticketflow_core::{
    Error, JsonlStore, MemoryStore, Priority, Status, TicketDraft, TicketFilter, TicketStore,
    Topic,
};

fn draft(requester_id: i64, status: Status, assignee_id: Option<i64>) -> TicketDraft {
    TicketDraft {
        requester_id,
        assignee_id,
        topic: Topic::Bug,
        priority: Priority::High,
        status,
        description: "App crashes".to_string(),
    }
}

fn jsonl_store() -> (TempDir, JsonlStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store =
        JsonlStore::new(temp_dir.path().join("tickets.jsonl")).expect("Failed to create store");
    (temp_dir, store)
}

fn check_ids_are_sequential(store: &dyn TicketStore) {
    let first = store.insert(draft(1, Status::Created, None)).unwrap();
    let second = store.insert(draft(2, Status::Created, None)).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.created_at, first.updated_at);
}

fn check_get_and_not_found(store: &dyn TicketStore) {
    let created = store.insert(draft(1, Status::Created, Some(3))).unwrap();
    let loaded = store.get(created.id).unwrap();
    assert_eq!(loaded, created);

    let missing = store.get(999).unwrap_err();
    assert!(matches!(missing, Error::NotFound(999)));
    assert_eq!(missing.to_string(), "Ticket 999 not found");
}

fn check_replace_is_last_write_wins(store: &dyn TicketStore) {
    let created = store.insert(draft(1, Status::Created, None)).unwrap();

    let mut first = created.clone();
    first.assignee_id = Some(4);
    let mut second = created.clone();
    second.assignee_id = Some(5);

    store.replace(&first).unwrap();
    let stored = store.replace(&second).unwrap();

    assert_eq!(stored.assignee_id, Some(5));
    assert!(stored.updated_at >= created.updated_at);
    assert_eq!(stored.created_at, created.created_at);
    assert_eq!(store.get(created.id).unwrap().assignee_id, Some(5));
}

fn check_replace_missing(store: &dyn TicketStore) {
    let ticket = draft(1, Status::Created, None).into_ticket(42, chrono::Utc::now());
    assert!(matches!(store.replace(&ticket), Err(Error::NotFound(42))));
}

fn check_list_filters_and_orders(store: &dyn TicketStore) {
    store.insert(draft(5, Status::InProgress, Some(1))).unwrap();
    store.insert(draft(5, Status::Created, None)).unwrap();
    store.insert(draft(6, Status::InProgress, Some(2))).unwrap();
    store.insert(draft(5, Status::InProgress, Some(3))).unwrap();

    let filter = TicketFilter {
        status: Some(Status::InProgress),
        requester_id: Some(5),
        ..TicketFilter::default()
    };
    let ids: Vec<u64> = store.list(&filter).unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 4]);

    let all: Vec<u64> = store
        .list(&TicketFilter::default())
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(all, vec![1, 2, 3, 4]);
}

fn check_clear(store: &dyn TicketStore) {
    store.insert(draft(1, Status::Created, None)).unwrap();
    store.clear().unwrap();
    assert!(store.list(&TicketFilter::default()).unwrap().is_empty());
    assert_eq!(store.insert(draft(1, Status::Created, None)).unwrap().id, 1);
}

fn check_rejects_invalid_draft(store: &dyn TicketStore) {
    let result = store.insert(draft(1, Status::InProgress, None));
    assert!(matches!(result, Err(Error::InvalidTicket(_))));
    assert!(store.list(&TicketFilter::default()).unwrap().is_empty());
}

#[test]
fn test_memory_store_behaviour() {
    check_ids_are_sequential(&MemoryStore::new());
    check_get_and_not_found(&MemoryStore::new());
    check_replace_is_last_write_wins(&MemoryStore::new());
    check_replace_missing(&MemoryStore::new());
    check_list_filters_and_orders(&MemoryStore::new());
    check_clear(&MemoryStore::new());
    check_rejects_invalid_draft(&MemoryStore::new());
}

#[test]
fn test_jsonl_store_behaviour() {
    let checks: [fn(&dyn TicketStore); 7] = [
        check_ids_are_sequential,
        check_get_and_not_found,
        check_replace_is_last_write_wins,
        check_replace_missing,
        check_list_filters_and_orders,
        check_clear,
        check_rejects_invalid_draft,
    ];
    for check in checks {
        let (_temp_dir, store) = jsonl_store();
        check(&store);
    }
}

#[test]
fn test_empty_file_handling() {
    let (_temp_dir, store) = jsonl_store();
    let tickets = store.load_all().expect("Failed to load tickets");
    assert!(tickets.is_empty(), "Missing file should load as empty");
}

#[test]
fn test_one_ticket_per_line() {
    let (_temp_dir, store) = jsonl_store();
    store.insert(draft(1, Status::Created, None)).unwrap();
    store.insert(draft(2, Status::Created, None)).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"status\":\"created\""));
    assert!(lines[0].contains("\"assignee_id\":null"));
}

#[test]
fn test_malformed_line_is_skipped() {
    let (_temp_dir, store) = jsonl_store();
    store.insert(draft(1, Status::Created, None)).unwrap();

    let mut content = fs::read_to_string(store.path()).unwrap();
    content.push_str("{not json}\n\n");
    fs::write(store.path(), content).unwrap();

    let tickets = store.load_all().unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].id, 1);
}

#[test]
fn test_reopen_sees_previous_writes() {
    let (temp_dir, store) = jsonl_store();
    let created = store.insert(draft(1, Status::Created, None)).unwrap();

    let reopened = JsonlStore::new(temp_dir.path().join("tickets.jsonl")).unwrap();
    assert_eq!(reopened.get(created.id).unwrap(), created);
    assert_eq!(reopened.insert(draft(2, Status::Created, None)).unwrap().id, 2);
}

#[test]
fn test_insert_many_assigns_consecutive_ids() {
    let (_temp_dir, store) = jsonl_store();
    let created = store
        .insert_many(vec![
            draft(1, Status::Created, None),
            draft(2, Status::InProgress, Some(3)),
            draft(3, Status::Completed, Some(4)),
        ])
        .unwrap();
    let ids: Vec<u64> = created.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(store.load_all().unwrap().len(), 3);
}

#[test]
fn test_empty_path_rejected() {
    assert!(JsonlStore::new(std::path::PathBuf::new()).is_err());
}
