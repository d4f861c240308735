// Rust guideline compliant 2026-10-19

//! Property-based tests for ticket filters.

use chrono::Utc;
use proptest::prelude::*;
use ticketflow_core::{
    MemoryStore, Priority, Status, Ticket, TicketDraft, TicketFilter, TicketStore, Topic,
};

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Created),
        Just(Status::InProgress),
        Just(Status::Completed),
    ]
}

fn arb_topic() -> impl Strategy<Value = Topic> {
    prop_oneof![
        Just(Topic::Billing),
        Just(Topic::Bug),
        Just(Topic::Feature),
        Just(Topic::Other),
    ]
}

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::Low), Just(Priority::Medium), Just(Priority::High)]
}

/// Drafts that satisfy the assignee invariant.
fn arb_draft() -> impl Strategy<Value = TicketDraft> {
    (
        1i64..=6,
        proptest::option::of(1i64..=6),
        arb_topic(),
        arb_priority(),
        arb_status(),
    )
        .prop_map(|(requester_id, assignee_id, topic, priority, status)| {
            let assignee_id = match status {
                Status::Created => assignee_id,
                _ => Some(assignee_id.unwrap_or(1)),
            };
            TicketDraft {
                requester_id,
                assignee_id,
                topic,
                priority,
                status,
                description: "Generated".to_string(),
            }
        })
}

fn arb_filter() -> impl Strategy<Value = TicketFilter> {
    (
        proptest::option::of(arb_status()),
        proptest::option::of(1i64..=6),
        proptest::option::of(1i64..=6),
        proptest::option::of(arb_topic()),
        proptest::option::of(arb_priority()),
    )
        .prop_map(
            |(status, requester_id, assignee_id, topic, priority)| TicketFilter {
                status,
                requester_id,
                assignee_id,
                topic,
                priority,
            },
        )
}

fn naive_matches(filter: &TicketFilter, ticket: &Ticket) -> bool {
    filter.status.map_or(true, |s| ticket.status == s)
        && filter.requester_id.map_or(true, |r| ticket.requester_id == r)
        && filter.assignee_id.map_or(true, |a| ticket.assignee_id == Some(a))
        && filter.topic.map_or(true, |t| ticket.topic == t)
        && filter.priority.map_or(true, |p| ticket.priority == p)
}

proptest! {
    /// Listing returns exactly the matching subset, in ascending id order.
    #[test]
    fn prop_list_returns_exact_subset(
        drafts in prop::collection::vec(arb_draft(), 0..40),
        filter in arb_filter(),
    ) {
        let store = MemoryStore::new();
        let created = store.insert_many(drafts).unwrap();

        let listed = store.list(&filter).unwrap();
        let expected: Vec<Ticket> = created
            .into_iter()
            .filter(|t| naive_matches(&filter, t))
            .collect();

        prop_assert_eq!(listed, expected);
    }

    /// `TicketFilter::apply` agrees with the store regardless of input order.
    #[test]
    fn prop_apply_sorts_and_filters(
        drafts in prop::collection::vec(arb_draft(), 0..40),
        filter in arb_filter(),
    ) {
        let now = Utc::now();
        let tickets: Vec<Ticket> = drafts
            .into_iter()
            .enumerate()
            .map(|(i, d)| d.into_ticket(100 - i as u64, now))
            .collect();

        let kept = filter.apply(tickets.clone());
        prop_assert!(kept.windows(2).all(|w| w[0].id < w[1].id));
        prop_assert!(kept.iter().all(|t| naive_matches(&filter, t)));
        prop_assert_eq!(
            kept.len(),
            tickets.iter().filter(|t| naive_matches(&filter, t)).count()
        );
    }
}
