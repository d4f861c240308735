// Rust guideline compliant 2026-10-19

//! Property-based tests for the ticket service.

use proptest::prelude::*;
use std::sync::Arc;
use ticketflow_app::TicketService;
use ticketflow_core::{
    validate_transition, MemoryStore, NewTicket, Priority, Status, TicketPatch, Topic,
};

#[derive(Debug, Clone)]
enum Op {
    Update(TicketPatch),
    Finalize,
}

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Created),
        Just(Status::InProgress),
        Just(Status::Completed),
    ]
}

fn arb_patch() -> impl Strategy<Value = TicketPatch> {
    (
        proptest::option::of(proptest::option::of(1i64..=4)),
        proptest::option::of(arb_status()),
    )
        .prop_map(|(assignee_id, status)| TicketPatch {
            assignee_id,
            status,
        })
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => arb_patch().prop_map(Op::Update),
        1 => Just(Op::Finalize),
    ]
}

proptest! {
    /// Rejected operations leave the stored ticket untouched, and every
    /// stored snapshot satisfies the assignee invariants.
    #[test]
    fn prop_rejections_never_write(
        preassigned in proptest::option::of(1i64..=4),
        ops in prop::collection::vec(arb_op(), 1..25),
    ) {
        let service = TicketService::new(Arc::new(MemoryStore::new()));
        service.create(NewTicket {
            requester_id: 1,
            assignee_id: preassigned,
            topic: Topic::Other,
            priority: Priority::Low,
            description: "Generated".to_string(),
        }).unwrap();

        for op in ops {
            let before = service.get(1).unwrap();
            let outcome = match op {
                Op::Update(patch) => service.update(1, patch),
                Op::Finalize => service.finalize(1),
            };
            let after = service.get(1).unwrap();

            match outcome {
                Ok(returned) => prop_assert_eq!(&returned, &after),
                Err(_) => prop_assert_eq!(&before, &after),
            }
            prop_assert!(after.validate().is_ok());
            if before.status == Status::Completed {
                prop_assert_eq!(&before, &after);
            }
        }
    }

    /// Every update the transition table accepts on an open ticket is
    /// stored as computed.
    #[test]
    fn prop_allowed_updates_succeed(
        preassigned in proptest::option::of(1i64..=4),
        start_in_progress in any::<bool>(),
        patch in arb_patch(),
    ) {
        let service = TicketService::new(Arc::new(MemoryStore::new()));
        service.create(NewTicket {
            requester_id: 1,
            assignee_id: preassigned,
            topic: Topic::Other,
            priority: Priority::Low,
            description: "Generated".to_string(),
        }).unwrap();
        if start_in_progress {
            service
                .update(1, TicketPatch::status(Status::InProgress).with_assignee(Some(3)))
                .unwrap();
        }

        let current = service.get(1).unwrap();
        let next_status = patch.status.unwrap_or(current.status);
        let next_assignee = patch.assignee_id.unwrap_or(current.assignee_id);
        prop_assume!(
            validate_transition(current.status, next_status, next_assignee.is_some()).is_ok()
        );

        let updated = service.update(1, patch).unwrap();
        prop_assert_eq!(updated.status, next_status);
        prop_assert_eq!(updated.assignee_id, next_assignee);
        prop_assert_eq!(service.get(1).unwrap(), updated);
    }
}
