//! # Lifecycle Tests
//!
//! Properties of the transition table and of `RequestService` driving a scripted store.

mod common;

use proptest::prelude::*;
use std::sync::Arc;

use common::{request_row, ScriptedGateway};
use helpdesk_core::database::SqlParam;
use helpdesk_core::query_builder::RequestStatements;
use helpdesk_core::state_machine::{
    determine_target_state, source_states, StateMachineError, BULK_CANCEL_SOURCE,
};
use helpdesk_core::{HelpdeskError, RequestEvent, RequestService, RequestState, TransitionPolicy};

fn any_state() -> impl Strategy<Value = RequestState> {
    prop::sample::select(RequestState::ALL.to_vec())
}

fn any_event() -> impl Strategy<Value = RequestEvent> {
    prop_oneof![
        Just(RequestEvent::Start),
        "[a-z ]{1,16}".prop_map(|s| RequestEvent::complete(s)),
        "[a-z ]{1,16}".prop_map(|s| RequestEvent::cancel(s)),
    ]
}

proptest! {
    #[test]
    fn prop_legal_transitions_land_on_event_target(state in any_state(), event in any_event()) {
        match determine_target_state(1, state, &event) {
            Ok(target) => {
                prop_assert_eq!(target, event.target_state());
                prop_assert!(source_states(&event).contains(&state));
            }
            Err(StateMachineError::InvalidTransition { from, event: name, .. }) => {
                prop_assert_eq!(from, state);
                prop_assert_eq!(name, event.event_type());
                prop_assert!(!source_states(&event).contains(&state));
            }
            Err(other) => prop_assert!(false, "unexpected error {other:?}"),
        }
    }

    #[test]
    fn prop_terminal_states_accept_nothing(state in any_state(), event in any_event()) {
        if state.is_terminal() {
            prop_assert!(determine_target_state(1, state, &event).is_err());
        }
    }

    #[test]
    fn prop_transition_statements_clear_the_opposite_side_field(
        id in 1..i32::MAX,
        event in any_event(),
    ) {
        let statement = RequestStatements::transition(id, &event, None);
        match event {
            RequestEvent::Start => {
                prop_assert!(statement.sql.contains("resolution = NULL"));
                prop_assert!(statement.sql.contains("cancel_reason = NULL"));
            }
            RequestEvent::Complete { .. } => {
                prop_assert!(statement.sql.contains("cancel_reason = NULL"))
            }
            RequestEvent::Cancel { .. } => {
                prop_assert!(statement.sql.contains("resolution = NULL"))
            }
        }
        prop_assert_eq!(statement.params.last(), Some(&SqlParam::Int(id)));
    }
}

#[test]
fn test_lifecycle_table() {
    assert_eq!(source_states(&RequestEvent::Start), vec![RequestState::New]);
    assert_eq!(
        source_states(&RequestEvent::complete("x")),
        vec![RequestState::InProgress]
    );
    assert_eq!(
        source_states(&RequestEvent::cancel("x")),
        vec![RequestState::New, RequestState::InProgress]
    );
    assert_eq!(BULK_CANCEL_SOURCE, RequestState::InProgress);
}

#[tokio::test]
async fn test_service_returns_updated_row() {
    let gateway = ScriptedGateway::new();
    gateway.push_rows(vec![request_row(2, RequestState::Canceled)]);
    let service = RequestService::new(gateway.clone(), TransitionPolicy::Guarded);

    let request = service.cancel(2, "duplicate".to_string()).await.unwrap();

    assert_eq!(request.status, RequestState::Canceled);
    assert!(request.side_fields_consistent());
    assert_eq!(
        gateway.executed()[0].params.last(),
        Some(&SqlParam::TextArray(vec![
            "new".to_string(),
            "in_progress".to_string()
        ]))
    );
}

#[tokio::test]
async fn test_service_detects_concurrent_update() {
    // The guarded UPDATE missed, yet the row is still in a legal source state
    let gateway = ScriptedGateway::new();
    gateway.push_rows(vec![]);
    gateway.push_rows(vec![request_row(8, RequestState::New)]);
    let service = RequestService::new(gateway, TransitionPolicy::Guarded);

    let err = service.start(8).await.unwrap_err();

    assert!(matches!(
        err,
        HelpdeskError::InvalidTransition(StateMachineError::ConcurrentUpdate { id: 8, .. })
    ));
}

#[tokio::test]
async fn test_service_propagates_store_errors() {
    let gateway = ScriptedGateway::new();
    gateway.push_error("deadlock detected");
    let service = RequestService::new(gateway, TransitionPolicy::Guarded);

    let err = service
        .complete(1, "done".to_string())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "database");
    assert_eq!(err.to_string(), "Database error: deadlock detected");
}

#[tokio::test]
async fn test_bulk_cancel_outcome() {
    let gateway = ScriptedGateway::new();
    gateway.push_rows(vec![
        request_row(1, RequestState::Canceled),
        request_row(2, RequestState::Canceled),
    ]);
    let service = RequestService::new(gateway.clone(), TransitionPolicy::Unconditional);

    let outcome = service.cancel_all_in_progress().await.unwrap();
    assert_eq!(outcome.count(), 2);
    assert_eq!(outcome.message(), "2 requests canceled");

    // Bulk cancel ignores the single-request policy
    assert_eq!(
        gateway.executed()[0],
        RequestStatements::cancel_all_in_progress()
    );

    let empty = service.cancel_all_in_progress().await.unwrap();
    assert_eq!(empty.message(), "nothing to cancel");
}

#[tokio::test]
async fn test_find_returns_none_for_missing_request() {
    let gateway: Arc<ScriptedGateway> = ScriptedGateway::new();
    let service = RequestService::new(gateway, TransitionPolicy::Guarded);

    assert!(service.find(404).await.unwrap().is_none());
}
