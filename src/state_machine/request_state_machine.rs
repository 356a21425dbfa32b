use super::{
    errors::{StateMachineError, StateMachineResult},
    events::RequestEvent,
    states::RequestState,
};
use serde::{Deserialize, Serialize};

/// Only requests currently being worked on are swept by a bulk cancel
pub const BULK_CANCEL_SOURCE: RequestState = RequestState::InProgress;

/// Determine the target state for `event` applied to a request in `current`.
///
/// This is the single source of truth for the lifecycle:
///
/// ```text
/// new ──start──► in_progress ──complete──► completed
///  │                  │
///  └──────cancel──────┴──────cancel──────► canceled
/// ```
pub fn determine_target_state(
    id: i32,
    current: RequestState,
    event: &RequestEvent,
) -> StateMachineResult<RequestState> {
    let target = match (current, event) {
        (RequestState::New, RequestEvent::Start) => RequestState::InProgress,

        (RequestState::InProgress, RequestEvent::Complete { .. }) => RequestState::Completed,

        (RequestState::New, RequestEvent::Cancel { .. }) => RequestState::Canceled,
        (RequestState::InProgress, RequestEvent::Cancel { .. }) => RequestState::Canceled,

        (from, _) => {
            return Err(StateMachineError::InvalidTransition {
                id,
                from,
                event: event.event_type(),
            })
        }
    };

    Ok(target)
}

/// All states from which `event` is a legal transition
pub fn source_states(event: &RequestEvent) -> Vec<RequestState> {
    RequestState::ALL
        .into_iter()
        .filter(|state| determine_target_state(0, *state, event).is_ok())
        .collect()
}

/// How strictly single-request transitions are checked against the current status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Only transitions admitted by [`determine_target_state`] are written
    Guarded,
    /// Legacy behavior: any existing request is overwritten regardless of status
    Unconditional,
}

impl TransitionPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Guarded
        } else {
            Self::Unconditional
        }
    }

    /// States the store-side UPDATE must be restricted to, `None` when unrestricted
    pub fn allowed_sources(&self, event: &RequestEvent) -> Option<Vec<RequestState>> {
        match self {
            Self::Guarded => Some(source_states(event)),
            Self::Unconditional => None,
        }
    }

    /// Classify why a guarded UPDATE matched no row although the request exists
    pub fn explain_rejection(
        &self,
        id: i32,
        current: RequestState,
        event: &RequestEvent,
    ) -> StateMachineError {
        match determine_target_state(id, current, event) {
            Err(err) => err,
            // The row was legal to move but changed between the UPDATE and the lookup
            Ok(_) => StateMachineError::ConcurrentUpdate {
                id,
                event: event.event_type(),
            },
        }
    }
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self::Guarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        assert_eq!(
            determine_target_state(1, RequestState::New, &RequestEvent::Start).unwrap(),
            RequestState::InProgress
        );
        assert_eq!(
            determine_target_state(1, RequestState::InProgress, &RequestEvent::complete("done"))
                .unwrap(),
            RequestState::Completed
        );
        assert_eq!(
            determine_target_state(1, RequestState::InProgress, &RequestEvent::cancel("dup"))
                .unwrap(),
            RequestState::Canceled
        );
        assert_eq!(
            determine_target_state(1, RequestState::New, &RequestEvent::cancel("dup")).unwrap(),
            RequestState::Canceled
        );
    }

    #[test]
    fn test_invalid_transitions() {
        // Cannot start twice
        assert!(determine_target_state(1, RequestState::InProgress, &RequestEvent::Start).is_err());

        // Cannot complete before starting
        assert!(
            determine_target_state(1, RequestState::New, &RequestEvent::complete("x")).is_err()
        );

        // Terminal states accept nothing
        for terminal in [RequestState::Completed, RequestState::Canceled] {
            for event in [
                RequestEvent::Start,
                RequestEvent::complete("x"),
                RequestEvent::cancel("y"),
            ] {
                let err = determine_target_state(9, terminal, &event).unwrap_err();
                assert_eq!(
                    err,
                    StateMachineError::InvalidTransition {
                        id: 9,
                        from: terminal,
                        event: event.event_type(),
                    }
                );
            }
        }
    }

    #[test]
    fn test_targets_agree_with_events() {
        for state in RequestState::ALL {
            for event in [
                RequestEvent::Start,
                RequestEvent::complete("x"),
                RequestEvent::cancel("y"),
            ] {
                if let Ok(target) = determine_target_state(1, state, &event) {
                    assert_eq!(target, event.target_state());
                }
            }
        }
    }

    #[test]
    fn test_source_states() {
        assert_eq!(source_states(&RequestEvent::Start), vec![RequestState::New]);
        assert_eq!(
            source_states(&RequestEvent::complete("x")),
            vec![RequestState::InProgress]
        );
        assert_eq!(
            source_states(&RequestEvent::cancel("x")),
            vec![RequestState::New, RequestState::InProgress]
        );
    }

    #[test]
    fn test_bulk_cancel_source_admits_cancel() {
        assert!(
            determine_target_state(1, BULK_CANCEL_SOURCE, &RequestEvent::cancel("system")).is_ok()
        );
    }

    #[test]
    fn test_transition_policy() {
        assert_eq!(TransitionPolicy::from_strict(true), TransitionPolicy::Guarded);
        assert_eq!(
            TransitionPolicy::from_strict(false),
            TransitionPolicy::Unconditional
        );
        assert_eq!(
            TransitionPolicy::Unconditional.allowed_sources(&RequestEvent::Start),
            None
        );
        assert_eq!(
            TransitionPolicy::Guarded.allowed_sources(&RequestEvent::Start),
            Some(vec![RequestState::New])
        );
    }

    #[test]
    fn test_explain_rejection() {
        let policy = TransitionPolicy::Guarded;
        assert_eq!(
            policy.explain_rejection(3, RequestState::Completed, &RequestEvent::Start),
            StateMachineError::InvalidTransition {
                id: 3,
                from: RequestState::Completed,
                event: "start",
            }
        );
        assert_eq!(
            policy.explain_rejection(3, RequestState::New, &RequestEvent::Start),
            StateMachineError::ConcurrentUpdate { id: 3, event: "start" }
        );
    }
}
