// Request lifecycle state machine
//
// Transitions are decided by a pure function over (current state, event); the store
// applies them with a status-guarded UPDATE so concurrent writers cannot skip a state.

pub mod errors;
pub mod events;
pub mod request_state_machine;
pub mod states;

pub use errors::{StateMachineError, StateMachineResult};
pub use events::RequestEvent;
pub use request_state_machine::{
    determine_target_state, source_states, TransitionPolicy, BULK_CANCEL_SOURCE,
};
pub use states::RequestState;
