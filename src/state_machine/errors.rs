use super::states::RequestState;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateMachineError {
    #[error("Cannot {event} request {id} from status {from}")]
    InvalidTransition {
        id: i32,
        from: RequestState,
        event: &'static str,
    },

    #[error("Request {id} was modified concurrently while applying {event}")]
    ConcurrentUpdate { id: i32, event: &'static str },

    #[error("Invalid request state: {0}")]
    InvalidState(String),
}

pub type StateMachineResult<T> = Result<T, StateMachineError>;
