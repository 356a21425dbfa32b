use super::errors::StateMachineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle states of a tracked request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    /// Initial state when the request is created
    #[default]
    New,
    /// An operator has taken the request into work
    InProgress,
    /// Work finished with a resolution
    Completed,
    /// Request was withdrawn, by an operator or by the system
    Canceled,
}

impl RequestState {
    pub const ALL: [RequestState; 4] = [
        Self::New,
        Self::InProgress,
        Self::Completed,
        Self::Canceled,
    ];

    /// Check if this is a terminal state (no further transitions allowed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }

    /// Storage representation, identical to the serde and `Display` form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequestState {
    type Err = StateMachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "canceled" => Ok(Self::Canceled),
            _ => Err(StateMachineError::InvalidState(s.to_string())),
        }
    }
}

// Lets `#[sqlx(try_from = "String")]` decode the TEXT status column.
impl TryFrom<String> for RequestState {
    type Error = StateMachineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_state_terminal_check() {
        assert!(RequestState::Completed.is_terminal());
        assert!(RequestState::Canceled.is_terminal());
        assert!(!RequestState::New.is_terminal());
        assert!(!RequestState::InProgress.is_terminal());
    }

    #[test]
    fn test_state_string_conversion() {
        assert_eq!(RequestState::InProgress.to_string(), "in_progress");
        assert_eq!(
            "canceled".parse::<RequestState>().unwrap(),
            RequestState::Canceled
        );
        assert!("cancelled".parse::<RequestState>().is_err());
        assert!("".parse::<RequestState>().is_err());

        for state in RequestState::ALL {
            assert_eq!(state.as_str().parse::<RequestState>().unwrap(), state);
        }
    }

    #[test]
    fn test_state_serde() {
        let json = serde_json::to_string(&RequestState::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let parsed: RequestState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RequestState::InProgress);
    }

    #[test]
    fn test_default_state_is_new() {
        assert_eq!(RequestState::default(), RequestState::New);
    }
}
