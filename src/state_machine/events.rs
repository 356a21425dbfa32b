use super::states::RequestState;
use serde::{Deserialize, Serialize};

/// Events that can trigger request state transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum RequestEvent {
    /// Take the request into work
    Start,
    /// Finish the request with a resolution
    Complete { resolution: String },
    /// Cancel the request with a reason
    Cancel { reason: String },
}

impl RequestEvent {
    pub fn complete(resolution: impl Into<String>) -> Self {
        Self::Complete {
            resolution: resolution.into(),
        }
    }

    pub fn cancel(reason: impl Into<String>) -> Self {
        Self::Cancel {
            reason: reason.into(),
        }
    }

    /// Get a string representation of the event type for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Complete { .. } => "complete",
            Self::Cancel { .. } => "cancel",
        }
    }

    /// State every legal application of this event lands in
    pub fn target_state(&self) -> RequestState {
        match self {
            Self::Start => RequestState::InProgress,
            Self::Complete { .. } => RequestState::Completed,
            Self::Cancel { .. } => RequestState::Canceled,
        }
    }

    pub fn resolution(&self) -> Option<&str> {
        match self {
            Self::Complete { resolution } => Some(resolution),
            _ => None,
        }
    }

    pub fn cancel_reason(&self) -> Option<&str> {
        match self {
            Self::Cancel { reason } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let complete = RequestEvent::complete("fixed");
        assert_eq!(complete.event_type(), "complete");
        assert_eq!(complete.resolution(), Some("fixed"));
        assert_eq!(complete.cancel_reason(), None);

        let cancel = RequestEvent::cancel("duplicate");
        assert_eq!(cancel.cancel_reason(), Some("duplicate"));
        assert_eq!(cancel.resolution(), None);
        assert_eq!(RequestEvent::Start.cancel_reason(), None);
    }

    #[test]
    fn test_event_serde_shape() {
        let json = serde_json::to_value(RequestEvent::complete("fixed")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "complete", "data": {"resolution": "fixed"}})
        );
    }
}
