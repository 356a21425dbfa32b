//! # System Constants
//!
//! Fixed strings shared by the lifecycle engine and the web layer.

/// Reason stamped on every request canceled by the bulk cancel operation
pub const SYSTEM_CANCEL_REASON: &str = "Canceled by system";

/// Bulk cancel message when no request was in progress
pub const NOTHING_TO_CANCEL_MESSAGE: &str = "nothing to cancel";

/// Bulk cancel message for `count` transitioned requests
pub fn requests_canceled_message(count: usize) -> String {
    format!("{count} requests canceled")
}
