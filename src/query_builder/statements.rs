use crate::constants::SYSTEM_CANCEL_REASON;
use crate::database::{SqlParam, Statement};
use crate::models::{NewRequest, REQUEST_COLUMNS};
use crate::state_machine::{RequestEvent, RequestState, BULK_CANCEL_SOURCE};

/// Write and lookup statements for the lifecycle engine
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestStatements;

impl RequestStatements {
    pub fn insert(new_request: &NewRequest) -> Statement {
        Statement::new(format!(
            "INSERT INTO requests (text, topic) VALUES ($1, $2) RETURNING {REQUEST_COLUMNS}"
        ))
        .bind(new_request.text.as_str())
        .bind(new_request.topic.as_str())
    }

    pub fn find_by_id(id: i32) -> Statement {
        Statement::new(format!(
            "SELECT {REQUEST_COLUMNS} FROM requests WHERE id = $1"
        ))
        .bind(id)
    }

    /// Single-row transition
    ///
    /// Writes the event's side field and clears the other so the row always satisfies the
    /// resolution/cancel_reason constraints. With `allowed_sources` the update only matches
    /// a row whose current status is one of them.
    pub fn transition(
        id: i32,
        event: &RequestEvent,
        allowed_sources: Option<&[RequestState]>,
    ) -> Statement {
        let statement =
            Statement::new(String::new()).bind(event.target_state().as_str());

        let (set_clause, statement) = match event {
            RequestEvent::Start => (
                "status = $1, resolution = NULL, cancel_reason = NULL",
                statement,
            ),
            RequestEvent::Complete { resolution } => (
                "status = $1, resolution = $2, cancel_reason = NULL",
                statement.bind(resolution.as_str()),
            ),
            RequestEvent::Cancel { reason } => (
                "status = $1, cancel_reason = $2, resolution = NULL",
                statement.bind(reason.as_str()),
            ),
        };

        let id_placeholder = statement.next_placeholder();
        let mut statement = statement.bind(id);
        let mut sql = format!("UPDATE requests SET {set_clause} WHERE id = ${id_placeholder}");

        if let Some(sources) = allowed_sources {
            sql.push_str(&format!(
                " AND status = ANY(${})",
                statement.next_placeholder()
            ));
            statement = statement.bind(SqlParam::TextArray(
                sources.iter().map(|s| s.as_str().to_string()).collect(),
            ));
        }

        sql.push_str(&format!(" RETURNING {REQUEST_COLUMNS}"));
        statement.sql = sql;
        statement
    }

    /// Cancel every request currently in progress with the system reason
    pub fn cancel_all_in_progress() -> Statement {
        Statement::new(format!(
            "UPDATE requests SET status = $1, cancel_reason = $2, resolution = NULL \
             WHERE status = $3 RETURNING {REQUEST_COLUMNS}"
        ))
        .bind(RequestState::Canceled.as_str())
        .bind(SYSTEM_CANCEL_REASON)
        .bind(BULK_CANCEL_SOURCE.as_str())
    }
}
