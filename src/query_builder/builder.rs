use super::filter::RequestFilter;
use crate::database::Statement;
use crate::models::REQUEST_COLUMNS;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Translates a [`RequestFilter`] into the listing statement
///
/// Every filter value is bound as a parameter; the SQL text only ever varies by which
/// fixed predicate is chosen.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestQuery;

impl RequestQuery {
    /// Unfiltered base query
    pub fn select_all() -> Statement {
        Statement::new(format!(
            "SELECT {REQUEST_COLUMNS} FROM requests ORDER BY id"
        ))
    }

    pub fn for_filter(filter: &RequestFilter) -> Statement {
        match filter {
            RequestFilter::NoFilter => Self::select_all(),
            RequestFilter::ExactDate(date) => Statement::new(format!(
                "SELECT {REQUEST_COLUMNS} FROM requests WHERE created_at::date = $1 ORDER BY id"
            ))
            .bind(*date),
            RequestFilter::Range { start, end } => Statement::new(format!(
                "SELECT {REQUEST_COLUMNS} FROM requests \
                 WHERE created_at >= $1 AND created_at < $2 ORDER BY id"
            ))
            .bind(start_of_day(*start))
            .bind(start_of_day(day_after(*end))),
        }
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

// Exclusive upper bound covering the whole of `date`
fn day_after(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
}
