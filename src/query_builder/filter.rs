use crate::error::{HelpdeskError, Result};
use crate::validation::{parse_date, ListParams, DATE_PARAM, END_DATE_PARAM, START_DATE_PARAM};
use chrono::NaiveDate;

/// Date filter applied to a request listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFilter {
    /// Return every request
    NoFilter,
    /// Requests whose `created_at` falls on this calendar date
    ExactDate(NaiveDate),
    /// Requests created on any calendar day in `[start, end]`, both ends included
    Range { start: NaiveDate, end: NaiveDate },
}

impl RequestFilter {
    /// Resolve the filters with precedence `date` > `start_date`/`end_date` > none
    pub fn from_params(params: &ListParams) -> Result<Self> {
        if let Some(date) = params.single(DATE_PARAM, &params.date)? {
            return Ok(Self::ExactDate(parse_date(DATE_PARAM, date)?));
        }

        let start = params.single(START_DATE_PARAM, &params.start_date)?;
        let end = params.single(END_DATE_PARAM, &params.end_date)?;

        match (start, end) {
            (None, None) => Ok(Self::NoFilter),
            (Some(start), Some(end)) => {
                let start = parse_date(START_DATE_PARAM, start)?;
                let end = parse_date(END_DATE_PARAM, end)?;
                if start > end {
                    return Err(HelpdeskError::validation(
                        "start_date must not be after end_date",
                    ));
                }
                Ok(Self::Range { start, end })
            }
            _ => Err(HelpdeskError::validation(
                "start_date and end_date must both be provided",
            )),
        }
    }
}

impl Default for RequestFilter {
    fn default() -> Self {
        Self::NoFilter
    }
}
