//! Input validation for the helpdesk core
//!
//! Turns raw, untyped request input (JSON bodies, path segments, query pairs) into typed
//! values before anything touches the store. Every function here is pure.

use crate::error::{HelpdeskError, Result};
use crate::models::NewRequest;
use chrono::NaiveDate;
use serde_json::Value;

/// Calendar date format accepted by the list filters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query parameters understood by the list operation
pub const DATE_PARAM: &str = "date";
pub const START_DATE_PARAM: &str = "start_date";
pub const END_DATE_PARAM: &str = "end_date";

/// Returns the field as an owned string when it is present, a JSON string, and non-empty
fn string_field(body: &Value, field: &str) -> Option<String> {
    match body.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Require a non-empty string field in a JSON body
///
/// Absent fields, `null`, numbers, arrays and empty strings are all rejected; a body that
/// is not a JSON object behaves like an empty object.
pub fn require_string(body: &Value, field: &str) -> Result<String> {
    string_field(body, field)
        .ok_or_else(|| HelpdeskError::validation(format!("{field} must be a non-empty string")))
}

/// Validate the creation payload `{text, topic}`
pub fn validate_new_request(body: &Value) -> Result<NewRequest> {
    let text = string_field(body, "text");
    let topic = string_field(body, "topic");

    match (text, topic) {
        (Some(text), Some(topic)) => Ok(NewRequest { text, topic }),
        (None, None) => Err(HelpdeskError::validation(
            "text and topic must be non-empty strings",
        )),
        (None, Some(_)) => Err(HelpdeskError::validation("text must be a non-empty string")),
        (Some(_), None) => Err(HelpdeskError::validation("topic must be a non-empty string")),
    }
}

/// Validate the completion payload `{resolution}`
pub fn validate_resolution(body: &Value) -> Result<String> {
    require_string(body, "resolution")
}

/// Validate the cancellation payload `{cancel_reason}`
pub fn validate_cancel_reason(body: &Value) -> Result<String> {
    require_string(body, "cancel_reason")
}

/// Parse a path id: base-10, strictly positive, within the `SERIAL` range
pub fn parse_request_id(raw: &str) -> Result<i32> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(HelpdeskError::validation(format!(
            "id must be a positive integer, got {raw:?}"
        ))),
    }
}

/// Parse a calendar date filter value
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        HelpdeskError::validation(format!("{field} must be a date in YYYY-MM-DD format"))
    })
}

/// Raw date filters extracted from the query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Filters that appeared more than once, in first-repeat order
    pub repeated: Vec<&'static str>,
}

impl ListParams {
    /// Extract the date filters from decoded query pairs
    ///
    /// Empty values count as absent and unknown parameters are ignored. A filter given
    /// more than once keeps its first value and is marked as repeated; the error is raised
    /// by [`ListParams::single`] only if that filter ends up being used.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            let (name, slot) = match key.as_str() {
                DATE_PARAM => (DATE_PARAM, &mut params.date),
                START_DATE_PARAM => (START_DATE_PARAM, &mut params.start_date),
                END_DATE_PARAM => (END_DATE_PARAM, &mut params.end_date),
                _ => continue,
            };

            if value.is_empty() {
                continue;
            }
            if slot.is_some() {
                if !params.repeated.contains(&name) {
                    params.repeated.push(name);
                }
                continue;
            }
            *slot = Some(value.clone());
        }

        params
    }

    /// Value of the filter `name` held in `slot`, rejecting one given more than once
    pub fn single<'a>(&self, name: &str, slot: &'a Option<String>) -> Result<Option<&'a str>> {
        if self.repeated.iter().any(|repeated| *repeated == name) {
            return Err(HelpdeskError::validation(format!(
                "{name} must be a single string"
            )));
        }
        Ok(slot.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }
}
