pub mod request_service;

pub use request_service::{BulkCancelOutcome, RequestService};
