//! Data layer: the `Request` record and its creation payload.

pub mod request;

pub use request::{NewRequest, Request, REQUEST_COLUMNS};
