//! # Web API Handlers
//!
//! Request handlers grouped by resource.

pub mod health;
pub mod requests;
