//! # Query Builder System
//!
//! Builds every statement the helpdesk core sends to the store.
//!
//! ## Key Components
//!
//! - [`filter`] - [`RequestFilter`], the closed set of listing filters and their precedence
//! - [`builder`] - [`RequestQuery`], the exhaustive filter → statement mapping
//! - [`statements`] - [`RequestStatements`], insert/lookup/transition/bulk-cancel statements
//!
//! ## Example Usage
//!
//! ```rust
//! use helpdesk_core::query_builder::{RequestFilter, RequestQuery};
//! use helpdesk_core::validation::ListParams;
//!
//! let params = ListParams {
//!     date: Some("2024-01-15".to_string()),
//!     ..Default::default()
//! };
//! let filter = RequestFilter::from_params(&params).unwrap();
//! let statement = RequestQuery::for_filter(&filter);
//! assert!(statement.sql.contains("created_at::date = $1"));
//! ```
//!
//! Values are always bound, never interpolated into the SQL text.

pub mod builder;
pub mod filter;
pub mod statements;

pub use builder::RequestQuery;
pub use filter::RequestFilter;
pub use statements::RequestStatements;
