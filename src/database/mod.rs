//! # Database Operations
//!
//! Store access for the helpdesk core.
//!
//! ## Key Components
//!
//! - [`gateway`] - The [`StoreGateway`] contract: parameterized statements in, rows out
//! - [`postgres`] - [`PgStoreGateway`], the `sqlx`-backed implementation
//! - [`connection`] - Pool construction and embedded migrations
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use helpdesk_core::config::DatabaseConfig;
//! use helpdesk_core::database::{DatabaseConnection, PgStoreGateway};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = DatabaseConnection::connect(&DatabaseConfig::default()).await?;
//! let gateway = PgStoreGateway::new(db.pool().clone());
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod gateway;
pub mod postgres;

pub use connection::{DatabaseConnection, MIGRATOR};
pub use gateway::{SqlParam, Statement, StoreError, StoreGateway};
pub use postgres::PgStoreGateway;
