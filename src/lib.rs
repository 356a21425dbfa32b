#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Helpdesk Core
//!
//! Request-tracking backend: users submit requests, operators move them through a small
//! lifecycle, and anyone can list them filtered by creation date.
//!
//! ## Lifecycle
//!
//! ```text
//! new ──start──▶ in_progress ──complete──▶ completed
//!  │                 │
//!  └────cancel───────┴──────cancel──────▶ canceled
//! ```
//!
//! A completed request carries a `resolution`, a canceled one a `cancel_reason`, and no
//! request ever carries both. Transitions are applied with a status-guarded `UPDATE`, so
//! two operators racing on the same request cannot skip a state.
//!
//! ## Module Organization
//!
//! - [`models`] - The `Request` record and creation payload
//! - [`state_machine`] - States, events and the transition decision
//! - [`query_builder`] - Listing filters and every statement sent to the store
//! - [`database`] - The [`database::StoreGateway`] contract and its PostgreSQL implementation
//! - [`services`] - [`RequestService`], the lifecycle engine
//! - [`validation`] - Turning raw input into typed values
//! - [`web`] - Axum routes, handlers and error mapping
//! - [`config`] - Layered configuration
//! - [`logging`] - Structured logging setup
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use helpdesk_core::config::ConfigManager;
//! use helpdesk_core::database::{DatabaseConnection, PgStoreGateway};
//! use helpdesk_core::web::{create_app, AppState};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigManager::load()?.into_config();
//! let db = DatabaseConnection::connect(&config.database).await?;
//! let gateway = Arc::new(PgStoreGateway::new(db.pool().clone()));
//!
//! let app = create_app(AppState::from_config(&config, gateway));
//! let listener = tokio::net::TcpListener::bind(config.web.socket_addr()?).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests, no database required
//! cargo test          # Everything; database tests need DATABASE_URL
//! ```

pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod query_builder;
pub mod services;
pub mod state_machine;
pub mod validation;
pub mod web;

pub use config::{ConfigManager, HelpdeskConfig};
pub use error::{HelpdeskError, Result};
pub use models::{NewRequest, Request};
pub use query_builder::RequestFilter;
pub use services::{BulkCancelOutcome, RequestService};
pub use state_machine::{RequestEvent, RequestState, TransitionPolicy};
