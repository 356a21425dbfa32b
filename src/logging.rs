//! # Structured Logging Module
//!
//! Environment-aware structured logging: readable console output while developing,
//! JSON lines in production.

use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
///
/// `RUST_LOG` takes precedence over the level derived from `environment`.
pub fn init_structured_logging(environment: &str) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(environment)));

        let layer = if uses_json_output(environment) {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(false)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(true)
                .with_filter(filter)
                .boxed()
        };

        // Use try_init to avoid panic if global subscriber already set
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized, keeping it");
        }

        tracing::info!(
            pid = std::process::id(),
            environment = %environment,
            json = uses_json_output(environment),
            "🔧 STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Get current environment from environment variables
pub fn get_environment() -> String {
    environment_from(|name| std::env::var(name).ok())
}

/// Resolve the environment name: `HELPDESK_ENV`, then `APP_ENV`, then `development`
fn environment_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("HELPDESK_ENV")
        .or_else(|| lookup("APP_ENV"))
        .unwrap_or_else(|| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

fn uses_json_output(environment: &str) -> bool {
    environment == "production"
}

/// Log structured data for request lifecycle operations
pub fn log_request_operation(
    operation: &str,
    request_id: Option<i32>,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        request_id = request_id,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "📋 REQUEST_OPERATION"
    );
}

/// Log error with full context
pub fn log_error(component: &str, operation: &str, error: &str, context: Option<&str>) {
    tracing::error!(
        component = %component,
        operation = %operation,
        error = %error,
        context = context,
        timestamp = %Utc::now().to_rfc3339(),
        "❌ ERROR"
    );
}
