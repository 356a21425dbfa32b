//! Configuration Loader
//!
//! Layers defaults, an optional TOML file and environment overrides with the `config`
//! crate, then validates the result.

use super::HelpdeskConfig;
use crate::error::Result;
use config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the optional configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/helpdesk.toml";

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "HELPDESK_CONFIG_PATH";

/// Prefix for `HELPDESK__SECTION__KEY` overrides
pub const ENV_PREFIX: &str = "HELPDESK";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: HelpdeskConfig,
    source_file: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the process environment
    ///
    /// An explicitly named file (`HELPDESK_CONFIG_PATH`) must exist; the default
    /// `config/helpdesk.toml` is optional.
    pub fn load() -> Result<Self> {
        let (path, required) = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => (PathBuf::from(path), true),
            Err(_) => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        Self::load_with(
            Some((&path, required)),
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
            env::var("DATABASE_URL").ok(),
        )
    }

    /// Load from explicit sources; used directly by tests to avoid touching process state
    pub fn load_with(
        file: Option<(&Path, bool)>,
        environment: Environment,
        database_url: Option<String>,
    ) -> Result<Self> {
        let mut builder =
            Config::builder().add_source(Config::try_from(&HelpdeskConfig::default())?);

        let mut source_file = None;
        if let Some((path, required)) = file {
            if required || path.exists() {
                debug!(path = %path.display(), "Loading configuration file");
                source_file = Some(path.to_path_buf());
            }
            builder = builder.add_source(File::from(path).required(required));
        }

        let config: HelpdeskConfig = builder
            .add_source(environment)
            .set_override_option("database.url", database_url)?
            .build()?
            .try_deserialize()?;

        config.validate()?;

        let manager = Self {
            config,
            source_file,
        };
        info!(
            environment = %manager.config.environment,
            bind_address = %manager.config.web.bind_address,
            database_url = %manager.redacted_database_url(),
            strict_transitions = manager.config.lifecycle.strict_transitions,
            "Configuration loaded successfully"
        );
        Ok(manager)
    }

    pub fn from_config(config: HelpdeskConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source_file: None,
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &HelpdeskConfig {
        &self.config
    }

    pub fn into_config(self) -> HelpdeskConfig {
        self.config
    }

    /// File the configuration was read from, if any
    pub fn source_file(&self) -> Option<&Path> {
        self.source_file.as_deref()
    }

    /// Database URL with the password masked, safe for logs
    pub fn redacted_database_url(&self) -> String {
        redact_url_password(&self.config.database.url)
    }
}

fn redact_url_password(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:****@{host}"),
        None => url.to_string(),
    }
}
