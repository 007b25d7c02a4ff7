//! Configuration management for the Atheneum client

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Connection parameters for the remote identity/store provider.
///
/// Supplied once at initialization and never re-read; there is no runtime
/// reconfiguration surface.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Base URL of the provider endpoint
    pub endpoint: String,
    /// Project identifier scoping every collection and account
    pub project_id: String,
    /// API key sent with every request
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub provider: ProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix ATHENEUM_)
            .add_source(
                Environment::with_prefix("ATHENEUM")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override the API key from PROVIDER_API_KEY env var if present
            .set_override_option(
                "provider.api_key",
                env::var("PROVIDER_API_KEY").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            project_id: "atheneum-dev".to_string(),
            api_key: "change-this-key-in-production".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
