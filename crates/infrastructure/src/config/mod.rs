//! Application configuration
//!
//! Values are layered: built-in defaults, then an optional `config.toml`,
//! then `EVOREPLY_*` environment variables, and finally the `EVO_*`
//! variables for the Evolution connection. A `.env` file in the working
//! directory is loaded into the environment first.

mod evolution;
mod server;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use evolution::EvolutionConfig;
pub use server::{LogFormat, ServerConfig};

/// Prefix for the general environment overrides, e.g. `EVOREPLY_SERVER__PORT`
pub const ENV_PREFIX: &str = "EVOREPLY";

/// Evolution settings read from dedicated environment variables
const EVOLUTION_ENV_OVERRIDES: [(&str, &str); 4] = [
    ("evolution.base_url", "EVO_BASE_URL"),
    ("evolution.api_token", "EVO_API_TOKEN"),
    ("evolution.instance_name", "EVO_INSTANCE_NAME"),
    ("evolution.instance_token", "EVO_INSTANCE_TOKEN"),
];

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Evolution API connection
    #[serde(default)]
    pub evolution: EvolutionConfig,
}

impl AppConfig {
    /// Load configuration from `.env`, `config.toml` and the process environment
    ///
    /// # Errors
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        load_dotenv();
        Self::load_from("config", std::env::vars().collect())
    }

    /// Load configuration from an explicit file and variable set
    ///
    /// `file` follows `config::File::with_name` and may omit the extension.
    /// A missing file is not an error. Empty `EVO_*` values are ignored.
    ///
    /// # Errors
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load_from(
        file: &str,
        vars: HashMap<String, String>,
    ) -> Result<Self, config::ConfigError> {
        let overrides: Vec<(&str, Option<String>)> = EVOLUTION_ENV_OVERRIDES
            .iter()
            .map(|(key, var)| (*key, vars.get(*var).filter(|v| !v.is_empty()).cloned()))
            .collect();

        let mut builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            // Load from file if exists
            .add_source(config::File::with_name(file).required(false))
            // Override with environment variables (e.g., EVOREPLY_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            );

        for (key, value) in overrides {
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {},
        Err(e) => warn!(error = %e, "Failed to load .env file"),
    }
}
