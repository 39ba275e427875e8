//! Evolution API connection settings.

use std::time::Duration;

use integration_evolution::EvolutionClientConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Evolution API configuration
///
/// Populated from `[evolution]` in `config.toml` and overridden by the
/// `EVO_BASE_URL`, `EVO_API_TOKEN`, `EVO_INSTANCE_NAME` and
/// `EVO_INSTANCE_TOKEN` environment variables.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Evolution API server root, e.g. `http://localhost:8080`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Global API token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_token: Option<SecretString>,

    /// Name of the WhatsApp instance
    #[serde(default)]
    pub instance_name: Option<String>,

    /// Per-instance token sent with every message (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub instance_token: Option<SecretString>,

    /// Request timeout in seconds (unset = no timeout)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for EvolutionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvolutionConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_token",
                &if self.api_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("instance_name", &self.instance_name)
            .field(
                "instance_token",
                &if self.instance_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl EvolutionConfig {
    /// Build the client configuration
    ///
    /// Missing values become empty strings; `EvolutionClient::new` rejects
    /// an empty base URL, instance name or instance token.
    #[must_use]
    pub fn to_client_config(&self) -> EvolutionClientConfig {
        EvolutionClientConfig {
            base_url: self.base_url.clone().unwrap_or_default(),
            api_token: expose(self.api_token.as_ref()),
            instance_name: self.instance_name.clone().unwrap_or_default(),
            instance_token: expose(self.instance_token.as_ref()),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

fn expose(secret: Option<&SecretString>) -> String {
    secret
        .map(|s| s.expose_secret().to_string())
        .unwrap_or_default()
}
