//! Evolution API client for sending messages
//!
//! Talks to the REST API of a self-hosted Evolution API server. Every send
//! is scoped to one instance and authenticated with the instance token.

use std::time::Duration;

use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Evolution API errors
#[derive(Debug, Error)]
pub enum EvolutionError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Evolution API client configuration
#[derive(Clone, Default)]
pub struct EvolutionClientConfig {
    /// Base URL of the Evolution API server (e.g. http://localhost:8080)
    pub base_url: String,
    /// Global API token, used for instance-level queries
    pub api_token: String,
    /// Instance name that owns the WhatsApp session
    pub instance_name: String,
    /// Token of that instance, sent with every message
    pub instance_token: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for EvolutionClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvolutionClientConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .field("instance_name", &self.instance_name)
            .field("instance_token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Text message request body
#[derive(Debug, Clone, Serialize)]
pub struct TextMessage {
    pub number: String,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentioned: Vec<String>,
}

impl TextMessage {
    #[must_use]
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: text.into(),
            mentioned: Vec::new(),
        }
    }
}

/// Media message descriptor, sent as multipart fields next to the file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMessage {
    pub number: String,
    pub mediatype: String,
    pub mimetype: String,
    pub caption: String,
    pub file_name: String,
}

/// WhatsApp voice/audio message descriptor
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioMessage {
    pub number: String,
    pub mimetype: String,
    pub file_name: String,
}

/// Connection state of an instance
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionState {
    pub instance: ConnectionInstance,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInstance {
    #[serde(default)]
    pub instance_name: String,
    pub state: String,
}

impl ConnectionState {
    /// Check if the WhatsApp session is connected
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.instance.state == "open"
    }
}

/// API error response
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    response: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: serde_json::Value,
}

/// Evolution API client bound to one instance
#[derive(Debug, Clone)]
pub struct EvolutionClient {
    client: Client,
    config: EvolutionClientConfig,
    base_url: String,
}

impl EvolutionClient {
    /// Create a new Evolution API client
    pub fn new(config: EvolutionClientConfig) -> Result<Self, EvolutionError> {
        if config.base_url.trim().is_empty() {
            return Err(EvolutionError::Configuration(
                "base_url is required".to_string(),
            ));
        }
        if config.instance_name.trim().is_empty() {
            return Err(EvolutionError::Configuration(
                "instance_name is required".to_string(),
            ));
        }
        if config.instance_token.trim().is_empty() {
            return Err(EvolutionError::Configuration(
                "instance_token is required".to_string(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client: builder.build()?,
            config,
            base_url,
        })
    }

    /// Name of the instance this client sends through
    #[must_use]
    pub fn instance_name(&self) -> &str {
        &self.config.instance_name
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/{action}/{}", self.base_url, self.config.instance_name)
    }

    /// Send a text message
    #[instrument(skip(self, message), fields(number = %message.number))]
    pub async fn send_text(
        &self,
        message: &TextMessage,
    ) -> Result<serde_json::Value, EvolutionError> {
        debug!(
            text_len = message.text.len(),
            mentions = message.mentioned.len(),
            "Sending Evolution text message"
        );

        let response = self
            .client
            .post(self.endpoint("message/sendText"))
            .header("apikey", &self.config.instance_token)
            .json(message)
            .send()
            .await?;

        handle_response(response).await
    }

    /// Send a media message, uploading the file as multipart form data
    #[instrument(skip(self, message, data), fields(number = %message.number, mediatype = %message.mediatype, size = data.len()))]
    pub async fn send_media(
        &self,
        message: &MediaMessage,
        data: Vec<u8>,
    ) -> Result<serde_json::Value, EvolutionError> {
        let file = Part::bytes(data)
            .file_name(message.file_name.clone())
            .mime_str(&message.mimetype)?;

        let form = Form::new()
            .text("number", message.number.clone())
            .text("mediatype", message.mediatype.clone())
            .text("mimetype", message.mimetype.clone())
            .text("caption", message.caption.clone())
            .text("fileName", message.file_name.clone())
            .part("file", file);

        debug!(file_name = %message.file_name, "Uploading Evolution media message");

        let response = self
            .client
            .post(self.endpoint("message/sendMedia"))
            .header("apikey", &self.config.instance_token)
            .multipart(form)
            .send()
            .await?;

        handle_response(response).await
    }

    /// Send an audio file as a WhatsApp voice message
    #[instrument(skip(self, message, data), fields(number = %message.number, size = data.len()))]
    pub async fn send_whatsapp_audio(
        &self,
        message: &AudioMessage,
        data: Vec<u8>,
    ) -> Result<serde_json::Value, EvolutionError> {
        let file = Part::bytes(data)
            .file_name(message.file_name.clone())
            .mime_str(&message.mimetype)?;

        let form = Form::new()
            .text("number", message.number.clone())
            .text("mediatype", "audio")
            .text("mimetype", message.mimetype.clone())
            .text("caption", "")
            .part("file", file);

        let response = self
            .client
            .post(self.endpoint("message/sendWhatsAppAudio"))
            .header("apikey", &self.config.instance_token)
            .multipart(form)
            .send()
            .await?;

        handle_response(response).await
    }

    /// Fetch the connection state of the instance
    #[instrument(skip(self))]
    pub async fn connection_state(&self) -> Result<ConnectionState, EvolutionError> {
        let api_key = if self.config.api_token.is_empty() {
            &self.config.instance_token
        } else {
            &self.config.api_token
        };

        let response = self
            .client
            .get(self.endpoint("instance/connectionState"))
            .header("apikey", api_key)
            .send()
            .await?;

        let value = handle_response(response).await?;
        serde_json::from_value(value).map_err(|e| {
            EvolutionError::InvalidResponse(format!("Unexpected connection state payload: {e}"))
        })
    }

    /// Check if the instance is reachable and its session is open
    pub async fn is_available(&self) -> bool {
        match self.connection_state().await {
            Ok(state) => state.is_open(),
            Err(e) => {
                warn!(error = %e, "Evolution API availability check failed");
                false
            },
        }
    }
}

async fn handle_response(response: Response) -> Result<serde_json::Value, EvolutionError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        return Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)));
    }

    Err(EvolutionError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Pull a readable message out of an Evolution error body
fn error_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) else {
        return body.to_string();
    };

    let detail = parsed.response.map(|r| match r.message {
        serde_json::Value::String(s) => s,
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map_or_else(|| item.to_string(), ToString::to_string))
            .collect::<Vec<_>>()
            .join("; "),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    });

    match (parsed.error, detail) {
        (Some(error), Some(detail)) if !detail.is_empty() => format!("{error}: {detail}"),
        (_, Some(detail)) if !detail.is_empty() => detail,
        (Some(error), _) => error,
        _ => body.to_string(),
    }
}
