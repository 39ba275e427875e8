//! Evolution API messaging adapter
//!
//! Implements the `MessagingPort` trait using the Evolution integration crate.

use application::error::ApplicationError;
use application::ports::{MessagingPort, OutgoingMediaMessage, OutgoingTextMessage, SendReceipt};
use async_trait::async_trait;
use domain::{MessageKind, PhoneNumber};
use integration_evolution::{
    AudioMessage, EvolutionClient, EvolutionClientConfig, EvolutionError, MediaMessage,
    TextMessage,
};
use tracing::{debug, instrument};

/// Adapter that implements `MessagingPort` using `EvolutionClient`
#[derive(Debug, Clone)]
pub struct EvolutionMessagingAdapter {
    /// The underlying Evolution client
    client: EvolutionClient,
}

impl EvolutionMessagingAdapter {
    /// Create a new Evolution messaging adapter
    ///
    /// # Errors
    /// Returns an error if the client configuration is invalid.
    pub fn new(config: EvolutionClientConfig) -> Result<Self, EvolutionError> {
        Ok(Self {
            client: EvolutionClient::new(config)?,
        })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn from_client(client: EvolutionClient) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client for advanced operations
    #[must_use]
    pub const fn client(&self) -> &EvolutionClient {
        &self.client
    }
}

fn map_error(context: &str, error: EvolutionError) -> ApplicationError {
    match error {
        EvolutionError::Configuration(msg) => ApplicationError::Configuration(msg),
        e => ApplicationError::ExternalService(format!("Evolution {context} failed: {e}")),
    }
}

#[async_trait]
impl MessagingPort for EvolutionMessagingAdapter {
    #[instrument(skip(self, message), fields(recipient = %message.recipient))]
    async fn send_text(&self, message: OutgoingTextMessage) -> Result<SendReceipt, ApplicationError> {
        let mut request = TextMessage::new(message.recipient.as_str(), message.text);
        request.mentioned = message
            .mentions
            .iter()
            .map(PhoneNumber::as_str)
            .map(ToString::to_string)
            .collect();

        let response = self
            .client
            .send_text(&request)
            .await
            .map_err(|e| map_error("text send", e))?;

        let receipt = SendReceipt::from_response(MessageKind::Text, response);
        debug!(message_id = ?receipt.message_id, "Evolution text message sent");
        Ok(receipt)
    }

    #[instrument(
        skip(self, message),
        fields(recipient = %message.recipient, kind = %message.kind, size = message.data.len())
    )]
    async fn send_media(
        &self,
        message: OutgoingMediaMessage,
    ) -> Result<SendReceipt, ApplicationError> {
        let kind = message.kind;

        let response = if kind == MessageKind::Audio {
            let request = AudioMessage {
                number: message.recipient.as_str().to_string(),
                mimetype: message.mime_type,
                file_name: message.file_name,
            };
            self.client
                .send_whatsapp_audio(&request, message.data)
                .await
                .map_err(|e| map_error("audio send", e))?
        } else {
            let request = MediaMessage {
                number: message.recipient.as_str().to_string(),
                mediatype: message.media_type().to_string(),
                mimetype: message.mime_type,
                caption: message.caption,
                file_name: message.file_name,
            };
            self.client
                .send_media(&request, message.data)
                .await
                .map_err(|e| map_error("media send", e))?
        };

        let receipt = SendReceipt::from_response(kind, response);
        debug!(message_id = ?receipt.message_id, "Evolution media message sent");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EvolutionClientConfig {
        EvolutionClientConfig {
            base_url: "http://localhost:8080".to_string(),
            api_token: String::new(),
            instance_name: "sandeco".to_string(),
            instance_token: "token".to_string(),
            timeout: None,
        }
    }

    #[test]
    fn new_rejects_incomplete_config() {
        let result = EvolutionMessagingAdapter::new(EvolutionClientConfig::default());
        assert!(matches!(result, Err(EvolutionError::Configuration(_))));
    }

    #[test]
    fn client_accessor_exposes_instance() {
        let adapter = EvolutionMessagingAdapter::new(config()).unwrap();
        assert_eq!(adapter.client().instance_name(), "sandeco");
    }

    #[test]
    fn configuration_error_maps_to_configuration() {
        let err = map_error("text send", EvolutionError::Configuration("x".to_string()));
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn api_error_maps_to_external_service() {
        let err = map_error(
            "media send",
            EvolutionError::Api {
                status: 401,
                message: "Unauthorized".to_string(),
            },
        );
        let ApplicationError::ExternalService(msg) = err else {
            unreachable!("Expected ExternalService");
        };
        assert!(msg.contains("media send"));
        assert!(msg.contains("401"));
    }

    #[test]
    fn adapter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EvolutionMessagingAdapter>();
    }
}
