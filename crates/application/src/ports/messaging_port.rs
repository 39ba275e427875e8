//! Messaging port - capability interface for outbound sends
//!
//! The application layer only ever talks to the messaging platform through
//! this trait, so services can be exercised against a recording substitute.

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::{MessageKind, PhoneNumber};
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// An outgoing text message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingTextMessage {
    /// Recipient's phone number
    pub recipient: PhoneNumber,
    /// Text content
    pub text: String,
    /// Numbers mentioned in the message
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<PhoneNumber>,
}

impl OutgoingTextMessage {
    /// Create a new outgoing text message
    #[must_use]
    pub fn new(recipient: PhoneNumber, text: impl Into<String>) -> Self {
        Self {
            recipient,
            text: text.into(),
            mentions: Vec::new(),
        }
    }

    /// Mention the given numbers
    #[must_use]
    pub fn with_mentions(mut self, mentions: Vec<PhoneNumber>) -> Self {
        self.mentions = mentions;
        self
    }
}

/// An outgoing media message with its file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMediaMessage {
    /// Recipient's phone number
    pub recipient: PhoneNumber,
    /// Media kind (document, audio, image, video)
    pub kind: MessageKind,
    /// MIME type of the attachment
    pub mime_type: String,
    /// Caption shown below the media (may be empty)
    pub caption: String,
    /// File name presented to the recipient
    pub file_name: String,
    /// Raw file bytes
    pub data: Vec<u8>,
}

impl OutgoingMediaMessage {
    /// Create a new outgoing media message without caption
    #[must_use]
    pub fn new(
        recipient: PhoneNumber,
        kind: MessageKind,
        mime_type: impl Into<String>,
        file_name: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            recipient,
            kind,
            mime_type: mime_type.into(),
            caption: String::new(),
            file_name: file_name.into(),
            data,
        }
    }

    /// Set the caption
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// The `mediatype` field for the Evolution API
    pub fn media_type(&self) -> &'static str {
        self.kind.media_type().unwrap_or("document")
    }
}

/// Result of a successful send
///
/// Every send operation returns this shape. `response` holds the
/// downstream body unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendReceipt {
    /// Kind of message that was sent
    pub kind: MessageKind,
    /// Message ID assigned by the platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Delivery status reported at send time (e.g. "PENDING")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Raw downstream response
    pub response: serde_json::Value,
}

impl SendReceipt {
    /// Build a receipt from a downstream JSON response
    ///
    /// Picks up `key.id` and `status` when the platform returns them.
    #[must_use]
    pub fn from_response(kind: MessageKind, response: serde_json::Value) -> Self {
        let message_id = response
            .pointer("/key/id")
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string);
        let status = response
            .get("status")
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string);

        Self {
            kind,
            message_id,
            status,
            response,
        }
    }
}

/// Outbound messaging capability
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessagingPort: Send + Sync {
    /// Send a plain text message
    async fn send_text(&self, message: OutgoingTextMessage)
    -> Result<SendReceipt, ApplicationError>;

    /// Send a media message with an attached file
    async fn send_media(
        &self,
        message: OutgoingMediaMessage,
    ) -> Result<SendReceipt, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_phone() -> PhoneNumber {
        PhoneNumber::new("5511999998888").unwrap()
    }

    mod outgoing_text_message_tests {
        use super::*;

        #[test]
        fn new_has_no_mentions() {
            let msg = OutgoingTextMessage::new(test_phone(), "Hello");
            assert_eq!(msg.text, "Hello");
            assert!(msg.mentions.is_empty());
        }

        #[test]
        fn with_mentions_sets_numbers() {
            let other = PhoneNumber::new("5511888887777").unwrap();
            let msg = OutgoingTextMessage::new(test_phone(), "Hi").with_mentions(vec![other]);
            assert_eq!(msg.mentions.len(), 1);
        }

        #[test]
        fn serialization_skips_empty_mentions() {
            let msg = OutgoingTextMessage::new(test_phone(), "Hi");
            let json = serde_json::to_string(&msg).unwrap();
            assert!(!json.contains("mentions"));
        }
    }

    mod outgoing_media_message_tests {
        use super::*;

        #[test]
        fn new_has_empty_caption() {
            let msg = OutgoingMediaMessage::new(
                test_phone(),
                MessageKind::Image,
                "image/jpeg",
                "photo.jpg",
                vec![1, 2, 3],
            );
            assert!(msg.caption.is_empty());
            assert_eq!(msg.media_type(), "image");
        }

        #[test]
        fn with_caption_sets_caption() {
            let msg = OutgoingMediaMessage::new(
                test_phone(),
                MessageKind::Document,
                "application/pdf",
                "report.pdf",
                Vec::new(),
            )
            .with_caption("Monthly report");
            assert_eq!(msg.caption, "Monthly report");
            assert_eq!(msg.media_type(), "document");
        }
    }

    mod send_receipt_tests {
        use super::*;

        #[test]
        fn extracts_id_and_status() {
            let response = serde_json::json!({
                "key": {
                    "remoteJid": "5511999998888@s.whatsapp.net",
                    "fromMe": true,
                    "id": "BAE594145F4C59B4"
                },
                "status": "PENDING"
            });
            let receipt = SendReceipt::from_response(MessageKind::Text, response.clone());
            assert_eq!(receipt.message_id.as_deref(), Some("BAE594145F4C59B4"));
            assert_eq!(receipt.status.as_deref(), Some("PENDING"));
            assert_eq!(receipt.response, response);
        }

        #[test]
        fn tolerates_unknown_shape() {
            let receipt =
                SendReceipt::from_response(MessageKind::Audio, serde_json::json!({"ok": true}));
            assert!(receipt.message_id.is_none());
            assert!(receipt.status.is_none());
        }
    }
}
