//! Inbound message entity

use serde::{Deserialize, Serialize};

use crate::value_objects::PhoneNumber;

/// A message event received from the messaging platform
///
/// Lives for the duration of a single webhook request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Sender of the message
    pub sender: PhoneNumber,
    /// Text content, when the message carries any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Platform message ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Display name of the sender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_name: Option<String>,
    /// Whether the message was sent by the connected account itself
    #[serde(default)]
    pub from_me: bool,
}

impl InboundMessage {
    /// Create an inbound message with only the sender set
    #[must_use]
    pub fn from_sender(sender: PhoneNumber) -> Self {
        Self {
            sender,
            text: None,
            message_id: None,
            push_name: None,
            from_me: false,
        }
    }

    /// Attach text content
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}
