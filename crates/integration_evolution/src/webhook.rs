//! Evolution API webhook payload
//!
//! Two shapes are accepted on the `messages-upsert` route: a flat
//! `{"phone": ..., "text": ...}` body, and the native Evolution
//! `messages.upsert` event carrying the message under `data`.

use domain::{DomainError, InboundMessage, PhoneNumber};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Webhook parsing errors
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Payload has no sender (expected `phone` or `data.key.remoteJid`)")]
    MissingSender,

    #[error("Invalid sender: {0}")]
    InvalidSender(#[from] DomainError),
}

/// Inbound webhook body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookPayload {
    /// Event name, e.g. "messages.upsert"
    #[serde(default)]
    pub event: Option<String>,
    /// Instance that received the message
    #[serde(default)]
    pub instance: Option<String>,
    /// Sender number in the flat payload shape
    #[serde(default)]
    pub phone: Option<String>,
    /// Message text in the flat payload shape
    #[serde(default)]
    pub text: Option<String>,
    /// Message data in the Evolution event shape
    #[serde(default)]
    pub data: Option<MessageData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageData {
    #[serde(default)]
    pub key: Option<MessageKey>,
    #[serde(default)]
    pub push_name: Option<String>,
    #[serde(default)]
    pub message: Option<MessageContent>,
    #[serde(default)]
    pub message_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageKey {
    #[serde(default)]
    pub remote_jid: Option<String>,
    #[serde(default)]
    pub from_me: bool,
    #[serde(default)]
    pub id: Option<String>,
    /// Actual author when `remote_jid` is a group
    #[serde(default)]
    pub participant: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContent {
    #[serde(default)]
    pub conversation: Option<String>,
    #[serde(default)]
    pub extended_text_message: Option<ExtendedTextMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtendedTextMessage {
    #[serde(default)]
    pub text: Option<String>,
}

impl MessageContent {
    fn text(&self) -> Option<&str> {
        self.conversation.as_deref().or_else(|| {
            self.extended_text_message
                .as_ref()
                .and_then(|ext| ext.text.as_deref())
        })
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

/// Extract the inbound message from a webhook payload
///
/// A flat `phone` is returned verbatim. For Evolution events the sender is
/// the user part of `remoteJid`, or of `participant` for group chats.
pub fn extract_inbound_message(payload: &WebhookPayload) -> Result<InboundMessage, WebhookError> {
    if let Some(phone) = non_blank(payload.phone.as_ref()) {
        let mut message = InboundMessage::from_sender(PhoneNumber::new(phone)?);
        message.text.clone_from(&payload.text);
        return Ok(message);
    }

    let data = payload.data.as_ref().ok_or(WebhookError::MissingSender)?;
    let key = data.key.as_ref().ok_or(WebhookError::MissingSender)?;
    let remote_jid = non_blank(key.remote_jid.as_ref()).ok_or(WebhookError::MissingSender)?;

    // A group JID is never a user; its sender is only known from `participant`
    let sender_jid = if remote_jid.ends_with("@g.us") {
        non_blank(key.participant.as_ref()).ok_or(WebhookError::MissingSender)?
    } else {
        remote_jid
    };

    debug!(
        event = ?payload.event,
        instance = ?payload.instance,
        message_type = ?data.message_type,
        "Parsed Evolution webhook event"
    );

    Ok(InboundMessage {
        sender: PhoneNumber::from_jid(sender_jid)?,
        text: data
            .message
            .as_ref()
            .and_then(MessageContent::text)
            .map(ToString::to_string),
        message_id: key.id.clone(),
        push_name: data.push_name.clone(),
        from_me: key.from_me,
    })
}
