//! Auto-reply use case for inbound webhook messages

use tracing::{debug, info, instrument};

use domain::InboundMessage;

use crate::{error::ApplicationError, ports::SendReceipt, services::MessageSender};

/// Reply sent to every inbound message
pub const AUTO_REPLY_TEXT: &str = "Olá, tudo bem?";

/// Answers each inbound message with a fixed greeting
#[derive(Debug, Clone)]
pub struct AutoReplyService {
    sender: MessageSender,
}

impl AutoReplyService {
    /// Create a new auto-reply service
    #[must_use]
    pub fn new(sender: MessageSender) -> Self {
        Self { sender }
    }

    /// Access the underlying sender
    #[must_use]
    pub const fn sender(&self) -> &MessageSender {
        &self.sender
    }

    /// Reply to an inbound message
    ///
    /// Messages sent by the connected account itself are skipped and
    /// return `Ok(None)`; replying to them would echo our own replies.
    #[instrument(skip(self, message), fields(sender = %message.sender))]
    pub async fn handle(
        &self,
        message: &InboundMessage,
    ) -> Result<Option<SendReceipt>, ApplicationError> {
        if message.from_me {
            debug!("Skipping message sent by this instance");
            return Ok(None);
        }

        let receipt = self
            .sender
            .send_text(&message.sender, AUTO_REPLY_TEXT, &[])
            .await?;

        info!(message_id = ?receipt.message_id, "Auto-reply sent");
        Ok(Some(receipt))
    }
}
