//! Message sender
//!
//! High-level "send X to number N" operations on top of a `MessagingPort`.
//! Media operations read the file from local disk and fail before any
//! network call when it is missing.

use std::{io::ErrorKind, path::Path, sync::Arc};

use domain::{DomainError, MessageKind, PhoneNumber, mime};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{MessagingPort, OutgoingMediaMessage, OutgoingTextMessage, SendReceipt},
};

/// Sends text and media messages through the configured messaging port
#[derive(Clone)]
pub struct MessageSender {
    port: Arc<dyn MessagingPort>,
}

impl std::fmt::Debug for MessageSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageSender").finish_non_exhaustive()
    }
}

impl MessageSender {
    /// Create a new sender over the given port
    #[must_use]
    pub fn new(port: Arc<dyn MessagingPort>) -> Self {
        Self { port }
    }

    /// Send a plain text message, optionally mentioning other numbers
    #[instrument(skip(self, message, mentions), fields(number = %number))]
    pub async fn send_text(
        &self,
        number: &PhoneNumber,
        message: &str,
        mentions: &[PhoneNumber],
    ) -> Result<SendReceipt, ApplicationError> {
        let outgoing =
            OutgoingTextMessage::new(number.clone(), message).with_mentions(mentions.to_vec());

        debug!(text_len = message.len(), mentions = mentions.len(), "Sending text message");
        self.port.send_text(outgoing).await
    }

    /// Send a document with an explicit MIME type
    pub async fn send_document(
        &self,
        number: &PhoneNumber,
        file_path: impl AsRef<Path>,
        mime_type: &str,
        caption: &str,
    ) -> Result<SendReceipt, ApplicationError> {
        self.send_file(number, MessageKind::Document, file_path.as_ref(), mime_type, caption)
            .await
    }

    /// Send a PDF document
    pub async fn send_pdf(
        &self,
        number: &PhoneNumber,
        file_path: impl AsRef<Path>,
        caption: &str,
    ) -> Result<SendReceipt, ApplicationError> {
        self.send_document(number, file_path, mime::PDF, caption).await
    }

    /// Send a Word (.docx) document
    pub async fn send_word_document(
        &self,
        number: &PhoneNumber,
        file_path: impl AsRef<Path>,
        caption: &str,
    ) -> Result<SendReceipt, ApplicationError> {
        self.send_document(number, file_path, mime::DOCX, caption).await
    }

    /// Send an MP3 audio file
    pub async fn send_audio(
        &self,
        number: &PhoneNumber,
        file_path: impl AsRef<Path>,
    ) -> Result<SendReceipt, ApplicationError> {
        self.send_file(number, MessageKind::Audio, file_path.as_ref(), mime::AUDIO_MPEG, "")
            .await
    }

    /// Send a JPEG image
    pub async fn send_image(
        &self,
        number: &PhoneNumber,
        file_path: impl AsRef<Path>,
        caption: &str,
    ) -> Result<SendReceipt, ApplicationError> {
        self.send_file(number, MessageKind::Image, file_path.as_ref(), mime::IMAGE_JPEG, caption)
            .await
    }

    /// Send an MP4 video
    pub async fn send_video(
        &self,
        number: &PhoneNumber,
        file_path: impl AsRef<Path>,
        caption: &str,
    ) -> Result<SendReceipt, ApplicationError> {
        self.send_file(number, MessageKind::Video, file_path.as_ref(), mime::VIDEO_MP4, caption)
            .await
    }

    #[instrument(skip(self, caption), fields(number = %number, kind = %kind, path = %path.display()))]
    async fn send_file(
        &self,
        number: &PhoneNumber,
        kind: MessageKind,
        path: &Path,
        mime_type: &str,
        caption: &str,
    ) -> Result<SendReceipt, ApplicationError> {
        let data = match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ApplicationError::file_not_found(path));
            },
            Err(e) => return Err(e.into()),
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                DomainError::ValidationError(format!("{} has no file name", path.display()))
            })?;

        debug!(file_name = %file_name, size = data.len(), "Sending media message");

        let outgoing = OutgoingMediaMessage::new(number.clone(), kind, mime_type, file_name, data)
            .with_caption(caption);

        self.port.send_media(outgoing).await
    }
}
