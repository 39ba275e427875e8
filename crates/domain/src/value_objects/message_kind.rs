//! Outbound message kinds and their fixed MIME types

use std::fmt;

use serde::{Deserialize, Serialize};

/// MIME types used by the media send operations
pub mod mime {
    pub const PDF: &str = "application/pdf";
    pub const DOCX: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
    pub const AUDIO_MPEG: &str = "audio/mpeg";
    pub const IMAGE_JPEG: &str = "image/jpeg";
    pub const VIDEO_MP4: &str = "video/mp4";
}

/// Kind of payload carried by an outbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Document,
    Audio,
    Image,
    Video,
}

impl MessageKind {
    /// The `mediatype` value the Evolution API expects for this kind
    ///
    /// Returns `None` for plain text, which is not a media message.
    pub const fn media_type(self) -> Option<&'static str> {
        match self {
            Self::Text => None,
            Self::Document => Some("document"),
            Self::Audio => Some("audio"),
            Self::Image => Some("image"),
            Self::Video => Some("video"),
        }
    }

    /// MIME type fixed for this kind, if any
    ///
    /// Documents carry a caller-supplied MIME type and return `None`.
    pub const fn fixed_mime_type(self) -> Option<&'static str> {
        match self {
            Self::Audio => Some(mime::AUDIO_MPEG),
            Self::Image => Some(mime::IMAGE_JPEG),
            Self::Video => Some(mime::VIDEO_MP4),
            Self::Text | Self::Document => None,
        }
    }

    /// Check if this kind carries a file attachment
    pub const fn is_media(self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Document => "document",
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Video => "video",
        };
        f.write_str(name)
    }
}
