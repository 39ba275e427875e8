//! Application services

mod auto_reply_service;
mod message_sender;

pub use auto_reply_service::{AUTO_REPLY_TEXT, AutoReplyService};
pub use message_sender::MessageSender;
