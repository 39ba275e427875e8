//! Evolution API integration
//!
//! Sends WhatsApp messages through an Evolution API instance and parses
//! the `messages.upsert` webhook it delivers.

pub mod client;
pub mod webhook;

pub use client::{
    AudioMessage, ConnectionState, EvolutionClient, EvolutionClientConfig, EvolutionError,
    MediaMessage, TextMessage,
};
pub use webhook::{WebhookError, WebhookPayload, extract_inbound_message};
