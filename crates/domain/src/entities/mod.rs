//! Domain entities

mod inbound_message;

pub use inbound_message::InboundMessage;
