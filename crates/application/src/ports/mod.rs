//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod messaging_port;

#[cfg(test)]
pub use messaging_port::MockMessagingPort;
pub use messaging_port::{MessagingPort, OutgoingMediaMessage, OutgoingTextMessage, SendReceipt};
