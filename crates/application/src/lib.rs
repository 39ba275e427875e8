//! Application layer - Use cases and orchestration
//!
//! Defines the messaging port and the services that drive it: the
//! `MessageSender` wrapper and the webhook auto-reply use case.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
