//! HTTP middleware components
//!
//! Request extractors that turn raw bodies into domain values.

pub mod validation;

pub use validation::InboundWebhook;
