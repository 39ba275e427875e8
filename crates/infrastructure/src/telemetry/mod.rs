//! Logging and tracing setup
//!
//! Installs the global `tracing` subscriber used by the server binary.

mod subscriber;

pub use subscriber::{TelemetryError, build_env_filter, init_tracing};
