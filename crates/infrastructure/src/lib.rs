//! Infrastructure layer - Configuration, logging and adapters
//!
//! Wires the application ports to the Evolution API client and loads the
//! runtime configuration.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::EvolutionMessagingAdapter;
pub use config::{AppConfig, EvolutionConfig, LogFormat, ServerConfig};
pub use telemetry::{TelemetryError, init_tracing};
