//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod evolution_adapter;

pub use evolution_adapter::EvolutionMessagingAdapter;
