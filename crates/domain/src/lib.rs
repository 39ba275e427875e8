//! Domain layer for evoreply
//!
//! Contains the value objects, entities and errors shared by every other
//! crate. This layer has no I/O and no knowledge of the Evolution API wire format.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
