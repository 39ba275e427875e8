//! Value Objects - Immutable, identity-less domain primitives

mod message_kind;
mod phone_number;

pub use message_kind::{MessageKind, mime};
pub use phone_number::{PhoneNumber, USER_JID_SUFFIX};
