//! evoreply HTTP presentation layer
//!
//! Exposes the `messages-upsert` webhook that the Evolution API calls for
//! every inbound WhatsApp message.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::InboundWebhook;
pub use routes::create_router;
pub use state::AppState;
