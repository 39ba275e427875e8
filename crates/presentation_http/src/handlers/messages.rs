//! Evolution `messages-upsert` webhook handler
//!
//! Replies to every inbound message with the fixed greeting. The Evolution
//! API retries on non-2xx, so downstream send failures are logged and the
//! request still succeeds with an empty body.

use axum::{extract::State, http::StatusCode};
use tracing::{error, info, instrument};

use crate::{middleware::InboundWebhook, state::AppState};

/// Messages upsert webhook (POST)
#[instrument(
    skip(state, message),
    fields(sender = %message.sender, message_id = ?message.message_id)
)]
pub async fn messages_upsert(
    State(state): State<AppState>,
    InboundWebhook(message): InboundWebhook,
) -> StatusCode {
    info!(
        push_name = ?message.push_name,
        has_text = message.text.is_some(),
        "Inbound message received"
    );

    if let Err(e) = state.auto_reply.handle(&message).await {
        error!(error = %e, "Failed to send auto-reply");
    }

    StatusCode::OK
}
