//! Request validation
//!
//! Provides an `InboundWebhook` extractor that parses the webhook body and
//! extracts the inbound message, rejecting with a typed 400.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use domain::InboundMessage;
use integration_evolution::{WebhookPayload, extract_inbound_message};
use tracing::debug;

use crate::error::ApiError;

/// An inbound WhatsApp message extracted from the webhook body
///
/// # Example
///
/// ```ignore
/// async fn handler(InboundWebhook(message): InboundWebhook) {
///     // message.sender is always present
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InboundWebhook(pub InboundMessage);

impl<S> FromRequest<S> for InboundWebhook
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<WebhookPayload>::from_request(req, state)
            .await
            .inspect_err(|e| debug!(error = %e, "Rejected webhook body"))?;

        let message = extract_inbound_message(&payload)
            .inspect_err(|e| debug!(error = %e, "Webhook payload has no usable sender"))?;

        Ok(Self(message))
    }
}
