//! Application state shared across handlers

use std::sync::Arc;

use application::AutoReplyService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Auto-reply use case for inbound messages
    pub auto_reply: Arc<AutoReplyService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state from its parts
    #[must_use]
    pub fn new(auto_reply: AutoReplyService, config: AppConfig) -> Self {
        Self {
            auto_reply: Arc::new(auto_reply),
            config: Arc::new(config),
        }
    }
}
