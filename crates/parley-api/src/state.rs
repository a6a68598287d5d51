//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use parley_chat::ChatService;
use parley_core::ParleyConfig;

/// Shared application state. Everything is immutable after startup, so
/// cloning per request only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub chat: ChatService,
    pub config: Arc<ParleyConfig>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(chat: ChatService, config: ParleyConfig) -> Self {
        Self {
            chat,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}
