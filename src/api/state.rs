use crate::chat::{CompletionRelay, TranscriptStore};
use crate::core::AppConfig;

pub struct AppState {
    // Single conversation shared by every request
    pub transcript: TranscriptStore,
    pub relay: CompletionRelay,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            transcript: TranscriptStore::new(),
            relay: CompletionRelay::from_config(&config),
            config,
        }
    }
}
