mod core;
mod models;
mod relay;
mod store;

pub use self::core::next_turn;
pub use models::Transcript;
pub use relay::CompletionRelay;
pub use store::{TranscriptStore, Turn};
