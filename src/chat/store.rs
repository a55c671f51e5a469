//! Process wide transcript shared by every request.
//!
//! There is a single conversation for the whole process, it is not
//! keyed by user or session. Turns are serialized by their own lock so
//! concurrent requests can't interleave half a turn into the history,
//! while the transcript itself is only locked long enough to copy or
//! push messages. Readers never wait on a turn's network call.
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use super::models::Transcript;
use crate::openai::Message;

#[derive(Clone, Default)]
pub struct TranscriptStore {
    transcript: Arc<Mutex<Transcript>>,
    turn_lock: Arc<Mutex<()>>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message to the end of the transcript. Unbounded.
    pub async fn append(&self, msg: Message) {
        self.transcript.lock().await.push(msg);
    }

    /// Current messages in conversation order.
    pub async fn snapshot(&self) -> Vec<Message> {
        self.transcript.lock().await.messages()
    }

    pub async fn len(&self) -> usize {
        self.transcript.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.transcript.lock().await.is_empty()
    }

    /// Start a chat turn. Other turns wait until the returned `Turn`
    /// is dropped, reads of the transcript do not.
    pub async fn turn(&self) -> Turn {
        Turn {
            _guard: Arc::clone(&self.turn_lock).lock_owned().await,
            transcript: Arc::clone(&self.transcript),
        }
    }
}

pub struct Turn {
    _guard: OwnedMutexGuard<()>,
    transcript: Arc<Mutex<Transcript>>,
}

impl Turn {
    pub async fn snapshot(&self) -> Vec<Message> {
        self.transcript.lock().await.messages()
    }

    /// Record a completed exchange. Both messages are written under
    /// one lock so the transcript always alternates user then
    /// assistant.
    pub async fn record(&mut self, user: Message, assistant: Message) {
        let mut transcript = self.transcript.lock().await;
        transcript.push(user);
        transcript.push(assistant);
    }
}
