//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::api::public::{ErrorDetail, ErrorKind};
use crate::openai::{Message, RelayError};

#[derive(Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub response: String,
    // Only present when the completion API failed, so clients can tell
    // an error apart from something the assistant actually said
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl ChatResponse {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.into(),
            error: None,
        }
    }

    pub fn failed(err: &RelayError) -> Self {
        Self {
            response: format!("An error occurred: {}", err),
            error: Some(ErrorDetail {
                kind: ErrorKind::Upstream,
                message: err.to_string(),
            }),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Serialize, Deserialize)]
pub struct ChatTranscriptResponse {
    pub transcript: Vec<Message>,
}
