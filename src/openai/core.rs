use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::error::RelayError;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

// Only the fields we read are modelled, everything else in the
// response (id, usage, logprobs, x_groq, etc.) is ignored.
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl CompletionResponse {
    /// Text of the first completion choice, trimmed. Missing or
    /// blank content is treated as no response at all.
    pub fn first_content(&self) -> Result<String, RelayError> {
        let content = self
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .ok_or(RelayError::EmptyResponse)?;

        if content.is_empty() {
            return Err(RelayError::EmptyResponse);
        }

        Ok(content.to_string())
    }
}

// {"error": {"message": "Invalid API Key", "type": "invalid_request_error", "code": "invalid_api_key"}}
#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    error: ApiErrorDetail,
}

impl ApiErrorBody {
    /// Pull the human readable message out of an error response,
    /// falling back to the raw body when it isn't the usual shape.
    pub fn message_from(body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| body.trim().to_string())
    }
}

/// Send a single chat completion request to an OpenAI compatible
/// API. No retries, no streaming.
pub async fn completion(
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
    timeout: Duration,
) -> Result<CompletionResponse, RelayError> {
    let payload = json!({
        "model": model,
        "messages": messages,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(timeout)
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RelayError::Status {
            status: status.as_u16(),
            message: ApiErrorBody::message_from(&body),
        });
    }

    let response = response.json::<CompletionResponse>().await?;

    Ok(response)
}
