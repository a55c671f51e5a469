use std::time::Duration;

use crate::core::AppConfig;
use crate::openai::{Message, RelayError, Role, completion};

/// Relays a user message plus the conversation so far to the
/// completion API and hands back the assistant's reply.
#[derive(Clone, Debug)]
pub struct CompletionRelay {
    api_hostname: String,
    api_key: String,
    model: String,
    system_message: String,
    timeout: Duration,
}

impl CompletionRelay {
    pub fn new(api_hostname: &str, api_key: &str, model: &str, system_message: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            system_message: system_message.to_string(),
            timeout: Duration::from_secs(60 * 10),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.api_hostname,
            &config.api_key,
            &config.model,
            &config.system_message,
        )
        .timeout(config.request_timeout)
    }

    /// The outbound message list: system prompt, the transcript in
    /// order, then the new user message.
    pub fn messages(&self, user_input: &str, transcript: &[Message]) -> Vec<Message> {
        let mut messages = Vec::with_capacity(transcript.len() + 2);
        messages.push(Message::new(Role::System, &self.system_message));
        messages.extend_from_slice(transcript);
        messages.push(Message::new(Role::User, user_input));
        messages
    }

    pub async fn complete(
        &self,
        user_input: &str,
        transcript: &[Message],
    ) -> Result<String, RelayError> {
        let messages = self.messages(user_input, transcript);

        tracing::debug!(
            "Requesting completion from {} with {} messages",
            self.model,
            messages.len()
        );

        let resp = completion(
            &messages,
            &self.api_hostname,
            &self.api_key,
            &self.model,
            self.timeout,
        )
        .await?;

        resp.first_content()
    }
}
