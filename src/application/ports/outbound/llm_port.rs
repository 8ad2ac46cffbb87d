//! LLM port - Interface for chat-completion model providers

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single message in a chat-completion conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// A request to a chat-completion provider
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub messages: Vec<ChatMessage>,
    pub system_prompt: Option<String>,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Ask the provider for structured JSON-object output where supported
    pub json_output: bool,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            system_prompt: None,
            temperature: 0.7,
            max_tokens: None,
            json_output: false,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_json_output(mut self, json_output: bool) -> Self {
        self.json_output = json_output;
        self
    }
}

/// A response from a chat-completion provider
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Raw text of the reply, unmodified
    pub content: String,
    /// Model that produced the reply
    pub model: String,
    pub tokens_used: u32,
}

/// Interface for LLM providers
#[async_trait]
pub trait LlmPort: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a chat-completion request and return the raw response
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_every_request_knob() {
        let request = LlmRequest::new(vec![ChatMessage::user("pick outfits")])
            .with_system_prompt("be brief")
            .with_temperature(0.2)
            .with_max_tokens(Some(256))
            .with_json_output(true);

        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.system_prompt.as_deref(), Some("be brief"));
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_tokens, Some(256));
        assert!(request.json_output);
    }

    #[test]
    fn a_new_request_defaults_to_plain_text_output() {
        let request = LlmRequest::new(vec![ChatMessage::user("hello")]);
        assert!(request.system_prompt.is_none());
        assert!(request.max_tokens.is_none());
        assert!(!request.json_output);
    }
}
