//! Groq client - OpenAI-compatible chat completions for the stylist model

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{LlmPort, LlmRequest, LlmResponse, MessageRole};

/// One model call per user action, so the timeout is the whole budget for it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Groq chat-completions API
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GroqClient {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn chat(&self, request: &LlmRequest) -> Result<LlmResponse, GroqError> {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = &request.system_prompt {
            messages.push(WireMessage {
                role: "system",
                content: system.clone(),
            });
        }
        for message in &request.messages {
            messages.push(WireMessage {
                role: match message.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                },
                content: message.content.clone(),
            });
        }

        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_output.then(|| ResponseFormat {
                r#type: "json_object",
            }),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GroqError::Api(format!("{status}: {error_text}")));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GroqError::Api("response contained no choices".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content.unwrap_or_default(),
            model: completion.model.unwrap_or_else(|| self.model.clone()),
            tokens_used: completion
                .usage
                .map(|usage| usage.total_tokens)
                .unwrap_or(0),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GroqError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Groq API error: {0}")]
    Api(String),
}

#[async_trait]
impl LlmPort for GroqClient {
    type Error = GroqError;

    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error> {
        self.chat(&request).await
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    r#type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    model: Option<String>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_output_mode_requests_a_json_object() {
        let request = ChatCompletionRequest {
            model: "deepseek-r1-distill-llama-70b",
            messages: vec![WireMessage {
                role: "user",
                content: "pick outfits".to_string(),
            }],
            temperature: 0.3,
            max_tokens: None,
            response_format: Some(ResponseFormat {
                r#type: "json_object",
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.3).abs() < 1e-6);
        assert!(value.get("max_tokens").is_none());
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let client = GroqClient::new("https://api.groq.com/openai/v1/", "m", "key");
        assert_eq!(client.base_url, "https://api.groq.com/openai/v1");
    }
}
