use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::error::ProviderError;

/// Text-completion boundary to the external model provider
///
/// Implementations send a single prompt and hand back the raw completion
/// text. No parsing happens here; the response validator owns that.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Model identifier, reported back to API callers
    fn model(&self) -> &str {
        "unknown"
    }
}

/// Connection settings for an OpenAI-compatible chat-completions API
#[derive(Debug, Clone)]
pub struct HttpLlmOptions {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout: Duration,
    pub json_mode: bool,
}

/// reqwest-backed chat-completions client
///
/// Posts the prompt as a single user message to `{endpoint}/chat/completions`
/// and returns the first choice's message content.
pub struct HttpLlmClient {
    client: Client,
    options: HttpLlmOptions,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

impl HttpLlmClient {
    /// Create a new chat-completions client
    pub fn new(options: HttpLlmOptions) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(options.request_timeout).build()?;
        Ok(Self { client, options })
    }

    fn url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.options.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: &self.options.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.options.temperature,
            max_tokens: self.options.max_tokens,
            response_format: self
                .options
                .json_mode
                .then_some(ResponseFormat { kind: "json_object" }),
        };

        tracing::debug!(
            "Requesting completion from {} (model: {}, prompt: {} bytes)",
            self.options.endpoint,
            self.options.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.url())
            .bearer_auth(&self.options.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.options.request_timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            tracing::error!("LLM provider returned {}: {}", status, message);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, self.options.request_timeout))?;
        let envelope: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidEnvelope(e.to_string()))?;

        let content = envelope
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ProviderError::EmptyCompletion)?;

        tracing::debug!("Received completion ({} bytes)", content.len());

        Ok(content)
    }

    fn model(&self) -> &str {
        &self.options.model
    }
}

fn map_transport_error(err: reqwest::Error, timeout: Duration) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(timeout)
    } else {
        ProviderError::Http(err)
    }
}
