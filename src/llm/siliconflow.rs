use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::llm::{send_json, ChatProvider, ProviderError};

const TEMPERATURE: f64 = 0.7;

/// SiliconFlow's OpenAI-compatible chat completions endpoint.
pub struct SiliconFlowProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage; 2],
    stream: bool,
    temperature: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ReplyMessage>,
}

/// Assistant turn as returned; either field may be null or missing.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl SiliconFlowProvider {
    pub fn new(client: reqwest::Client, api_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl ChatProvider for SiliconFlowProvider {
    fn name(&self) -> &str {
        "SiliconFlow"
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::NotConfigured("apiKey"));
        }

        let payload = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system".into(),
                    content: system.into(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: user.into(),
                },
            ],
            stream: false,
            temperature: TEMPERATURE,
        };

        tracing::debug!(model = %self.model, "dispatching siliconflow request");
        let request = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload);

        let response: ChatResponse = send_json(request).await?;
        Ok(response.first_content().unwrap_or_default().to_string())
    }
}
