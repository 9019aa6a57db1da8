pub mod gemini;
pub mod prompts;
pub mod siliconflow;
pub mod tutor;

pub use gemini::GeminiProvider;
pub use siliconflow::SiliconFlowProvider;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::{AiConfig, Endpoints, ProviderKind};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("LLM not configured: {0}")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// One chat backend. Implementations turn a system prompt plus a user message
/// into a single text reply.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}

pub fn build_provider(
    config: &AiConfig,
    endpoints: &Endpoints,
    client: reqwest::Client,
) -> Box<dyn ChatProvider> {
    match config.provider {
        ProviderKind::Gemini => Box::new(GeminiProvider::new(
            client,
            &endpoints.gemini_base_url,
            &config.api_key,
            config.model_id(),
        )),
        ProviderKind::SiliconFlow => Box::new(SiliconFlowProvider::new(
            client,
            &endpoints.siliconflow_url,
            &config.api_key,
            config.model_id(),
        )),
    }
}

/// Sends a prepared request and decodes a JSON success body. Error bodies of
/// the form `{"error":{"message":...}}` surface their message.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ProviderError> {
    let resp = request.send().await?;
    let status = resp.status();
    let bytes = resp.bytes().await?;

    if !status.is_success() {
        return Err(ProviderError::Api {
            status,
            message: error_message(status, &bytes),
        });
    }

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::error!(
            "Failed to parse LLM response JSON: {}. Body: {}",
            e,
            String::from_utf8_lossy(&bytes)
        );
        ProviderError::Json(e)
    })
}

fn error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("API Error: {}", status.as_u16()))
}
