use serde::{Deserialize, Serialize};

use crate::storage::keys::{AI_CONFIG_KEY, LEGACY_GEMINI_KEY};
use crate::storage::{KeyValueStore, StoreResult};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_SILICONFLOW_MODEL: &str = "deepseek-ai/DeepSeek-V3";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SILICONFLOW_API_URL: &str = "https://api.siliconflow.cn/v1/chat/completions";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[serde(rename = "siliconflow")]
    SiliconFlow,
    /// Also absorbs provider names this build does not know.
    #[default]
    #[serde(other)]
    Gemini,
}

impl ProviderKind {
    pub fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => DEFAULT_GEMINI_MODEL,
            Self::SiliconFlow => DEFAULT_SILICONFLOW_MODEL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::SiliconFlow => "SiliconFlow",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: String,
}

impl AiConfig {
    /// Stored config, then the legacy Gemini key, then `API_KEY` from the
    /// environment (or `.env`).
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(AI_CONFIG_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<AiConfig>(&raw) {
                Ok(config) => return config,
                Err(err) => {
                    tracing::warn!(error = %err, "stored ai config unreadable, using fallback")
                }
            },
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "ai config read failed, using fallback"),
        }

        let legacy = store
            .get(LEGACY_GEMINI_KEY)
            .ok()
            .flatten()
            .filter(|v| !v.trim().is_empty());
        let api_key = legacy
            .or_else(|| {
                let _ = dotenvy::dotenv();
                env_string("API_KEY")
            })
            .unwrap_or_default();

        Self {
            provider: ProviderKind::Gemini,
            api_key,
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> StoreResult<()> {
        store.set(AI_CONFIG_KEY, &serde_json::to_string(self)?)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Configured model, or the provider default when left blank.
    pub fn model_id(&self) -> &str {
        let model = self.model.trim();
        if model.is_empty() {
            self.provider.default_model()
        } else {
            model
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub gemini_base_url: String,
    pub siliconflow_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            siliconflow_url: DEFAULT_SILICONFLOW_API_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            gemini_base_url: env_string("NIHONGO_GEMINI_BASE_URL")
                .unwrap_or(defaults.gemini_base_url),
            siliconflow_url: env_string("NIHONGO_SILICONFLOW_API_URL")
                .unwrap_or(defaults.siliconflow_url),
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
