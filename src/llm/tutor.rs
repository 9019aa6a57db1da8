use crate::config::{AiConfig, Endpoints};
use crate::llm::prompts::{
    examples_failure, tutor_failure, tutor_system_prompt, word_examples_prompt,
    EXAMPLES_NOT_CONFIGURED, EXAMPLES_SYSTEM_PROMPT, TUTOR_NOT_CONFIGURED,
};
use crate::llm::{build_provider, ChatProvider};
use crate::storage::KeyValueStore;

/// AI tutor front door. Every public call resolves to display text; provider
/// errors never reach the caller.
pub struct TutorService {
    provider: Option<Box<dyn ChatProvider>>,
}

impl TutorService {
    /// `None` provider when no API key is set, so no request can go out.
    pub fn new(config: &AiConfig, endpoints: &Endpoints) -> Self {
        let provider = config
            .has_api_key()
            .then(|| build_provider(config, endpoints, reqwest::Client::new()));
        Self { provider }
    }

    pub fn from_store(store: &dyn KeyValueStore) -> Self {
        Self::new(&AiConfig::load(store), &Endpoints::from_env())
    }

    pub fn with_provider(provider: Box<dyn ChatProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn ask_tutor(&self, question: &str, context: &str) -> String {
        let Some(provider) = &self.provider else {
            return TUTOR_NOT_CONFIGURED.to_string();
        };

        match provider.complete(&tutor_system_prompt(context), question).await {
            Ok(answer) => answer,
            Err(err) => {
                tracing::error!(provider = provider.name(), error = %err, "tutor request failed");
                tutor_failure(&err.to_string())
            }
        }
    }

    pub async fn generate_word_examples(&self, word: &str, meaning: &str) -> String {
        let Some(provider) = &self.provider else {
            return EXAMPLES_NOT_CONFIGURED.to_string();
        };

        let prompt = word_examples_prompt(word, meaning);
        match provider.complete(EXAMPLES_SYSTEM_PROMPT, &prompt).await {
            Ok(examples) => examples,
            Err(err) => {
                tracing::error!(provider = provider.name(), error = %err, "example generation failed");
                examples_failure(&err.to_string())
            }
        }
    }
}
