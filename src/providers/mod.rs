mod chat_completions;
mod factory;
mod generator;

pub use chat_completions::ChatCompletionsProvider;
pub use factory::ProviderFactory;
pub use generator::{RecipeTextGenerator, GENERATION_FAILED};

use crate::{GenerateError, Prompt};
use async_trait::async_trait;

/// Unified trait for text-generation backends
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "groq", "openai")
    fn provider_name(&self) -> &str;

    /// Send a system + user prompt and return the first completion's text
    async fn complete(&self, prompt: &Prompt) -> Result<String, GenerateError>;
}
