use crate::providers::LlmProvider;
use crate::{GenerateError, Prompt};
use log::{error, info};

/// Text returned in place of a recipe when generation fails.
pub const GENERATION_FAILED: &str = "Failed to generate recipe. Please try again later.";

/// Runs a single prompt through a provider. One request, no retries.
pub struct RecipeTextGenerator {
    provider: Box<dyn LlmProvider>,
}

impl RecipeTextGenerator {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        RecipeTextGenerator { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Generate recipe text, reporting failures to the caller.
    pub async fn try_generate(&self, prompt: &Prompt) -> Result<String, GenerateError> {
        let text = self.provider.complete(prompt).await?;
        info!(
            "Generated recipe using {} ({} chars)",
            self.provider.provider_name(),
            text.len()
        );
        Ok(text)
    }

    /// Generate recipe text. Failures are logged and replaced by
    /// [`GENERATION_FAILED`], so the caller always has something to show.
    pub async fn generate(&self, prompt: &Prompt) -> String {
        match self.try_generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error generating recipe: {}", e);
                GENERATION_FAILED.to_string()
            }
        }
    }
}
