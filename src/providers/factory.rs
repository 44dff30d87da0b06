use crate::config::GenerationConfig;
use crate::providers::{ChatCompletionsProvider, LlmProvider};
use crate::GenerateError;

/// Known providers: name, default base URL, API key environment variable.
const PROVIDERS: [(&str, &str, Option<&str>); 3] = [
    ("groq", "https://api.groq.com/openai", Some("GROQ_API_KEY")),
    ("openai", "https://api.openai.com", Some("OPENAI_API_KEY")),
    ("ollama", "http://localhost:11434", None),
];

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(config: &GenerationConfig) -> Result<Box<dyn LlmProvider>, GenerateError> {
        let provider_name = config.provider.as_str();
        let (name, default_base_url, key_var) = PROVIDERS
            .iter()
            .find(|(name, _, _)| *name == provider_name)
            .ok_or_else(|| GenerateError::UnknownProvider(provider_name.to_string()))?;

        // Try config first, then fall back to environment variable
        let api_key = match key_var {
            Some(var) => Some(
                config
                    .api_key
                    .clone()
                    .or_else(|| std::env::var(var).ok())
                    .ok_or_else(|| {
                        GenerateError::MissingApiKey(format!(
                            "{} not found in config or environment",
                            var
                        ))
                    })?,
            ),
            None => config.api_key.clone(),
        };

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url.to_string());

        Ok(Box::new(ChatCompletionsProvider::new(
            *name, config, base_url, api_key,
        )))
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        PROVIDERS.iter().map(|(name, _, _)| *name).collect()
    }
}
