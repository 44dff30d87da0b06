use crate::config::GenerationConfig;
use crate::providers::LlmProvider;
use crate::{GenerateError, Prompt};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

/// Provider for any OpenAI-compatible `/v1/chat/completions` endpoint
/// (Groq, OpenAI, Ollama).
pub struct ChatCompletionsProvider {
    client: Client,
    name: String,
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl ChatCompletionsProvider {
    /// Create a provider from configuration. Base URL and key are resolved by the caller.
    pub fn new(
        name: impl Into<String>,
        config: &GenerationConfig,
        base_url: String,
        api_key: Option<String>,
    ) -> Self {
        ChatCompletionsProvider {
            client: Client::new(),
            name: name.into(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        let config = GenerationConfig {
            model,
            ..GenerationConfig::default()
        };
        Self::new("groq", &config, base_url, Some(api_key))
    }
}

#[async_trait]
impl LlmProvider for ChatCompletionsProvider {
    fn provider_name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, prompt: &Prompt) -> Result<String, GenerateError> {
        let mut request = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": prompt.system},
                    {"role": "user", "content": prompt.user}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }));
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = request.send().await?;

        // Check status code before attempting to parse JSON
        if !response.status().is_success() {
            return Err(GenerateError::Status {
                service: "Generation",
                status: response.status(),
            });
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let recipe = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                GenerateError::MalformedResponse(
                    "Failed to extract content from response".to_string(),
                )
            })?
            .to_string();

        Ok(recipe)
    }
}
