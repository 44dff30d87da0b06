use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Web search settings
    #[serde(default)]
    pub search: SearchConfig,
    /// Text generation settings
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Configuration for the web search service
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Whether to query the search service at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// API key (can also be set via SERPER_API_KEY)
    pub api_key: Option<String>,
    /// Base URL of the search endpoint
    #[serde(default = "default_search_base_url")]
    pub base_url: String,
    /// Results requested for ingredient lookups
    #[serde(default = "default_ingredient_results")]
    pub ingredient_results: u32,
    /// Results requested for dish lookups
    #[serde(default = "default_dish_results")]
    pub dish_results: u32,
    /// Also search when generating from ingredients
    #[serde(default)]
    pub ingredient_lookup: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            base_url: default_search_base_url(),
            ingredient_results: default_ingredient_results(),
            dish_results: default_dish_results(),
            ingredient_lookup: false,
        }
    }
}

/// Configuration for the text generation provider
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// Provider name ("groq", "openai" or "ollama")
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_search_base_url() -> String {
    "https://google.serper.dev".to_string()
}

fn default_ingredient_results() -> u32 {
    5
}

fn default_dish_results() -> u32 {
    3
}

fn default_provider() -> String {
    "groq".to_string()
}

fn default_model() -> String {
    "llama3-70b-8192".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    1500
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__GENERATION__MODEL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the precedence rules.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE__SEARCH__API_KEY
        .add_source(
            Environment::with_prefix("RECIPE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert!(config.search.enabled);
        assert_eq!(config.search.base_url, "https://google.serper.dev");
        assert_eq!(config.search.ingredient_results, 5);
        assert_eq!(config.search.dish_results, 3);
        assert!(!config.search.ingredient_lookup);
        assert_eq!(config.generation.provider, "groq");
        assert_eq!(config.generation.model, "llama3-70b-8192");
        assert_eq!(config.generation.temperature, 0.7);
        assert_eq!(config.generation.max_tokens, 1500);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml = r#"
            [search]
            enabled = false

            [generation]
            model = "llama-3.3-70b-versatile"
            api_key = "test-key"
        "#;
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(!config.search.enabled);
        assert_eq!(config.search.dish_results, 3);
        assert_eq!(config.generation.model, "llama-3.3-70b-versatile");
        assert_eq!(config.generation.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.generation.provider, "groq");
        assert_eq!(config.generation.max_tokens, 1500);
    }

    #[test]
    fn test_empty_source_deserializes() {
        let config: AppConfig = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.generation.model, "llama3-70b-8192");
    }
}
