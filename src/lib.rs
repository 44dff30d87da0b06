//! Recipe generation from on-hand ingredients or a dish name.
//!
//! A request optionally pulls background from a web search service, is
//! turned into a chat prompt, sent to an LLM and the reply is split into
//! display sections.

pub mod assistant;
pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod model;
pub mod prompt;
pub mod providers;
pub mod search;
pub mod sections;

pub use assistant::{GeneratedRecipe, RecipeAssistant};
pub use builder::{normalize_choice, split_ingredients, RequestBuilder};
pub use config::AppConfig;
pub use context::extract_context;
pub use error::GenerateError;
pub use model::{
    DishContext, GenerationRequest, Prompt, RecipeSections, SearchSnippet, SectionKind,
};
pub use prompt::{build_dish_prompt, build_ingredient_prompt, build_prompt};
pub use providers::{LlmProvider, RecipeTextGenerator, GENERATION_FAILED};
pub use search::{SearchClient, SearchPurpose};
pub use sections::parse_sections;

/// Generate a recipe from comma separated ingredient text using configuration
/// from `config.toml` and the environment.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipe = recipe_generator::generate_from_ingredients("chicken, rice").await?;
/// println!("{}", recipe.heading);
/// # Ok(())
/// # }
/// ```
pub async fn generate_from_ingredients(text: &str) -> Result<GeneratedRecipe, GenerateError> {
    let request = GenerationRequest::builder().ingredient_text(text).build()?;
    let assistant = RecipeAssistant::from_config(&AppConfig::load()?)?;
    assistant.generate(&request).await
}

/// Generate an authentic recipe for a dish using configuration from
/// `config.toml` and the environment.
pub async fn generate_from_dish(name: &str) -> Result<GeneratedRecipe, GenerateError> {
    let request = GenerationRequest::builder().dish(name).build()?;
    let assistant = RecipeAssistant::from_config(&AppConfig::load()?)?;
    assistant.generate(&request).await
}
