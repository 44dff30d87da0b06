use crate::config::AppConfig;
use crate::context::extract_context;
use crate::export::download_file_name;
use crate::prompt::build_prompt;
use crate::providers::{ProviderFactory, RecipeTextGenerator, GENERATION_FAILED};
use crate::search::{SearchClient, SearchPurpose};
use crate::sections::parse_sections;
use crate::{DishContext, GenerateError, GenerationRequest, RecipeSections};
use log::{debug, error, info, warn};

/// Everything needed to show one generated recipe.
#[derive(Debug, Clone)]
pub struct GeneratedRecipe {
    /// Raw model output, or the generation failure message
    pub text: String,
    pub sections: RecipeSections,
    /// Parsed title, or a fallback derived from the request
    pub heading: String,
    /// Suggested name when saving `text`
    pub file_name: String,
    /// Recoverable problems the user should be told about
    pub notices: Vec<String>,
}

impl GeneratedRecipe {
    /// Whether the text came from the model rather than the failure fallback
    pub fn is_generated(&self) -> bool {
        self.text != GENERATION_FAILED
    }
}

/// Runs a request end to end: optional search, prompt, generation, parsing.
pub struct RecipeAssistant {
    search: Option<SearchClient>,
    generator: RecipeTextGenerator,
    ingredient_lookup: bool,
}

impl RecipeAssistant {
    pub fn new(generator: RecipeTextGenerator, search: Option<SearchClient>) -> Self {
        RecipeAssistant {
            search,
            generator,
            ingredient_lookup: false,
        }
    }

    /// Also search the web for ingredient-based requests
    pub fn with_ingredient_lookup(mut self, enabled: bool) -> Self {
        self.ingredient_lookup = enabled;
        self
    }

    /// Build the assistant from configuration.
    ///
    /// A missing generation key is an error. A missing search key only
    /// disables search.
    pub fn from_config(config: &AppConfig) -> Result<Self, GenerateError> {
        let provider = ProviderFactory::create(&config.generation)?;
        let generator = RecipeTextGenerator::new(provider);

        let search = if config.search.enabled {
            match SearchClient::new(&config.search) {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!("Web search disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Self::new(generator, search).with_ingredient_lookup(config.search.ingredient_lookup))
    }

    /// Search the web for the request.
    ///
    /// Only dish results become prompt background. Ingredient results are
    /// logged and the ingredient prompt is left unchanged.
    async fn lookup(
        &self,
        request: &GenerationRequest,
        notices: &mut Vec<String>,
    ) -> Option<DishContext> {
        let search = self.search.as_ref()?;
        let (query, purpose, what) = match request {
            GenerationRequest::Dish { name, .. } => {
                (name.clone(), SearchPurpose::Dish, "dish information")
            }
            GenerationRequest::Ingredients { ingredients, .. } if self.ingredient_lookup => (
                ingredients.join(", "),
                SearchPurpose::Ingredients,
                "ingredients",
            ),
            GenerationRequest::Ingredients { .. } => return None,
        };

        let count = search.result_count(purpose);
        let results = match search.try_search(&query, purpose, count).await {
            Ok(results) => results,
            Err(e) => {
                error!("Error searching for {}: {}", what, e);
                notices.push(format!("Error searching for {}: {}", what, e));
                return None;
            }
        };

        match purpose {
            SearchPurpose::Dish => {
                let context = extract_context(&results);
                debug!("Search context: {:?}", context);
                Some(context)
            }
            SearchPurpose::Ingredients => {
                info!("Found {} results for ingredients", results.len());
                for result in &results {
                    debug!("Ingredient result: {}: {}", result.title, result.snippet);
                }
                None
            }
        }
    }

    /// Generate and parse a recipe.
    ///
    /// # Errors
    /// Only `GenerateError::InvalidInput`, returned before any request is
    /// sent. Search and generation failures become notices.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedRecipe, GenerateError> {
        request.validate()?;

        let mut notices = Vec::new();
        let context = self.lookup(request, &mut notices).await;
        let prompt = build_prompt(request, context.as_ref());
        debug!("Prompt: {:?}", prompt);

        info!(
            "Generating recipe with {}",
            self.generator.provider_name()
        );
        let text = match self.generator.try_generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error generating recipe: {}", e);
                notices.push(format!("Error generating recipe: {}", e));
                GENERATION_FAILED.to_string()
            }
        };

        let sections = parse_sections(&text);
        let heading = if sections.title.is_empty() {
            request.fallback_title()
        } else {
            sections.title.clone()
        };
        let file_name = download_file_name(request, &sections);

        Ok(GeneratedRecipe {
            text,
            sections,
            heading,
            file_name,
            notices,
        })
    }
}
