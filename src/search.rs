use crate::config::SearchConfig;
use crate::context::extract_context;
use crate::{DishContext, GenerateError, SearchSnippet};
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Why a search is being run. Decides the query suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPurpose {
    Ingredients,
    Dish,
}

impl SearchPurpose {
    pub fn suffix(&self) -> &'static str {
        match self {
            SearchPurpose::Ingredients => "ingredients nutritional information",
            SearchPurpose::Dish => "traditional recipe authentic",
        }
    }

    pub fn query(&self, base: &str) -> String {
        format!("{} {}", base, self.suffix())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<SearchSnippet>,
}

/// Client for a Serper-style web search endpoint.
pub struct SearchClient {
    client: Client,
    api_key: String,
    base_url: String,
    ingredient_results: u32,
    dish_results: u32,
}

impl SearchClient {
    /// Create a new search client from configuration
    pub fn new(config: &SearchConfig) -> Result<Self, GenerateError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SERPER_API_KEY").ok())
            .ok_or_else(|| {
                GenerateError::MissingApiKey(
                    "SERPER_API_KEY not found in config or environment".to_string(),
                )
            })?;

        Ok(SearchClient {
            client: Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ingredient_results: config.ingredient_results,
            dish_results: config.dish_results,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let defaults = SearchConfig::default();
        SearchClient {
            client: Client::new(),
            api_key,
            base_url,
            ingredient_results: defaults.ingredient_results,
            dish_results: defaults.dish_results,
        }
    }

    /// Number of results requested by default for a purpose
    pub fn result_count(&self, purpose: SearchPurpose) -> u32 {
        match purpose {
            SearchPurpose::Ingredients => self.ingredient_results,
            SearchPurpose::Dish => self.dish_results,
        }
    }

    /// Run a search, reporting failures to the caller.
    pub async fn try_search(
        &self,
        query: &str,
        purpose: SearchPurpose,
        result_count: u32,
    ) -> Result<Vec<SearchSnippet>, GenerateError> {
        let q = purpose.query(query);
        debug!("Searching for {:?} ({} results)", q, result_count);

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("X-API-KEY", &self.api_key)
            .json(&json!({ "q": q, "num": result_count }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerateError::Status {
                service: "Search",
                status: response.status(),
            });
        }

        let body: SearchResponse = response.json().await?;
        debug!("Search returned {} results", body.organic.len());
        Ok(body.organic)
    }

    /// Run a search. Any failure is logged and yields no results.
    pub async fn search(
        &self,
        query: &str,
        purpose: SearchPurpose,
        result_count: u32,
    ) -> Vec<SearchSnippet> {
        match self.try_search(query, purpose, result_count).await {
            Ok(results) => results,
            Err(e) => {
                error!("Error searching for {:?}: {}", query, e);
                Vec::new()
            }
        }
    }

    /// Look up nutritional background for a list of ingredients.
    pub async fn search_ingredients(&self, ingredients: &[String]) -> Vec<SearchSnippet> {
        self.search(
            &ingredients.join(", "),
            SearchPurpose::Ingredients,
            self.ingredient_results,
        )
        .await
    }

    /// Look up a dish and distill the results into a [`DishContext`].
    pub async fn search_dish_info(&self, dish_name: &str) -> DishContext {
        let results = self
            .search(dish_name, SearchPurpose::Dish, self.dish_results)
            .await;
        extract_context(&results)
    }
}
