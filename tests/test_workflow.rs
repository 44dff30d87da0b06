use mockito::{Matcher, Server};
use recipe_generator::config::{AppConfig, GenerationConfig, SearchConfig};
use recipe_generator::{GenerateError, GenerationRequest, RecipeAssistant, GENERATION_FAILED};

const RECIPE: &str = "# Pad Thai\\nPrep Time: 20 minutes\\nServings: 2\\nIngredients:\\n- rice noodles\\nInstructions:\\n1. Soak the noodles\\nTips:\\nServe with lime";

fn config(search_url: &str, generation_url: &str) -> AppConfig {
    AppConfig {
        search: SearchConfig {
            api_key: Some("search-key".to_string()),
            base_url: search_url.to_string(),
            ..SearchConfig::default()
        },
        generation: GenerationConfig {
            api_key: Some("generation-key".to_string()),
            base_url: Some(generation_url.to_string()),
            ..GenerationConfig::default()
        },
    }
}

fn completion_body(content: &str) -> String {
    format!(r#"{{"choices": [{{"message": {{"role": "assistant", "content": "{}"}}}}]}}"#, content)
}

#[tokio::test]
async fn test_dish_request_uses_search_background() {
    let mut search = Server::new_async().await;
    let mut llm = Server::new_async().await;

    let search_mock = search
        .mock("POST", "/search")
        .match_header("x-api-key", "search-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "q": "Pad Thai traditional recipe authentic",
            "num": 3
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"organic": [
                {"title": "Pad Thai", "link": "https://a.example", "snippet": "Pad Thai is a traditional Thai stir-fried noodle dish."},
                {"title": "Recipe", "link": "https://b.example", "snippet": "Ingredients include tamarind and fish sauce."}
            ]}"#,
        )
        .create_async()
        .await;

    let llm_mock = llm
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer generation-key")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({
                "model": "llama3-70b-8192",
                "max_tokens": 1500
            })),
            Matcher::Regex("Generate a detailed authentic recipe for Pad Thai.".to_string()),
            Matcher::Regex("Background notes from web search".to_string()),
            Matcher::Regex("Ingredients include tamarind and fish sauce.".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(RECIPE))
        .create_async()
        .await;

    let assistant = RecipeAssistant::from_config(&config(&search.url(), &llm.url())).unwrap();
    let request = GenerationRequest::builder()
        .dish("Pad Thai")
        .dietary("Vegan")
        .build()
        .unwrap();

    let recipe = assistant.generate(&request).await.unwrap();

    assert!(recipe.notices.is_empty());
    assert_eq!(recipe.heading, "Pad Thai");
    assert_eq!(recipe.sections.time, "Prep Time: 20 minutes");
    assert_eq!(recipe.sections.servings, "Servings: 2");
    assert_eq!(recipe.sections.ingredients, "- rice noodles");
    assert_eq!(recipe.sections.instructions, "1. Soak the noodles");
    assert_eq!(recipe.sections.tips, "Serve with lime");
    assert_eq!(recipe.file_name, "pad_thai_recipe.txt");

    search_mock.assert_async().await;
    llm_mock.assert_async().await;
}

#[tokio::test]
async fn test_search_failure_is_not_fatal() {
    let mut search = Server::new_async().await;
    let mut llm = Server::new_async().await;

    let _search_mock = search
        .mock("POST", "/search")
        .with_status(500)
        .create_async()
        .await;
    let llm_mock = llm
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(completion_body("Lasagna\\nServes: 6"))
        .create_async()
        .await;

    let assistant = RecipeAssistant::from_config(&config(&search.url(), &llm.url())).unwrap();
    let request = GenerationRequest::builder().dish("Lasagna").build().unwrap();
    let recipe = assistant.generate(&request).await.unwrap();

    assert_eq!(recipe.notices.len(), 1);
    assert!(recipe.notices[0].contains("Error searching for dish information"));
    assert_eq!(recipe.heading, "Lasagna");
    assert_eq!(recipe.sections.servings, "Serves: 6");
    llm_mock.assert_async().await;
}

#[tokio::test]
async fn test_generation_failure_returns_fallback_text() {
    let mut search = Server::new_async().await;
    let mut llm = Server::new_async().await;

    let search_mock = search
        .mock("POST", "/search")
        .expect(0)
        .create_async()
        .await;
    let _llm_mock = llm
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .create_async()
        .await;

    let assistant = RecipeAssistant::from_config(&config(&search.url(), &llm.url())).unwrap();
    let request = GenerationRequest::builder()
        .ingredient_text("rice, egg")
        .build()
        .unwrap();
    let recipe = assistant.generate(&request).await.unwrap();

    assert_eq!(recipe.text, GENERATION_FAILED);
    assert!(!recipe.is_generated());
    assert!(recipe.notices[0].contains("503"));
    // Ingredient requests only search when ingredient lookup is switched on.
    search_mock.assert_async().await;
}

#[tokio::test]
async fn test_ingredient_lookup_searches_ingredients() {
    let mut search = Server::new_async().await;
    let mut llm = Server::new_async().await;

    let search_mock = search
        .mock("POST", "/search")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "q": "rice, egg ingredients nutritional information",
            "num": 5
        })))
        .with_status(200)
        .with_body(r#"{"organic": [{"snippet": "Traditional egg fried rice"}]}"#)
        .create_async()
        .await;
    let llm_mock = llm
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Regex("Ingredients available: rice, egg".to_string()))
        .with_status(200)
        .with_body(completion_body("Egg Fried Rice"))
        .create_async()
        .await;

    let mut config = config(&search.url(), &llm.url());
    config.search.ingredient_lookup = true;
    let assistant = RecipeAssistant::from_config(&config).unwrap();
    let request = GenerationRequest::builder()
        .ingredients(["rice", "egg"])
        .build()
        .unwrap();
    let recipe = assistant.generate(&request).await.unwrap();

    assert_eq!(recipe.file_name, "egg_fried_rice.txt");
    search_mock.assert_async().await;
    llm_mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_request_sends_nothing() {
    let mut search = Server::new_async().await;
    let mut llm = Server::new_async().await;

    let search_mock = search.mock("POST", "/search").expect(0).create_async().await;
    let llm_mock = llm
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let assistant = RecipeAssistant::from_config(&config(&search.url(), &llm.url())).unwrap();
    let request = GenerationRequest::Dish {
        name: "  ".to_string(),
        dietary: vec![],
    };

    let result = assistant.generate(&request).await;
    assert!(matches!(result, Err(GenerateError::InvalidInput(_))));
    search_mock.assert_async().await;
    llm_mock.assert_async().await;
}

#[test]
fn test_disabled_search_needs_no_key() {
    let mut config = config("http://unused", "http://unused");
    config.search.enabled = false;
    config.search.api_key = None;
    assert!(RecipeAssistant::from_config(&config).is_ok());
}

#[test]
fn test_unknown_provider_is_an_error() {
    let mut config = config("http://unused", "http://unused");
    config.generation.provider = "mystery".to_string();
    assert!(matches!(
        RecipeAssistant::from_config(&config),
        Err(GenerateError::UnknownProvider(_))
    ));
}
