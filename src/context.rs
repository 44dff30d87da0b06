use crate::{DishContext, SearchSnippet};

const DESCRIPTION_MARKERS: [&str; 2] = ["origin", "traditional"];
const INGREDIENT_MARKER: &str = "ingredients";

/// Collect dish background from search snippets.
///
/// A snippet mentioning "origin" or "traditional" is appended to the
/// description; one mentioning "ingredients" is added to the key
/// ingredients. Matching is case-insensitive and a snippet may land in both.
pub fn extract_context(snippets: &[SearchSnippet]) -> DishContext {
    let mut context = DishContext::default();

    for result in snippets {
        let snippet = &result.snippet;
        let lower = snippet.to_lowercase();

        if DESCRIPTION_MARKERS.iter().any(|m| lower.contains(m)) {
            context.description.push_str(snippet);
            context.description.push(' ');
        }
        if lower.contains(INGREDIENT_MARKER) {
            context.key_ingredients.push(snippet.clone());
        }
    }

    context
}
