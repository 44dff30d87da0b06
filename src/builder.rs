use crate::{GenerateError, GenerationRequest};

/// Represents what the recipe should be generated from
#[derive(Debug, Clone)]
enum Source {
    /// Ingredients already on hand
    Ingredients(Vec<String>),
    /// Name of a known dish
    Dish(String),
}

/// Builder for assembling a validated [`GenerationRequest`]
#[derive(Debug, Default)]
pub struct RequestBuilder {
    source: Option<Source>,
    dietary: Vec<String>,
    cuisine: Option<String>,
    meal: Option<String>,
}

impl RequestBuilder {
    /// Generate from a list of ingredients
    ///
    /// # Example
    /// ```
    /// use recipe_generator::GenerationRequest;
    ///
    /// let builder = GenerationRequest::builder()
    ///     .ingredients(["chicken", "rice"]);
    /// ```
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = Some(Source::Ingredients(
            ingredients.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Generate from comma-separated ingredient text, as typed by a user
    ///
    /// # Example
    /// ```
    /// use recipe_generator::GenerationRequest;
    ///
    /// let builder = GenerationRequest::builder()
    ///     .ingredient_text("chicken, rice, tomatoes");
    /// ```
    pub fn ingredient_text(self, text: &str) -> Self {
        self.ingredients(split_ingredients(text))
    }

    /// Generate an authentic recipe for a named dish
    ///
    /// # Example
    /// ```
    /// use recipe_generator::GenerationRequest;
    ///
    /// let builder = GenerationRequest::builder().dish("Pad Thai");
    /// ```
    pub fn dish(mut self, name: impl Into<String>) -> Self {
        self.source = Some(Source::Dish(name.into()));
        self
    }

    /// Add a dietary restriction. Duplicates are ignored.
    pub fn dietary(mut self, restriction: impl Into<String>) -> Self {
        let restriction = restriction.into();
        if !self.dietary.contains(&restriction) {
            self.dietary.push(restriction);
        }
        self
    }

    /// Set the cuisine. Only used for ingredient-based requests.
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Set the meal type. Only used for ingredient-based requests.
    pub fn meal(mut self, meal: impl Into<String>) -> Self {
        self.meal = Some(meal.into());
        self
    }

    /// Validate the inputs and build the request
    ///
    /// # Errors
    /// Returns `GenerateError::InvalidInput` if:
    /// - No source was specified
    /// - The ingredient list is empty after trimming
    /// - The dish name is blank
    pub fn build(self) -> Result<GenerationRequest, GenerateError> {
        let source = self.source.ok_or_else(|| {
            GenerateError::InvalidInput(
                "No recipe source specified. Use .ingredients() or .dish()".to_string(),
            )
        })?;

        let request = match source {
            Source::Ingredients(ingredients) => GenerationRequest::Ingredients {
                ingredients: ingredients
                    .into_iter()
                    .map(|i| i.trim().to_string())
                    .filter(|i| !i.is_empty())
                    .collect(),
                dietary: self.dietary,
                cuisine: self.cuisine.unwrap_or_default(),
                meal: self.meal.unwrap_or_default(),
            },
            Source::Dish(name) => GenerationRequest::Dish {
                name: name.trim().to_string(),
                dietary: self.dietary,
            },
        };
        request.validate()?;
        Ok(request)
    }
}

impl GenerationRequest {
    /// Creates a new builder for a generation request
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// Check that the request has something to generate from
    pub fn validate(&self) -> Result<(), GenerateError> {
        match self {
            GenerationRequest::Ingredients { ingredients, .. }
                if ingredients.iter().all(|i| i.trim().is_empty()) =>
            {
                Err(GenerateError::InvalidInput(
                    "Please enter at least one ingredient.".to_string(),
                ))
            }
            GenerationRequest::Dish { name, .. } if name.trim().is_empty() => Err(
                GenerateError::InvalidInput("Please enter a dish name.".to_string()),
            ),
            _ => Ok(()),
        }
    }
}

/// Split comma separated ingredient input, dropping blank entries.
pub fn split_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Map a user's cuisine/meal selection to the core's representation.
/// "Any" and blank mean unset.
pub fn normalize_choice(choice: Option<&str>) -> Option<String> {
    choice
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("any"))
        .map(String::from)
}
