use serde::{Deserialize, Serialize};

/// What the user asked for. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    /// Invent something from what is on hand
    Ingredients {
        ingredients: Vec<String>,
        dietary: Vec<String>,
        /// Empty means "any cuisine"
        cuisine: String,
        /// Empty means "any meal"
        meal: String,
    },
    /// Reproduce a known dish
    Dish { name: String, dietary: Vec<String> },
}

impl GenerationRequest {
    pub fn dietary(&self) -> &[String] {
        match self {
            GenerationRequest::Ingredients { dietary, .. } => dietary,
            GenerationRequest::Dish { dietary, .. } => dietary,
        }
    }

    /// Heading to show when the generated text has no usable title.
    pub fn fallback_title(&self) -> String {
        match self {
            GenerationRequest::Ingredients { .. } => "Your Custom Recipe".to_string(),
            GenerationRequest::Dish { name, .. } => format!("{} Recipe", name),
        }
    }
}

/// One organic result from the search service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

/// Background on a dish gathered from search snippets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishContext {
    pub description: String,
    pub key_ingredients: Vec<String>,
}

impl DishContext {
    pub fn is_empty(&self) -> bool {
        self.description.trim().is_empty() && self.key_ingredients.is_empty()
    }
}

/// A system + user message pair for a chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Sections split out of generated recipe text.
/// All fields can be empty strings if the section was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeSections {
    pub title: String,
    pub time: String,
    pub servings: String,
    pub ingredients: String,
    pub instructions: String,
    pub nutrition: String,
    pub tips: String,
}

/// Names the seven fields of [`RecipeSections`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Title,
    Time,
    Servings,
    Ingredients,
    Instructions,
    Nutrition,
    Tips,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Title,
        SectionKind::Time,
        SectionKind::Servings,
        SectionKind::Ingredients,
        SectionKind::Instructions,
        SectionKind::Nutrition,
        SectionKind::Tips,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Title => "Title",
            SectionKind::Time => "Time",
            SectionKind::Servings => "Servings",
            SectionKind::Ingredients => "Ingredients",
            SectionKind::Instructions => "Instructions",
            SectionKind::Nutrition => "Nutrition Information",
            SectionKind::Tips => "Tips",
        }
    }
}

impl RecipeSections {
    pub fn get(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Title => &self.title,
            SectionKind::Time => &self.time,
            SectionKind::Servings => &self.servings,
            SectionKind::Ingredients => &self.ingredients,
            SectionKind::Instructions => &self.instructions,
            SectionKind::Nutrition => &self.nutrition,
            SectionKind::Tips => &self.tips,
        }
    }

    pub(crate) fn set(&mut self, kind: SectionKind, value: String) {
        let slot = match kind {
            SectionKind::Title => &mut self.title,
            SectionKind::Time => &mut self.time,
            SectionKind::Servings => &mut self.servings,
            SectionKind::Ingredients => &mut self.ingredients,
            SectionKind::Instructions => &mut self.instructions,
            SectionKind::Nutrition => &mut self.nutrition,
            SectionKind::Tips => &mut self.tips,
        };
        *slot = value;
    }
}
