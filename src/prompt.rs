//! Prompt construction for both kinds of [`GenerationRequest`].
//!
//! The ingredient and dish prompts share one layout: an opening line, a block
//! of request details, optional search background, a numbered list of the
//! sections the model must produce and a closing formatting instruction.

use crate::{DishContext, GenerationRequest, Prompt};

pub const INGREDIENT_PERSONA: &str = "You are a professional chef specialized in creating delicious, creative recipes that match the user's requirements.";

pub const DISH_PERSONA: &str = "You are a professional chef specialized in authentic recipes from around the world with deep knowledge of traditional cooking techniques and ingredients.";

const INGREDIENT_SECTIONS: [&str; 7] = [
    "A creative name for the dish",
    "Preparation time and cooking time",
    "Serving size",
    "Ingredients with measurements",
    "Step-by-step cooking instructions",
    "Nutritional information (approximate calories, protein, carbs, fat)",
    "Tips for serving and storage",
];

const DISH_SECTIONS: [&str; 8] = [
    "A brief description and history of the dish",
    "Preparation time and cooking time",
    "Serving size",
    "Complete list of ingredients with precise measurements",
    "Step-by-step cooking instructions with details on techniques",
    "Nutritional information (approximate calories, protein, carbs, fat)",
    "Tips for serving, presentation, and storage",
    "Variations or substitutions if relevant",
];

/// The parts that differ between the two request kinds.
struct Template {
    persona: &'static str,
    opening: String,
    details: Vec<String>,
    lead_in: &'static str,
    sections: &'static [&'static str],
    closing: &'static str,
}

impl Template {
    fn render(&self, context: Option<&DishContext>) -> Prompt {
        let mut user = String::new();
        user.push_str(&self.opening);
        user.push_str("\n\n");
        for line in &self.details {
            user.push_str(line);
            user.push('\n');
        }
        user.push('\n');

        if let Some(context) = context.filter(|c| !c.is_empty()) {
            user.push_str(&render_background(context));
            user.push('\n');
        }

        user.push_str(self.lead_in);
        user.push('\n');
        for (i, section) in self.sections.iter().enumerate() {
            user.push_str(&format!("{}. {}\n", i + 1, section));
        }
        user.push('\n');
        user.push_str(self.closing);
        user.push('\n');

        Prompt {
            system: self.persona.to_string(),
            user,
        }
    }
}

fn render_background(context: &DishContext) -> String {
    let mut out = String::from("Background notes from web search:\n");
    let description = context.description.trim();
    if !description.is_empty() {
        out.push_str(description);
        out.push('\n');
    }
    if !context.key_ingredients.is_empty() {
        out.push_str("Key ingredients mentioned:\n");
        for item in &context.key_ingredients {
            out.push_str(&format!("- {}\n", item.trim()));
        }
    }
    out
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "None".to_string()
    } else {
        values.join(", ")
    }
}

fn template_for(request: &GenerationRequest) -> Template {
    match request {
        GenerationRequest::Ingredients {
            ingredients,
            dietary,
            cuisine,
            meal,
        } => Template {
            persona: INGREDIENT_PERSONA,
            opening: "Generate a detailed recipe based on the following information:".to_string(),
            details: vec![
                format!("Ingredients available: {}", ingredients.join(", ")),
                format!("Dietary restrictions: {}", join_or_none(dietary)),
                format!("Cuisine type: {}", cuisine),
                format!("Meal type: {}", meal),
            ],
            lead_in: "Please include:",
            sections: &INGREDIENT_SECTIONS,
            closing: "Format the recipe nicely with clear sections.",
        },
        GenerationRequest::Dish { name, dietary } => Template {
            persona: DISH_PERSONA,
            opening: format!("Generate a detailed authentic recipe for {}.", name),
            details: vec![format!(
                "Dietary adaptations (if applicable): {}",
                join_or_none(dietary)
            )],
            lead_in: "Please incorporate any traditional elements and authentic techniques. Include:",
            sections: &DISH_SECTIONS,
            closing: "Format the recipe with clear sections.",
        },
    }
}

/// Build the system and user messages for a request.
///
/// Search background is only rendered when `context` holds something.
pub fn build_prompt(request: &GenerationRequest, context: Option<&DishContext>) -> Prompt {
    template_for(request).render(context)
}

pub fn build_ingredient_prompt(
    ingredients: &[String],
    dietary: &[String],
    cuisine: &str,
    meal: &str,
) -> Prompt {
    build_prompt(
        &GenerationRequest::Ingredients {
            ingredients: ingredients.to_vec(),
            dietary: dietary.to_vec(),
            cuisine: cuisine.to_string(),
            meal: meal.to_string(),
        },
        None,
    )
}

pub fn build_dish_prompt(
    dish_name: &str,
    dietary: &[String],
    context: Option<&DishContext>,
) -> Prompt {
    build_prompt(
        &GenerationRequest::Dish {
            name: dish_name.to_string(),
            dietary: dietary.to_vec(),
        },
        context,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ingredient_prompt_text() {
        let prompt = build_ingredient_prompt(&strings(&["rice", "egg"]), &[], "", "");

        assert_eq!(prompt.system, INGREDIENT_PERSONA);
        assert!(prompt.user.contains("Ingredients available: rice, egg"));
        assert!(prompt.user.contains("Dietary restrictions: None"));
        assert!(prompt.user.contains("Cuisine type: \n"));
        assert!(prompt.user.contains("Meal type: \n"));
    }

    #[test]
    fn test_ingredient_prompt_full_layout() {
        let prompt = build_ingredient_prompt(
            &strings(&["chicken", "rice"]),
            &strings(&["Gluten-Free", "Low-Fat"]),
            "Thai",
            "Dinner",
        );

        let expected = "Generate a detailed recipe based on the following information:\n\
\n\
Ingredients available: chicken, rice\n\
Dietary restrictions: Gluten-Free, Low-Fat\n\
Cuisine type: Thai\n\
Meal type: Dinner\n\
\n\
Please include:\n\
1. A creative name for the dish\n\
2. Preparation time and cooking time\n\
3. Serving size\n\
4. Ingredients with measurements\n\
5. Step-by-step cooking instructions\n\
6. Nutritional information (approximate calories, protein, carbs, fat)\n\
7. Tips for serving and storage\n\
\n\
Format the recipe nicely with clear sections.\n";
        assert_eq!(prompt.user, expected);
    }

    #[test]
    fn test_dish_prompt_without_context() {
        let prompt = build_dish_prompt("Pad Thai", &[], None);

        assert_eq!(prompt.system, DISH_PERSONA);
        assert!(prompt
            .user
            .starts_with("Generate a detailed authentic recipe for Pad Thai.\n\n"));
        assert!(prompt
            .user
            .contains("Dietary adaptations (if applicable): None\n"));
        assert!(prompt.user.contains("8. Variations or substitutions if relevant\n"));
        assert!(!prompt.user.contains("Background notes"));
        assert!(prompt.user.ends_with("Format the recipe with clear sections.\n"));
    }

    #[test]
    fn test_empty_context_matches_no_context() {
        let empty = DishContext::default();
        assert_eq!(
            build_dish_prompt("Lasagna", &strings(&["Vegan"]), Some(&empty)),
            build_dish_prompt("Lasagna", &strings(&["Vegan"]), None)
        );
    }

    #[test]
    fn test_dish_prompt_with_context() {
        let context = DishContext {
            description: "A traditional Thai street food. ".to_string(),
            key_ingredients: strings(&["Ingredients: rice noodles, tamarind"]),
        };
        let prompt = build_dish_prompt("Pad Thai", &strings(&["Vegan"]), Some(&context));

        assert!(prompt.user.contains("Dietary adaptations (if applicable): Vegan"));
        assert!(prompt.user.contains(
            "Background notes from web search:\nA traditional Thai street food.\n"
        ));
        assert!(prompt
            .user
            .contains("Key ingredients mentioned:\n- Ingredients: rice noodles, tamarind\n"));

        let background = prompt.user.find("Background notes").unwrap();
        let lead_in = prompt.user.find("Please incorporate").unwrap();
        assert!(background < lead_in);
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let request = GenerationRequest::Ingredients {
            ingredients: strings(&["tofu"]),
            dietary: vec![],
            cuisine: "Japanese".to_string(),
            meal: String::new(),
        };
        assert_eq!(build_prompt(&request, None), build_prompt(&request, None));
    }
}
