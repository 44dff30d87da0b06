use clap::{Args, Parser, Subcommand};
use log::debug;
use recipe_generator::export::save_recipe;
use recipe_generator::{
    normalize_choice, AppConfig, GenerateError, GeneratedRecipe, GenerationRequest,
    RecipeAssistant, SectionKind,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate recipes from what you have, or from a dish name
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Print the raw model output instead of the parsed sections
    #[arg(long, global = true)]
    raw: bool,
    /// Save the raw recipe text into this directory (`--save=DIR`, default ".")
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "."
    )]
    save: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a recipe from ingredients on hand
    Ingredients {
        /// Comma separated ingredients, e.g. "chicken, rice, tomatoes"
        ingredients: String,
        /// Cuisine type ("Any" for no preference)
        #[arg(long)]
        cuisine: Option<String>,
        /// Meal type ("Any" for no preference)
        #[arg(long)]
        meal: Option<String>,
        #[command(flatten)]
        diet: Diet,
    },
    /// Get an authentic recipe for a named dish
    Dish {
        /// Dish name, e.g. "Pad Thai"
        name: String,
        #[command(flatten)]
        diet: Diet,
    },
}

#[derive(Args, Debug)]
struct Diet {
    /// Dietary restriction, may be repeated (e.g. --diet Vegan --diet Gluten-Free)
    #[arg(long = "diet", value_name = "RESTRICTION")]
    restrictions: Vec<String>,
}

fn request_from(command: Command) -> Result<GenerationRequest, GenerateError> {
    let (builder, diet) = match command {
        Command::Ingredients {
            ingredients,
            cuisine,
            meal,
            diet,
        } => {
            let mut builder = GenerationRequest::builder().ingredient_text(&ingredients);
            if let Some(cuisine) = normalize_choice(cuisine.as_deref()) {
                builder = builder.cuisine(cuisine);
            }
            if let Some(meal) = normalize_choice(meal.as_deref()) {
                builder = builder.meal(meal);
            }
            (builder, diet)
        }
        Command::Dish { name, diet } => (GenerationRequest::builder().dish(name), diet),
    };

    diet.restrictions
        .into_iter()
        .fold(builder, |b, r| b.dietary(r))
        .build()
}

fn print_recipe(recipe: &GeneratedRecipe) {
    println!("{}\n", recipe.heading);
    for kind in SectionKind::ALL.into_iter().skip(1) {
        let value = recipe.sections.get(kind);
        // Ingredients and instructions are always shown, even when empty.
        let always = matches!(kind, SectionKind::Ingredients | SectionKind::Instructions);
        if value.is_empty() && !always {
            continue;
        }
        println!("== {} ==\n{}\n", kind.label(), value);
    }
}

/// Process exit status for a failed run. Bad user input is 2, anything else 1.
fn exit_status(error: &GenerateError) -> u8 {
    match error {
        GenerateError::InvalidInput(_) => 2,
        _ => 1,
    }
}

async fn run(cli: Cli) -> Result<(), GenerateError> {
    let request = request_from(cli.command)?;
    debug!("{:?}", request);

    let config = AppConfig::load()?;
    let assistant = RecipeAssistant::from_config(&config)?;
    let recipe = assistant.generate(&request).await?;

    for notice in &recipe.notices {
        eprintln!("warning: {}", notice);
    }

    if cli.raw {
        println!("{}", recipe.text);
    } else {
        print_recipe(&recipe);
    }

    if let Some(dir) = cli.save {
        let path = save_recipe(&dir, &recipe.file_name, &recipe.text).await?;
        eprintln!("Saved to {}", path.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    env_logger::init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_status(&e))
        }
    }
}
