use crate::{GenerateError, GenerationRequest, RecipeSections};
use log::info;
use std::path::{Component, Path, PathBuf};

/// Characters that cannot appear in a file name on common platforms.
const UNSAFE_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Lowercase `title` and replace spaces with underscores.
///
/// Path separators, other characters unsafe in file names, control
/// characters and leading dots also become underscores, so the slug is
/// always a single plain file name.
pub fn slugify(title: &str) -> String {
    let slug: String = title
        .replace(' ', "_")
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_control() || UNSAFE_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();
    let dots = slug.len() - slug.trim_start_matches('.').len();
    format!("{}{}", "_".repeat(dots), &slug[dots..])
}

/// File name offered for downloading the raw recipe text.
///
/// Dish requests are named after the dish (`pad_thai_recipe.txt`);
/// ingredient requests after the parsed title, or `custom_recipe.txt`
/// when no title was found.
pub fn download_file_name(request: &GenerationRequest, sections: &RecipeSections) -> String {
    match request {
        GenerationRequest::Dish { name, .. } => format!("{}_recipe.txt", slugify(name)),
        GenerationRequest::Ingredients { .. } => {
            let slug = slugify(&sections.title);
            if slug.is_empty() {
                "custom_recipe.txt".to_string()
            } else {
                format!("{}.txt", slug)
            }
        }
    }
}

/// Write the raw recipe text into `dir` under `file_name`.
///
/// # Errors
/// `GenerateError::InvalidInput` if `file_name` is not a plain file name
/// (it has a directory part, is absolute, or is `.`/`..`).
pub async fn save_recipe(dir: &Path, file_name: &str, text: &str) -> Result<PathBuf, GenerateError> {
    let mut components = Path::new(file_name).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        return Err(GenerateError::InvalidInput(format!(
            "Not a plain file name: {}",
            file_name
        )));
    }

    let path = dir.join(file_name);
    tokio::fs::write(&path, text).await?;
    info!("Saved recipe to {}", path.display());
    Ok(path)
}
