use crate::core::slug::slugify;
use crate::errors::{AppError, AppResult};

/// Print the slug of the joined arguments.
pub fn handle(text: &[String]) -> AppResult<()> {
    let input = text.join(" ");
    let slug = slugify(&input);
    if slug.is_empty() {
        return Err(AppError::InvalidSlug(input));
    }

    println!("{}", slug);
    Ok(())
}
