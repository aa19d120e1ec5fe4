//! Ingredient validation and normalization.
//!
//! Raw ingredient strings from clients are cleaned here before they are
//! used anywhere else: trimmed, lowercased, and length-capped.

use thiserror::Error;

/// Maximum length of a single ingredient after trimming, in characters.
pub const MAX_INGREDIENT_LEN: usize = 100;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Ingredients list cannot be empty")]
    EmptyList,

    #[error("Ingredient '{0}' is too long")]
    TooLong(String),
}

/// Clean and normalize a raw ingredient list.
///
/// Each entry is trimmed and lowercased. Entries that are empty after
/// trimming or longer than [`MAX_INGREDIENT_LEN`] characters are dropped
/// entirely, never truncated. Relative order is preserved and duplicates
/// are kept.
pub fn normalize(ingredients: &[String]) -> Vec<String> {
    ingredients
        .iter()
        .map(|raw| raw.trim().to_lowercase())
        .filter(|cleaned| !cleaned.is_empty() && cleaned.chars().count() <= MAX_INGREDIENT_LEN)
        .collect()
}

/// Validate a raw ingredient list before normalization.
///
/// Rejects an empty list and any entry longer than
/// [`MAX_INGREDIENT_LEN`] characters after trimming. Validation does not
/// guarantee a non-empty [`normalize`] result (an all-blank list passes
/// here), so callers must re-check emptiness after normalizing.
pub fn validate(ingredients: &[String]) -> Result<(), ValidationError> {
    if ingredients.is_empty() {
        return Err(ValidationError::EmptyList);
    }

    for ingredient in ingredients {
        if ingredient.trim().chars().count() > MAX_INGREDIENT_LEN {
            return Err(ValidationError::TooLong(ingredient.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        let result = normalize(&strings(&["  Chicken  ", "RICE"]));
        assert_eq!(result, strings(&["chicken", "rice"]));
    }

    #[test]
    fn test_normalize_drops_blank_entries() {
        let result = normalize(&strings(&["tomato", "   ", "", "basil"]));
        assert_eq!(result, strings(&["tomato", "basil"]));
    }

    #[test]
    fn test_normalize_drops_overlong_entries_without_truncating() {
        let long = "x".repeat(MAX_INGREDIENT_LEN + 1);
        let result = normalize(&[long, "salt".to_string()]);
        assert_eq!(result, strings(&["salt"]));
    }

    #[test]
    fn test_normalize_preserves_order_and_duplicates() {
        let result = normalize(&strings(&["egg", "flour", "egg"]));
        assert_eq!(result, strings(&["egg", "flour", "egg"]));
    }

    #[test]
    fn test_normalize_keeps_max_length_entry() {
        let exact = "y".repeat(MAX_INGREDIENT_LEN);
        let result = normalize(&[format!("  {}  ", exact)]);
        assert_eq!(result, vec![exact]);
    }

    #[test]
    fn test_validate_rejects_empty_list() {
        assert_eq!(validate(&[]), Err(ValidationError::EmptyList));
    }

    #[test]
    fn test_validate_rejects_overlong_ingredient() {
        let long = "x".repeat(MAX_INGREDIENT_LEN + 1);
        let result = validate(&[long.clone()]);
        assert_eq!(result, Err(ValidationError::TooLong(long)));
    }

    #[test]
    fn test_validate_accepts_blank_entries() {
        // Blank entries pass validation; normalize drops them afterwards.
        assert!(validate(&strings(&["  ", "milk"])).is_ok());
    }
}
