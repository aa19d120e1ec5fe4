//! Recipe data model and the result envelope returned by generation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutritional information for a recipe.
///
/// Protein and carbs are opaque display labels (e.g. "12g"); no unit
/// validation is performed on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
}

/// A single recipe suggestion.
///
/// Serialized with camelCase field names (`cookingTime`) to match the
/// JSON schema the model is asked to produce and the persisted store
/// format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    /// Step-by-step cooking instructions, order-significant.
    pub instructions: Vec<String>,
    /// Estimated cooking time label (e.g. "20 minutes").
    pub cooking_time: String,
    /// Expected to be one of Easy/Medium/Hard, but not enforced.
    pub difficulty: String,
    pub nutrition: NutritionInfo,
}

/// Uniform result envelope for recipe generation.
///
/// Expected failure modes (empty input, provider error, unparseable
/// response) are reported through this envelope rather than as errors.
/// Built through the constructors so that `success == true` always
/// carries a non-empty recipe list and `success == false` always
/// carries a message and no recipes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeResult {
    pub recipes: Vec<Recipe>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecipeResult {
    /// Build a successful result with the given recipes.
    pub fn success(recipes: Vec<Recipe>, message: impl Into<String>) -> Self {
        debug_assert!(!recipes.is_empty());
        Self {
            recipes,
            success: true,
            message: Some(message.into()),
        }
    }

    /// Build a failed result carrying only an explanation.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            recipes: Vec::new(),
            success: false,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            name: "Garlic Pasta".to_string(),
            ingredients: vec!["pasta".to_string(), "garlic".to_string()],
            instructions: vec!["Boil pasta".to_string(), "Add garlic".to_string()],
            cooking_time: "15 minutes".to_string(),
            difficulty: "Easy".to_string(),
            nutrition: NutritionInfo {
                calories: 400,
                protein: "12g".to_string(),
                carbs: "65g".to_string(),
            },
        }
    }

    #[test]
    fn test_recipe_json_uses_camel_case() {
        let json = serde_json::to_value(sample_recipe()).unwrap();
        assert!(json.get("cookingTime").is_some());
        assert!(json.get("cooking_time").is_none());
    }

    #[test]
    fn test_failure_envelope_has_message_and_no_recipes() {
        let result = RecipeResult::failure("nope");
        assert!(!result.success);
        assert!(result.recipes.is_empty());
        assert_eq!(result.message.as_deref(), Some("nope"));
    }

    #[test]
    fn test_success_envelope_carries_recipes() {
        let result = RecipeResult::success(vec![sample_recipe()], "Generated 1 recipes");
        assert!(result.success);
        assert_eq!(result.recipes.len(), 1);
    }
}
