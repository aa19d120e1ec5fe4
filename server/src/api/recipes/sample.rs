use axum::Json;
use tureen_core::types::{NutritionInfo, Recipe, RecipeResult};

/// Sample recipes for testing the client without an API key.
#[utoipa::path(
    get,
    path = "/api/recipes/sample",
    tag = "recipes",
    responses(
        (status = 200, description = "Sample recipe", body = RecipeResult)
    )
)]
pub async fn sample_recipes() -> Json<RecipeResult> {
    let sample = Recipe {
        name: "Sample Pasta Dish".to_string(),
        ingredients: vec![
            "pasta".to_string(),
            "garlic".to_string(),
            "olive oil".to_string(),
            "parmesan".to_string(),
        ],
        instructions: vec![
            "Boil pasta according to package instructions".to_string(),
            "Sauté minced garlic in olive oil".to_string(),
            "Toss pasta with garlic oil and parmesan".to_string(),
        ],
        cooking_time: "15 minutes".to_string(),
        difficulty: "Easy".to_string(),
        nutrition: NutritionInfo {
            calories: 400,
            protein: "12g".to_string(),
            carbs: "65g".to_string(),
        },
    };

    Json(RecipeResult::success(
        vec![sample],
        "Sample recipe for testing purposes",
    ))
}
