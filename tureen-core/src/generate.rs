//! Recipe generation orchestrator.
//!
//! Sequences normalization checks, the provider call, and response
//! parsing into a uniform [`RecipeResult`] envelope. No error crosses
//! this boundary unconverted: expected failure modes come back as a
//! failed envelope with a message.

use crate::llm::LlmProvider;
use crate::parse::parse_recipes;
use crate::prompts::render_suggest_recipes_prompt;
use crate::types::RecipeResult;

/// Outcome of one generation attempt.
///
/// Carries the raw model text alongside the result envelope so the
/// caller can record the full attempt in the interaction log. The raw
/// text is absent when the attempt failed before or during the provider
/// call.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub result: RecipeResult,
    pub raw_response: Option<String>,
}

impl GenerationOutcome {
    fn failed(message: impl Into<String>, raw_response: Option<String>) -> Self {
        Self {
            result: RecipeResult::failure(message),
            raw_response,
        }
    }
}

/// Generate recipe suggestions for the given ingredients.
///
/// Linear flow with no retries, short-circuiting on the first failure:
/// input emptiness check, non-blank filter, provider call, parse, and a
/// final non-empty-result check.
pub async fn generate_recipes(
    provider: &dyn LlmProvider,
    ingredients: &[String],
) -> GenerationOutcome {
    if ingredients.is_empty() {
        return GenerationOutcome::failed("No ingredients provided", None);
    }

    let valid_ingredients: Vec<String> = ingredients
        .iter()
        .filter(|ing| !ing.trim().is_empty())
        .cloned()
        .collect();
    if valid_ingredients.is_empty() {
        return GenerationOutcome::failed("No valid ingredients found", None);
    }

    let prompt = render_suggest_recipes_prompt(&valid_ingredients);

    tracing::debug!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        ingredient_count = valid_ingredients.len(),
        "Requesting recipe suggestions"
    );

    let raw_response = match provider.complete(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Recipe generation request failed");
            return GenerationOutcome::failed(format!("Failed to generate recipes: {}", e), None);
        }
    };

    let recipes = match parse_recipes(&raw_response) {
        Ok(recipes) => recipes,
        Err(e) => {
            return GenerationOutcome::failed(
                format!("Failed to generate recipes: {}", e),
                Some(raw_response),
            );
        }
    };

    if recipes.is_empty() {
        return GenerationOutcome::failed(
            "No recipes could be generated with the provided ingredients",
            Some(raw_response),
        );
    }

    let message = format!("Generated {} recipes using your ingredients", recipes.len());
    GenerationOutcome {
        result: RecipeResult::success(recipes, message),
        raw_response: Some(raw_response),
    }
}
