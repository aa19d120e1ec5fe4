use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use tureen_core::ingredients;
use tureen_core::types::RecipeResult;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipesRequest {
    pub ingredients: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/generate",
    tag = "recipes",
    request_body = GenerateRecipesRequest,
    responses(
        (status = 200, description = "Recipes generated successfully", body = RecipeResult),
        (status = 400, description = "Invalid ingredients", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_recipes(
    State(services): State<AppState>,
    Json(request): Json<GenerateRecipesRequest>,
) -> impl IntoResponse {
    if let Err(e) = ingredients::validate(&request.ingredients) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response();
    }

    let sanitized = ingredients::normalize(&request.ingredients);
    if sanitized.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No valid ingredients found after sanitization".to_string(),
            }),
        )
            .into_response();
    }

    let outcome = tureen_core::generate_recipes(services.provider.as_ref(), &sanitized).await;
    let result = outcome.result;

    // Record every attempt, success or not. A storage failure must not
    // turn a served generation into a 5xx, but it is never silent.
    let error_message = if result.success {
        None
    } else {
        result.message.as_deref()
    };
    if let Err(e) = services.log.append(
        &sanitized,
        outcome.raw_response.as_deref(),
        &result.recipes,
        result.success,
        error_message,
    ) {
        tracing::error!("Failed to record interaction: {}", e);
    }

    if !result.success {
        let error = result
            .message
            .clone()
            .unwrap_or_else(|| "Recipe generation failed".to_string());
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error }))
            .into_response();
    }

    (StatusCode::OK, Json(result)).into_response()
}
