pub mod generate;
pub mod sample;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate::generate_recipes))
        .route("/sample", get(sample::sample_recipes))
}

#[derive(OpenApi)]
#[openapi(
    paths(generate::generate_recipes, sample::sample_recipes),
    components(schemas(generate::GenerateRecipesRequest))
)]
pub struct ApiDoc;
