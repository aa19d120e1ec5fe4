pub mod all;
pub mod get;
pub mod recent;
pub mod stats;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/interactions endpoints (mounted at /api/interactions)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(all::all_interactions))
        .route("/recent", get(recent::recent_interactions))
        .route("/stats", get(stats::interaction_stats))
        .route("/{id}", get(get::get_interaction))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        all::all_interactions,
        recent::recent_interactions,
        stats::interaction_stats,
        get::get_interaction,
    ),
    components(schemas(
        all::AllInteractionsResponse,
        recent::RecentInteractionsResponse,
        tureen_core::storage::InteractionRecord,
        tureen_core::storage::UserInput,
        tureen_core::storage::LlmInteraction,
        tureen_core::storage::ParsedOutput,
        tureen_core::storage::InteractionMetadata,
        tureen_core::storage::LogStats,
    ))
)]
pub struct ApiDoc;
