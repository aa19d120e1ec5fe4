use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tureen_core::storage::InteractionRecord;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AllInteractionsResponse {
    pub interactions: Vec<InteractionRecord>,
    pub total: usize,
}

#[utoipa::path(
    get,
    path = "/api/interactions/all",
    tag = "interactions",
    responses(
        (status = 200, description = "All stored interactions", body = AllInteractionsResponse),
        (status = 500, description = "Store unreadable", body = ErrorResponse)
    )
)]
pub async fn all_interactions(State(services): State<AppState>) -> impl IntoResponse {
    match services.log.get_all() {
        Ok(interactions) => {
            let total = interactions.len();
            (
                StatusCode::OK,
                Json(AllInteractionsResponse {
                    interactions,
                    total,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to read interactions: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to read interactions".to_string(),
                }),
            )
                .into_response()
        }
    }
}
