use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tureen_core::storage::LogStats;

#[utoipa::path(
    get,
    path = "/api/interactions/stats",
    tag = "interactions",
    responses(
        (status = 200, description = "Aggregate statistics over the store", body = LogStats),
        (status = 500, description = "Store unreadable", body = ErrorResponse)
    )
)]
pub async fn interaction_stats(State(services): State<AppState>) -> impl IntoResponse {
    match services.log.stats() {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => {
            tracing::error!("Failed to compute interaction stats: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to compute interaction stats".to_string(),
                }),
            )
                .into_response()
        }
    }
}
