use crate::api::ErrorResponse;
use crate::AppState;
use axum::extract::{Path, State};
use axum::{http::StatusCode, response::IntoResponse, Json};
use tureen_core::storage::InteractionRecord;

#[utoipa::path(
    get,
    path = "/api/interactions/{id}",
    tag = "interactions",
    params(
        ("id" = String, Path, description = "Interaction ID")
    ),
    responses(
        (status = 200, description = "Interaction details", body = InteractionRecord),
        (status = 404, description = "Interaction not found", body = ErrorResponse),
        (status = 500, description = "Store unreadable", body = ErrorResponse)
    )
)]
pub async fn get_interaction(
    State(services): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match services.log.get_by_id(&id) {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Interaction not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to read interaction: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to read interaction".to_string(),
                }),
            )
                .into_response()
        }
    }
}
