use crate::api::ErrorResponse;
use crate::AppState;
use axum::extract::{Query, State};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tureen_core::storage::InteractionRecord;
use utoipa::{IntoParams, ToSchema};

const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentQuery {
    /// Maximum number of interactions to return (default 10)
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentInteractionsResponse {
    pub interactions: Vec<InteractionRecord>,
    pub total: usize,
    pub limit: usize,
}

#[utoipa::path(
    get,
    path = "/api/interactions/recent",
    tag = "interactions",
    params(RecentQuery),
    responses(
        (status = 200, description = "Most recent interactions", body = RecentInteractionsResponse),
        (status = 500, description = "Store unreadable", body = ErrorResponse)
    )
)]
pub async fn recent_interactions(
    State(services): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    match services.log.get_recent(limit) {
        Ok(interactions) => {
            let total = interactions.len();
            (
                StatusCode::OK,
                Json(RecentInteractionsResponse {
                    interactions,
                    total,
                    limit,
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
