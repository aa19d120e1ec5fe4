use crate::AppState;
use axum::routing::get;
use axum::{extract::State, Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Returns the router for health endpoints (mounted at the root)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(api_health))
}

#[derive(OpenApi)]
#[openapi(
    paths(health, api_health),
    components(schemas(HealthResponse, ApiHealthResponse, ProviderHealth))
)]
pub struct ApiDoc;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderHealth {
    pub provider: String,
    pub model: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub ai_provider: ProviderHealth,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "tureen-server",
    })
}

/// Detailed health check that probes the AI provider with a one-word
/// prompt. Reports "degraded" when the provider is unreachable or
/// answers nonsense.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Detailed service health", body = ApiHealthResponse))
)]
pub async fn api_health(State(services): State<AppState>) -> Json<ApiHealthResponse> {
    let provider_ok = match services.provider.complete("Say 'Hello' in one word.").await {
        Ok(text) => text.contains("Hello"),
        Err(e) => {
            tracing::warn!("AI provider health check failed: {}", e);
            false
        }
    };

    Json(ApiHealthResponse {
        status: if provider_ok { "healthy" } else { "degraded" },
        ai_provider: ProviderHealth {
            provider: services.provider.provider_name().to_string(),
            model: services.provider.model_name().to_string(),
            status: if provider_ok {
                "operational"
            } else {
                "unavailable"
            },
        },
    })
}
