mod api;

use axum::Router;
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tureen_core::llm::{create_provider_from_env, LlmProvider};
use tureen_core::storage::InteractionLog;

/// Services shared across all handlers.
pub struct Services {
    pub provider: Box<dyn LlmProvider>,
    pub log: InteractionLog,
}

/// Application state shared across all handlers
pub type AppState = Arc<Services>;

fn init_telemetry() {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    init_telemetry();

    let provider = create_provider_from_env().expect("Failed to configure AI provider");
    tracing::info!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        "AI provider configured"
    );

    let storage_file =
        env::var("TUREEN_STORAGE_FILE").unwrap_or_else(|_| "recipe_interactions.json".to_string());
    let log = InteractionLog::new(&storage_file).expect("Failed to open interaction store");
    tracing::info!(storage_file = %storage_file, "Interaction store ready");

    let services: AppState = Arc::new(Services { provider, log });

    let swagger_ui = utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .nest("/api/recipes", api::recipes::router())
        .nest("/api/interactions", api::interactions::router())
        .merge(api::health::router())
        .merge(swagger_ui)
        .with_state(services)
        // Any origin is allowed; tighten per environment.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let port: u16 = env::var("TUREEN_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui/", port);

    axum::serve(listener, app).await.unwrap();
}
