// src/bin/api_server.rs

use tableware_rest::infra::config;
use tableware_rest::transport;
use tableware_rest::TablewareService;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    config::init_tracing();

    // --- Service Initialization ---
    let service = match config::data_file() {
        Some(path) => {
            tracing::info!(path = %path.display(), "initializing snapshot-backed TablewareService");
            TablewareService::with_snapshot(path).await?
        }
        None => {
            tracing::info!("initializing in-memory TablewareService (set TABLEWARE_DATA_FILE to persist)");
            TablewareService::in_memory()
        }
    };
    tracing::info!(records = service.len().await, "TablewareService initialized");

    let app_state = transport::http::AppState::new(service);

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for Ctrl+C");
                return;
            }
            tracing::info!("shutdown signal received (Ctrl+C)");
        })
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}
