//! OGE Backend Server
//!
//! REST API server listing items from PostgreSQL.

use anyhow::Context;
use oge_backend::api::create_router;
use oge_backend::config::Config;
use oge_backend::db::DatabasePool;
use oge_backend::error::ErrorResponse;
use oge_backend::models::{HealthResponse, ItemResponse};
use oge_backend::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        oge_backend::api::handlers::health_check,
        oge_backend::api::handlers::list_items,
    ),
    components(schemas(HealthResponse, ItemResponse, ErrorResponse)),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Items", description = "Read-only item listing"),
    ),
    info(
        title = "OGE Items API",
        version = "0.1.0",
        description = "Read-only REST API over the items table",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration and pool come first: nothing is bound until both succeed
    let config = Config::from_env().context("failed to load configuration")?;
    let db = DatabasePool::connect(&config.database)
        .await
        .context("failed to create database pool")?;
    let state = Arc::new(AppState::with_database(db));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(Arc::clone(&state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = config.server.bind_address();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            state.shutdown().await;
            return Err(e).with_context(|| format!("failed to bind {addr}"));
        }
    };
    info!("Listening on {}", addr);
    info!("Swagger UI available at http://{}/swagger-ui/", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // In-flight requests have drained; release the pool before exiting
    state.shutdown().await;
    served?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
