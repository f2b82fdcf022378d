use axum::{Router, http::Method, routing::get};
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod extract;
pub mod models;
pub mod routes;

pub use error::AppError;

/// Application state shared with every handler.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

async fn health_check_handler() -> &'static str {
    "OK"
}

pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check_handler))
        .merge(routes::question_routes::questions_router())
        .with_state(app_state)
        .layer(cors)
}

pub async fn run_http_server(
    db_pool: PgPool,
    http_addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app_state = Arc::new(AppState { db_pool });
    let app_router = create_app_router(app_state);

    tracing::info!("HTTP server listening on {http_addr}");
    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    axum::serve(listener, app_router).await?;
    Ok(())
}
