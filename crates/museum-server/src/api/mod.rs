//! HTTP surface: router assembly, health endpoint and the serve loop

pub mod response;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::SqlitePool;
use std::future::Future;
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::{db, features, middleware};

#[derive(Clone)]
struct HealthState {
    pool: SqlitePool,
    site_name: String,
}

/// Build the application router with all routes and middleware
pub fn create_router(pool: SqlitePool, config: &Config) -> Router {
    let health_state = HealthState {
        pool: pool.clone(),
        site_name: config.server.site_name.clone(),
    };

    Router::new()
        .route("/health", get(health_check))
        .with_state(health_state)
        .nest("/catalog", features::public_router(pool.clone()))
        .nest("/api/v1/admin", features::admin_router(pool))
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Bind the configured address and serve until `shutdown` resolves
pub async fn serve<F>(pool: SqlitePool, config: &Config, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(pool, config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid listen address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, site = %config.server.site_name, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

async fn health_check(State(state): State<HealthState>) -> Result<Response, AppError> {
    db::health_check(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "Database health check failed");
        AppError::Unavailable("database unreachable".to_string())
    })?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "database": "connected",
            "site": state.site_name,
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
        .into_response())
}
