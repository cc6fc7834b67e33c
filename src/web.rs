use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::config::WebConfig;
use crate::models::Catalog;

pub fn app(catalog: Arc<Catalog>, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(catalog))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}

pub async fn run(config: &WebConfig, catalog: Catalog) -> Result<()> {
    let app = app(Arc::new(catalog), &config.static_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.port);
    axum::serve(listener, app)
        .await
        .context("Web server stopped unexpectedly")?;
    Ok(())
}
