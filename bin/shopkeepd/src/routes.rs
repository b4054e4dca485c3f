//! Route registration — module routes + system endpoints.

use axum::Router;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;

use shopkeep_core::Module;
use tracing::info;

/// Build the complete router with all routes.
///
/// Module routes are merged at the router root — the catalog module
/// owns top-level paths like `/categories` and `/products`.
pub fn build_router(modules: Vec<Box<dyn Module>>) -> Router {
    let mut app = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/version", get(version));

    for module in &modules {
        info!("mounting '{}' module routes", module.name());
        app = app.merge(module.routes());
    }

    app
}

async fn index() -> impl IntoResponse {
    Redirect::to("/products")
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "shopkeepd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
