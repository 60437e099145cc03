//! Route registration — collects all module routes + system endpoints.

use std::sync::Arc;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

use hera_config::Registry;

/// Build the complete router with all routes.
///
/// Module routes are already `Router<()>` (they called `.with_state()`
/// internally) and mount under `/{module_name}`.
pub fn build_router(registry: Arc<Registry>, module_routes: Vec<(&str, Router)>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/meta/registry", get(registry_endpoint))
        .with_state(registry);

    for (name, router) in module_routes {
        app = app.nest(&format!("/{}", name), router);
    }
    app
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "herad",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Serve the raw catalog for frontends and tooling.
async fn registry_endpoint(
    axum::extract::State(registry): axum::extract::State<Arc<Registry>>,
) -> impl IntoResponse {
    axum::Json(serde_json::to_value(registry.as_ref()).unwrap_or_default())
}
