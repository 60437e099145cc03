//! The v1 configuration API: read-only views over the catalog, all
//! wrapped in the `{success, data}` envelope.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use hera_config::{Crumb, breadcrumbs, generate_smart_code};
use hera_core::{Envelope, ServiceError};

use crate::ModuleState;

type AppState = Arc<ModuleState>;

pub fn router(state: Arc<ModuleState>) -> Router {
    Router::new()
        .route("/v1/config/registry", get(get_registry))
        .route("/v1/config/resolve", get(get_resolved))
        .route("/v1/config/smart-code", get(get_smart_code))
        .route("/v1/config/breadcrumbs", get(get_breadcrumbs))
        .with_state(state)
}

async fn get_registry(
    State(state): State<AppState>,
) -> Result<Json<Envelope<serde_json::Value>>, ServiceError> {
    let value = serde_json::to_value(state.registry.as_ref())
        .map_err(|e| ServiceError::Internal(e.to_string()))?;
    Ok(Json(Envelope::ok(value)))
}

#[derive(Debug, Default, Deserialize)]
pub struct ResolveQuery {
    pub domain: Option<String>,
    pub section: Option<String>,
    pub workspace: Option<String>,
}

async fn get_resolved(
    State(state): State<AppState>,
    Query(q): Query<ResolveQuery>,
) -> Result<Json<Envelope<serde_json::Value>>, ServiceError> {
    let resolved = state.registry.resolve(
        q.domain.as_deref(),
        q.section.as_deref(),
        q.workspace.as_deref(),
    );
    let value =
        serde_json::to_value(&resolved).map_err(|e| ServiceError::Internal(e.to_string()))?;
    Ok(Json(Envelope::ok(value)))
}

#[derive(Debug, Default, Deserialize)]
pub struct SmartCodeQuery {
    pub domain: Option<String>,
    pub section: Option<String>,
    pub workspace: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub subtype: Option<String>,
}

async fn get_smart_code(
    Query(q): Query<SmartCodeQuery>,
) -> Result<Json<Envelope<serde_json::Value>>, ServiceError> {
    let domain = q
        .domain
        .as_deref()
        .ok_or_else(|| ServiceError::Validation("'domain' is required".to_string()))?;
    let code = generate_smart_code(
        domain,
        q.section.as_deref(),
        q.workspace.as_deref(),
        q.kind.as_deref(),
        q.subtype.as_deref(),
    );
    Ok(Json(Envelope::ok(serde_json::json!({ "smart_code": code }))))
}

#[derive(Debug, Default, Deserialize)]
pub struct BreadcrumbQuery {
    pub domain: Option<String>,
    pub section: Option<String>,
    pub workspace: Option<String>,
    pub entity_type: Option<String>,
    pub id: Option<String>,
}

async fn get_breadcrumbs(
    State(state): State<AppState>,
    Query(q): Query<BreadcrumbQuery>,
) -> Result<Json<Envelope<Vec<Crumb>>>, ServiceError> {
    let trail = breadcrumbs(
        &state.registry,
        q.domain.as_deref(),
        q.section.as_deref(),
        q.workspace.as_deref(),
        q.entity_type.as_deref(),
        q.id.as_deref(),
    );
    Ok(Json(Envelope::ok(trail)))
}
