use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use hera_core::{ServiceError, now_rfc3339};

use crate::ModuleState;
use crate::model::{
    LayoutConfig, LayoutResponse, LayoutSection, NavItem, Tile, TilesResponse, WorkspaceCard,
    WorkspaceScope,
};
type AppState = Arc<ModuleState>;

pub fn router(state: Arc<ModuleState>) -> Router {
    Router::new()
        .route("/v2/{domain}/{section}/{workspace}", get(get_layout))
        .route("/v2/{domain}/{section}/{workspace}/export", get(export))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct LayoutQuery {
    #[serde(default)]
    pub format: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /v2/{domain}/{section}/{workspace}
// ---------------------------------------------------------------------------

/// Serve the layout for one workspace scope.
///
/// An unknown workspace id is 404 — that is the "not configured"
/// display state, not a crash. Unknown domain/section ids are allowed
/// through: they only shape URLs, types are workspace-scoped.
async fn get_layout(
    State(state): State<AppState>,
    Path((domain, section, workspace)): Path<(String, String, String)>,
    Query(query): Query<LayoutQuery>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let ws = state
        .registry
        .workspace(&workspace)
        .ok_or_else(|| ServiceError::NotFound(format!("workspace '{}' not configured", workspace)))?;

    let scope = WorkspaceScope::new(domain, section, workspace);
    let cards = state.fetch_cards(&scope).await?;

    if query.format.as_deref() == Some("tiles") {
        let response = TilesResponse {
            workspace: ws.id.to_string(),
            tiles: cards.iter().map(Tile::from_card).collect(),
        };
        return Ok(Json(serde_json::to_value(response).map_err(internal)?));
    }

    let response = LayoutResponse {
        workspace: serde_json::to_value(ws).map_err(internal)?,
        layout_config: build_layout(&state, ws, cards),
    };
    Ok(Json(serde_json::to_value(response).map_err(internal)?))
}

/// Assemble nav items and card sections for a workspace.
///
/// Nav items are the workspace's default nav plus one item per catalog
/// section; cards pick their section via `nav_code`, defaulting to the
/// workspace's default nav.
fn build_layout(
    state: &ModuleState,
    ws: &hera_config::Workspace,
    cards: Vec<WorkspaceCard>,
) -> LayoutConfig {
    let mut nav_items = vec![NavItem {
        code: ws.default_nav.to_string(),
        title: ws.name.to_string(),
        icon: ws.icon.to_string(),
    }];
    for section_id in ws.sections {
        // A workspace whose default nav is one of its sections already
        // has that nav item; appending it again would duplicate the
        // code and split its cards across two sections.
        if *section_id == ws.default_nav {
            continue;
        }
        if let Some(section) = state.registry.section(section_id) {
            nav_items.push(NavItem {
                code: section.id.to_string(),
                title: section.name.to_string(),
                icon: section.icon.to_string(),
            });
        }
    }

    let mut sections: Vec<LayoutSection> = nav_items
        .iter()
        .map(|item| LayoutSection {
            nav_code: item.code.clone(),
            title: item.title.clone(),
            cards: Vec::new(),
        })
        .collect();

    for card in cards {
        let code = card.nav_code.as_deref().unwrap_or(ws.default_nav);
        match sections.iter_mut().find(|s| s.nav_code == code) {
            Some(section) => section.cards.push(card),
            // Unknown nav code: land in the default section rather
            // than dropping the card.
            None => sections[0].cards.push(card),
        }
    }
    sections.retain(|s| s.nav_code == ws.default_nav || !s.cards.is_empty());

    LayoutConfig {
        default_nav_code: ws.default_nav.to_string(),
        nav_items,
        sections,
    }
}

// ---------------------------------------------------------------------------
// GET /v2/{domain}/{section}/{workspace}/export
// ---------------------------------------------------------------------------

/// Export the scope's cards. Requires the `workspace:{id}:export`
/// permission; denial is audit-logged by the authenticator and
/// returned as a structured 401/403, never swallowed.
async fn export(
    State(state): State<AppState>,
    Path((domain, section, workspace)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let permission = format!("workspace:{}:export", workspace);
    state.authenticator.check(&headers, &permission)?;

    let scope = WorkspaceScope::new(domain, section, workspace);
    let cards = state.fetch_cards(&scope).await?;
    info!(scope = %scope, count = cards.len(), "workspace export");

    Ok(Json(serde_json::json!({
        "scope": scope,
        "exported_at": now_rfc3339(),
        "cards": cards,
    })))
}

fn internal(e: serde_json::Error) -> ServiceError {
    ServiceError::Internal(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TargetType;
    use crate::provider::StaticCardProvider;
    use crate::{ModuleState, prefs::PrefsStore, provider::CachingProvider};
    use hera_config::Registry;
    use hera_core::{AllowAll, DenyAll};
    use http_body_util::BodyExt;
    use std::collections::HashMap;
    use std::sync::RwLock;
    use tower::ServiceExt;

    fn sample_cards() -> Vec<WorkspaceCard> {
        vec![
            WorkspaceCard {
                label: "Customers".into(),
                subtitle: Some("Manage customer records".into()),
                icon: Some("users".into()),
                view_slug: "customers".into(),
                target_type: TargetType::Entity,
                entity_type: Some("customers".into()),
                nav_code: None,
                metrics: None,
                status: None,
                priority: Some(1),
            },
            WorkspaceCard {
                label: "Daily Sales".into(),
                subtitle: None,
                icon: None,
                view_slug: "daily-sales".into(),
                target_type: TargetType::Transaction,
                entity_type: Some("sales".into()),
                nav_code: Some("pos".into()),
                metrics: None,
                status: None,
                priority: None,
            },
        ]
    }

    fn test_state(authenticator: Arc<dyn hera_core::Authenticator>) -> (Arc<ModuleState>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let mut inner = StaticCardProvider::new();
        inner.insert(&WorkspaceScope::new("retail", "pos", "main"), sample_cards());
        let state = Arc::new(ModuleState {
            registry: Arc::new(Registry::builtin()),
            provider: Arc::new(CachingProvider::new(Box::new(inner))),
            prefs: PrefsStore::open(dir.path()).unwrap(),
            authenticator,
            views: RwLock::new(HashMap::new()),
        });
        (state, dir)
    }

    async fn get_json(
        router: Router,
        uri: &str,
    ) -> (axum::http::StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn layout_shape() {
        let (state, _dir) = test_state(Arc::new(AllowAll));
        let (status, body) = get_json(router(state), "/v2/retail/pos/main").await;
        assert_eq!(status, axum::http::StatusCode::OK);

        assert_eq!(body["workspace"]["id"], "main");
        let layout = &body["layout_config"];
        assert_eq!(layout["default_nav_code"], "overview");
        let nav_codes: Vec<&str> = layout["nav_items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["code"].as_str().unwrap())
            .collect();
        assert!(nav_codes.contains(&"overview"));
        assert!(nav_codes.contains(&"pos"));

        // Card without nav_code lands in the default section; the
        // pos-coded card lands under pos.
        let sections = layout["sections"].as_array().unwrap();
        let overview = sections.iter().find(|s| s["nav_code"] == "overview").unwrap();
        assert_eq!(overview["cards"][0]["view_slug"], "customers");
        let pos = sections.iter().find(|s| s["nav_code"] == "pos").unwrap();
        assert_eq!(pos["cards"][0]["view_slug"], "daily-sales");
    }

    // The auditor workspace's default nav is also one of its sections;
    // the layout must carry a single nav item and section for that code.
    #[tokio::test]
    async fn default_nav_shared_with_section_is_not_duplicated() {
        let dir = tempfile::tempdir().unwrap();
        let mut inner = StaticCardProvider::new();
        inner.insert(
            &WorkspaceScope::new("audit", "engagements", "auditor"),
            vec![WorkspaceCard {
                label: "Clients".into(),
                subtitle: None,
                icon: None,
                view_slug: "clients".into(),
                target_type: TargetType::Entity,
                entity_type: Some("clients".into()),
                nav_code: None,
                metrics: None,
                status: None,
                priority: None,
            }],
        );
        let state = Arc::new(ModuleState {
            registry: Arc::new(Registry::builtin()),
            provider: Arc::new(CachingProvider::new(Box::new(inner))),
            prefs: PrefsStore::open(dir.path()).unwrap(),
            authenticator: Arc::new(AllowAll),
            views: RwLock::new(HashMap::new()),
        });

        let (status, body) = get_json(router(state), "/v2/audit/engagements/auditor").await;
        assert_eq!(status, axum::http::StatusCode::OK);

        let layout = &body["layout_config"];
        let nav_codes: Vec<&str> = layout["nav_items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["code"].as_str().unwrap())
            .collect();
        assert_eq!(nav_codes, ["engagements", "reporting"]);

        let section_codes: Vec<&str> = layout["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["nav_code"].as_str().unwrap())
            .collect();
        assert_eq!(section_codes, ["engagements"]);
        assert_eq!(
            layout["sections"][0]["cards"].as_array().unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn tiles_format() {
        let (state, _dir) = test_state(Arc::new(AllowAll));
        let (status, body) = get_json(router(state), "/v2/retail/pos/main?format=tiles").await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["workspace"], "main");
        let tiles = body["tiles"].as_array().unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0]["title"], "Customers");
        assert_eq!(tiles[0]["target"], "entity");
    }

    #[tokio::test]
    async fn unknown_workspace_is_404_with_message() {
        let (state, _dir) = test_state(Arc::new(AllowAll));
        let (status, body) = get_json(router(state), "/v2/retail/pos/mezzanine").await;
        assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert!(body["message"].as_str().unwrap().contains("mezzanine"));
    }

    #[tokio::test]
    async fn scope_without_cards_is_404() {
        let (state, _dir) = test_state(Arc::new(AllowAll));
        let (status, body) = get_json(router(state), "/v2/salon/scheduling/front-desk").await;
        assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
        assert!(body["message"].as_str().unwrap().contains("no cards configured"));
    }

    #[tokio::test]
    async fn export_allowed() {
        let (state, _dir) = test_state(Arc::new(AllowAll));
        let (status, body) = get_json(router(state), "/v2/retail/pos/main/export").await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["cards"].as_array().unwrap().len(), 2);
        assert!(body["exported_at"].as_str().unwrap().contains('T'));
    }

    #[tokio::test]
    async fn export_denied_is_structured_403() {
        let (state, _dir) = test_state(Arc::new(DenyAll));
        let (status, body) = get_json(router(state), "/v2/retail/pos/main/export").await;
        assert_eq!(status, axum::http::StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "PERMISSION_DENIED");
        assert!(body["message"].as_str().unwrap().contains("workspace:main:export"));
    }
}
