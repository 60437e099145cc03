use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use hera_core::{ServiceError, new_id};

use crate::model::{WorkspaceCard, WorkspaceScope};
use crate::routing::{RouteOutcome, route_card};
use crate::state::{GroupBy, Phase, SortKey, ViewAction, ViewState, reduce};
use crate::{ModuleState, ViewSession};

type AppState = Arc<ModuleState>;

pub fn router(state: Arc<ModuleState>) -> Router {
    Router::new()
        .route("/v2/{domain}/{section}/{workspace}/views", post(open_view))
        .route(
            "/v2/{domain}/{section}/{workspace}/views/{view_id}",
            get(get_view).delete(close_view),
        )
        .route(
            "/v2/{domain}/{section}/{workspace}/views/{view_id}/actions",
            post(apply_action),
        )
        .route(
            "/v2/{domain}/{section}/{workspace}/views/{view_id}/activate",
            post(activate_card),
        )
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// Client-facing snapshot of a view: phase, settings and the visible
/// (filtered, sorted, grouped) cards.
#[derive(Debug, Serialize)]
pub struct ViewSnapshot {
    pub view_id: String,
    #[serde(flatten)]
    pub phase: Phase,
    pub query: String,
    pub sort: SortKey,
    pub group: GroupBy,
    pub favorites: Vec<String>,
    pub recents: Vec<String>,
    pub groups: Vec<GroupPayload>,
}

#[derive(Debug, Serialize)]
pub struct GroupPayload {
    pub key: String,
    pub cards: Vec<WorkspaceCard>,
}

fn snapshot(view_id: &str, state: &ViewState) -> ViewSnapshot {
    ViewSnapshot {
        view_id: view_id.to_string(),
        phase: state.phase.clone(),
        query: state.query.clone(),
        sort: state.sort,
        group: state.group,
        favorites: state.favorites.iter().cloned().collect(),
        recents: state.recents.clone(),
        groups: state
            .grouped()
            .into_iter()
            .map(|(key, cards)| GroupPayload {
                key,
                cards: cards.into_iter().cloned().collect(),
            })
            .collect(),
    }
}

#[derive(Debug, Deserialize)]
pub struct ActivateRequest {
    pub view_slug: String,
}

// ---------------------------------------------------------------------------
// POST /v2/{d}/{s}/{w}/views
// ---------------------------------------------------------------------------

/// Open a view: seed favorites from prefs, run the fetch, settle into
/// Ready or Error. A failed fetch is a view in Error state — the
/// client renders the message and offers Refresh, so the response is
/// still 200.
async fn open_view(
    State(state): State<AppState>,
    Path((domain, section, workspace)): Path<(String, String, String)>,
) -> Result<Json<ViewSnapshot>, ServiceError> {
    if state.registry.workspace(&workspace).is_none() {
        return Err(ServiceError::NotFound(format!(
            "workspace '{}' not configured",
            workspace
        )));
    }

    let scope = WorkspaceScope::new(domain, section, workspace);
    let favorites = state.load_favorites(&scope);
    let view = ViewState::with_favorites(favorites);
    let event = fetch_event(&state, &scope).await;
    let view = reduce(view, event);

    let view_id = new_id();
    let snap = snapshot(&view_id, &view);
    state
        .views
        .write()
        .unwrap()
        .insert(view_id.clone(), ViewSession { scope, state: view });
    debug!(view_id, "view opened");
    Ok(Json(snap))
}

/// Run the single in-flight fetch for a Loading view and return the
/// resulting fetch event. The fetch itself runs off the async workers.
async fn fetch_event(state: &ModuleState, scope: &WorkspaceScope) -> ViewAction {
    match state.fetch_cards(scope).await {
        Ok(cards) => ViewAction::CardsLoaded { cards },
        Err(e) => ViewAction::LoadFailed {
            message: e.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// GET /v2/{d}/{s}/{w}/views/{view_id}
// ---------------------------------------------------------------------------

async fn get_view(
    State(state): State<AppState>,
    Path((_, _, _, view_id)): Path<(String, String, String, String)>,
) -> Result<Json<ViewSnapshot>, ServiceError> {
    let views = state.views.read().unwrap();
    let session = views
        .get(&view_id)
        .ok_or_else(|| ServiceError::NotFound(format!("view '{}' not found", view_id)))?;
    Ok(Json(snapshot(&view_id, &session.state)))
}

// ---------------------------------------------------------------------------
// DELETE /v2/{d}/{s}/{w}/views/{view_id}
// ---------------------------------------------------------------------------

/// Navigation away: the session and its cards are discarded.
async fn close_view(
    State(state): State<AppState>,
    Path((_, _, _, view_id)): Path<(String, String, String, String)>,
) -> Result<StatusCode, ServiceError> {
    match state.views.write().unwrap().remove(&view_id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(ServiceError::NotFound(format!("view '{}' not found", view_id))),
    }
}

// ---------------------------------------------------------------------------
// POST /v2/{d}/{s}/{w}/views/{view_id}/actions
// ---------------------------------------------------------------------------

/// Apply one view action through the reducer.
///
/// Fetch-lifecycle events are module-internal and rejected from the
/// wire. A `refresh` action re-enters Loading and immediately runs the
/// fetch, so the returned snapshot is already settled.
async fn apply_action(
    State(state): State<AppState>,
    Path((_, _, _, view_id)): Path<(String, String, String, String)>,
    Json(action): Json<ViewAction>,
) -> Result<Json<ViewSnapshot>, ServiceError> {
    if action.is_fetch_event() {
        return Err(ServiceError::Validation(
            "fetch events cannot be submitted directly".to_string(),
        ));
    }

    let persist_favorites = matches!(action, ViewAction::ToggleFavorite { .. });
    let was_refresh = matches!(action, ViewAction::Refresh);

    // Apply the action under the lock; any fetch it triggers runs with
    // the lock released.
    let (scope, refetch) = {
        let mut views = state.views.write().unwrap();
        let session = views
            .get_mut(&view_id)
            .ok_or_else(|| ServiceError::NotFound(format!("view '{}' not found", view_id)))?;
        let view = std::mem::take(&mut session.state);
        session.state = reduce(view, action);
        if persist_favorites {
            state.persist_favorites(&session.scope, &session.state.favorites)?;
        }
        (
            session.scope.clone(),
            was_refresh && session.state.phase == Phase::Loading,
        )
    };

    if refetch {
        let event = fetch_event(&state, &scope).await;
        let mut views = state.views.write().unwrap();
        // The view may have been closed while the fetch ran.
        if let Some(session) = views.get_mut(&view_id) {
            let view = std::mem::take(&mut session.state);
            session.state = reduce(view, event);
        }
    }

    let views = state.views.read().unwrap();
    let session = views
        .get(&view_id)
        .ok_or_else(|| ServiceError::NotFound(format!("view '{}' not found", view_id)))?;
    Ok(Json(snapshot(&view_id, &session.state)))
}

// ---------------------------------------------------------------------------
// POST /v2/{d}/{s}/{w}/views/{view_id}/activate
// ---------------------------------------------------------------------------

/// Route a card activation. Unroutable cards come back as an
/// informational outcome, not an error.
async fn activate_card(
    State(state): State<AppState>,
    Path((_, _, _, view_id)): Path<(String, String, String, String)>,
    Json(req): Json<ActivateRequest>,
) -> Result<Json<RouteOutcome>, ServiceError> {
    let mut views = state.views.write().unwrap();
    let session = views
        .get_mut(&view_id)
        .ok_or_else(|| ServiceError::NotFound(format!("view '{}' not found", view_id)))?;

    let card = session
        .state
        .cards
        .iter()
        .find(|c| c.view_slug == req.view_slug)
        .ok_or_else(|| ServiceError::NotFound(format!("card '{}' not found", req.view_slug)))?;

    let outcome = route_card(&session.scope, card);
    let view = std::mem::take(&mut session.state);
    session.state = reduce(
        view,
        ViewAction::CardActivated {
            view_slug: req.view_slug,
        },
    );
    Ok(Json(outcome))
}
