mod config_v1;
mod layout;
mod views;

use std::sync::Arc;

use axum::Router;

use crate::ModuleState;

/// Build the complete workspace module router.
///
/// Routes (nested under `/api` by the server):
/// - `GET    /v2/{domain}/{section}/{workspace}`                 — layout (or `?format=tiles`)
/// - `GET    /v2/{domain}/{section}/{workspace}/export`          — permission-checked export
/// - `POST   /v2/{domain}/{section}/{workspace}/views`           — open a view
/// - `GET    /v2/{domain}/{section}/{workspace}/views/{id}`      — view snapshot
/// - `DELETE /v2/{domain}/{section}/{workspace}/views/{id}`      — close view
/// - `POST   /v2/{domain}/{section}/{workspace}/views/{id}/actions`  — apply a view action
/// - `POST   /v2/{domain}/{section}/{workspace}/views/{id}/activate` — route a card
/// - `GET    /v1/config/registry|resolve|smart-code|breadcrumbs` — configuration API
pub fn router(state: Arc<ModuleState>) -> Router {
    Router::new()
        .merge(layout::router(Arc::clone(&state)))
        .merge(views::router(Arc::clone(&state)))
        .merge(config_v1::router(state))
}
