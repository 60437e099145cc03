pub mod api;
pub mod model;
pub mod prefs;
pub mod provider;
pub mod refresh;
pub mod routing;
pub mod state;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use axum::Router;

use hera_config::Registry;
use hera_core::{Authenticator, Module, ServiceError};

use model::WorkspaceScope;
use prefs::PrefsStore;
use provider::{CachingProvider, CardProvider};
use refresh::RefreshConfig;
use state::ViewState;

/// The Workspace module — serves workspace layouts, per-view state and
/// the configuration API.
///
/// Owns the card cache, the preference store and the view sessions;
/// the background refresher is stopped when the module is dropped.
pub struct WorkspaceModule {
    state: Arc<ModuleState>,
    _refresh_cancel: tokio_util::sync::CancellationToken,
}

/// Shared state behind every handler.
pub(crate) struct ModuleState {
    pub registry: Arc<Registry>,
    pub provider: Arc<CachingProvider>,
    pub prefs: PrefsStore,
    pub authenticator: Arc<dyn Authenticator>,
    pub views: RwLock<HashMap<String, ViewSession>>,
}

/// One mounted workspace view. Created on open, discarded on close —
/// its cards and view state never outlive it.
pub(crate) struct ViewSession {
    pub scope: WorkspaceScope,
    pub state: ViewState,
}

impl WorkspaceModule {
    /// Create the module with the default refresh interval.
    pub fn new(
        registry: Arc<Registry>,
        provider: Box<dyn CardProvider>,
        prefs_dir: PathBuf,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self, ServiceError> {
        Self::with_config(registry, provider, prefs_dir, authenticator, RefreshConfig::default())
    }

    /// Create with explicit refresher configuration.
    pub fn with_config(
        registry: Arc<Registry>,
        provider: Box<dyn CardProvider>,
        prefs_dir: PathBuf,
        authenticator: Arc<dyn Authenticator>,
        refresh_config: RefreshConfig,
    ) -> Result<Self, ServiceError> {
        let provider = Arc::new(CachingProvider::new(provider));
        let cancel = refresh::start(Arc::clone(&provider), refresh_config);

        Ok(Self {
            state: Arc::new(ModuleState {
                registry,
                provider,
                prefs: PrefsStore::open(prefs_dir)?,
                authenticator,
                views: RwLock::new(HashMap::new()),
            }),
            _refresh_cancel: cancel,
        })
    }
}

impl Module for WorkspaceModule {
    fn name(&self) -> &str {
        "api"
    }

    fn routes(&self) -> Router {
        api::router(Arc::clone(&self.state))
    }
}

impl ModuleState {
    /// Fetch a scope's cards off the async workers. Provider fetches
    /// hit the filesystem, same as the background refresher's pulls.
    pub(crate) async fn fetch_cards(
        &self,
        scope: &WorkspaceScope,
    ) -> Result<Vec<model::WorkspaceCard>, ServiceError> {
        let provider = Arc::clone(&self.provider);
        let scope = scope.clone();
        tokio::task::spawn_blocking(move || provider.fetch(&scope))
            .await
            .map_err(|e| ServiceError::Internal(format!("card fetch interrupted: {}", e)))?
    }

    /// Prefs key for a scope's favorites. Scope ids are catalog ids
    /// (alphanumerics and dashes), so the key is always valid.
    pub(crate) fn favorites_key(scope: &WorkspaceScope) -> String {
        format!(
            "favorites_{}_{}_{}",
            scope.domain, scope.section, scope.workspace
        )
    }

    pub(crate) fn load_favorites(&self, scope: &WorkspaceScope) -> std::collections::BTreeSet<String> {
        self.prefs
            .load(&Self::favorites_key(scope))
            .ok()
            .flatten()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }

    pub(crate) fn persist_favorites(
        &self,
        scope: &WorkspaceScope,
        favorites: &std::collections::BTreeSet<String>,
    ) -> Result<(), ServiceError> {
        let doc = serde_json::to_value(favorites)
            .map_err(|e| ServiceError::Internal(format!("cannot encode favorites: {}", e)))?;
        self.prefs.save(&Self::favorites_key(scope), &doc)
    }
}
