//! Card data providers.
//!
//! The module never fetches card payloads itself — it goes through the
//! `CardProvider` seam, injected at startup like the storage traits in
//! the server binary.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use hera_core::ServiceError;

use crate::model::{WorkspaceCard, WorkspaceScope};

/// Source of per-scope card lists.
pub trait CardProvider: Send + Sync + 'static {
    /// Fetch the cards for one scope.
    ///
    /// A scope with no configured cards is `NotFound`; the caller
    /// surfaces that as a "not configured" view, not a crash.
    fn fetch(&self, scope: &WorkspaceScope) -> Result<Vec<WorkspaceCard>, ServiceError>;
}

// ---------------------------------------------------------------------------
// FileCardProvider
// ---------------------------------------------------------------------------

/// Reads card payloads from `{root}/{domain}/{section}/{workspace}.json`.
pub struct FileCardProvider {
    root: PathBuf,
}

impl FileCardProvider {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| ServiceError::Internal(format!("cannot create cards dir: {}", e)))?;
        Ok(Self { root })
    }

    fn path_for(&self, scope: &WorkspaceScope) -> PathBuf {
        self.root
            .join(&scope.domain)
            .join(&scope.section)
            .join(format!("{}.json", scope.workspace))
    }
}

impl CardProvider for FileCardProvider {
    fn fetch(&self, scope: &WorkspaceScope) -> Result<Vec<WorkspaceCard>, ServiceError> {
        let path = self.path_for(scope);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ServiceError::NotFound(format!(
                    "no cards configured for '{}'",
                    scope
                )));
            }
            Err(e) => {
                return Err(ServiceError::Internal(format!(
                    "cannot read cards for '{}': {}",
                    scope, e
                )));
            }
        };
        serde_json::from_str(&raw).map_err(|e| {
            ServiceError::Internal(format!("malformed card file for '{}': {}", scope, e))
        })
    }
}

// ---------------------------------------------------------------------------
// StaticCardProvider
// ---------------------------------------------------------------------------

/// In-memory provider for tests and demos.
#[derive(Default)]
pub struct StaticCardProvider {
    cards: HashMap<String, Vec<WorkspaceCard>>,
}

impl StaticCardProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, scope: &WorkspaceScope, cards: Vec<WorkspaceCard>) {
        self.cards.insert(scope.key(), cards);
    }
}

impl CardProvider for StaticCardProvider {
    fn fetch(&self, scope: &WorkspaceScope) -> Result<Vec<WorkspaceCard>, ServiceError> {
        self.cards
            .get(&scope.key())
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("no cards configured for '{}'", scope)))
    }
}

// ---------------------------------------------------------------------------
// CachingProvider
// ---------------------------------------------------------------------------

/// Caches per-scope card lists and remembers which scopes have been
/// fetched, so the background refresher can re-pull them.
pub struct CachingProvider {
    inner: Box<dyn CardProvider>,
    cache: RwLock<HashMap<WorkspaceScope, Vec<WorkspaceCard>>>,
}

impl CachingProvider {
    pub fn new(inner: Box<dyn CardProvider>) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Scopes fetched at least once.
    pub fn known_scopes(&self) -> Vec<WorkspaceScope> {
        self.cache.read().unwrap().keys().cloned().collect()
    }

    /// Re-fetch every known scope. Returns the number of scopes
    /// refreshed. A scope that fails keeps its previous cards.
    pub fn refresh_all(&self) -> usize {
        let scopes = self.known_scopes();
        let mut refreshed = 0;
        for scope in scopes {
            match self.inner.fetch(&scope) {
                Ok(cards) => {
                    self.cache.write().unwrap().insert(scope, cards);
                    refreshed += 1;
                }
                Err(e) => debug!(scope = %scope, error = %e, "refresh skipped scope"),
            }
        }
        refreshed
    }
}

impl CardProvider for CachingProvider {
    fn fetch(&self, scope: &WorkspaceScope) -> Result<Vec<WorkspaceCard>, ServiceError> {
        if let Some(cards) = self.cache.read().unwrap().get(scope) {
            return Ok(cards.clone());
        }
        let cards = self.inner.fetch(scope)?;
        self.cache
            .write()
            .unwrap()
            .insert(scope.clone(), cards.clone());
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TargetType;

    fn scope() -> WorkspaceScope {
        WorkspaceScope::new("retail", "pos", "main")
    }

    fn sample_card() -> WorkspaceCard {
        WorkspaceCard {
            label: "Customers".into(),
            subtitle: None,
            icon: None,
            view_slug: "customers".into(),
            target_type: TargetType::Entity,
            entity_type: Some("customers".into()),
            nav_code: None,
            metrics: None,
            status: None,
            priority: None,
        }
    }

    #[test]
    fn static_provider_round_trip() {
        let mut provider = StaticCardProvider::new();
        provider.insert(&scope(), vec![sample_card()]);
        let cards = provider.fetch(&scope()).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].view_slug, "customers");
    }

    #[test]
    fn static_provider_unknown_scope_is_not_found() {
        let provider = StaticCardProvider::new();
        let err = provider.fetch(&scope()).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn file_provider_reads_scope_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileCardProvider::open(dir.path()).unwrap();

        let scope_dir = dir.path().join("retail").join("pos");
        std::fs::create_dir_all(&scope_dir).unwrap();
        std::fs::write(
            scope_dir.join("main.json"),
            serde_json::to_string(&vec![sample_card()]).unwrap(),
        )
        .unwrap();

        let cards = provider.fetch(&scope()).unwrap();
        assert_eq!(cards[0].label, "Customers");
    }

    #[test]
    fn file_provider_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileCardProvider::open(dir.path()).unwrap();
        let err = provider.fetch(&scope()).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn file_provider_malformed_json_is_internal() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileCardProvider::open(dir.path()).unwrap();

        let scope_dir = dir.path().join("retail").join("pos");
        std::fs::create_dir_all(&scope_dir).unwrap();
        std::fs::write(scope_dir.join("main.json"), "{not json").unwrap();

        let err = provider.fetch(&scope()).unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL");
    }

    #[test]
    fn caching_provider_remembers_scopes() {
        let mut inner = StaticCardProvider::new();
        inner.insert(&scope(), vec![sample_card()]);
        let caching = CachingProvider::new(Box::new(inner));

        assert!(caching.known_scopes().is_empty());
        caching.fetch(&scope()).unwrap();
        assert_eq!(caching.known_scopes(), vec![scope()]);
        assert_eq!(caching.refresh_all(), 1);
    }
}
