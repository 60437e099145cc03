//! Background card-cache refresher.
//!
//! Re-pulls every known scope on a timer. A tick that fires while the
//! previous refresh is still running is skipped — the in-flight guard
//! prevents re-entrant fetches when the interval is shorter than fetch
//! latency.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::provider::CachingProvider;

/// Configuration for the refresher.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Seconds between refresh ticks. 0 disables the refresher.
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

/// Start the refresh loop.
///
/// Returns a CancellationToken that stops the loop when cancelled.
pub fn start(provider: Arc<CachingProvider>, config: RefreshConfig) -> CancellationToken {
    let cancel = CancellationToken::new();
    if config.interval_secs == 0 {
        info!("card refresher disabled");
        return cancel;
    }

    let interval = Duration::from_secs(config.interval_secs);
    let in_flight = Arc::new(AtomicBool::new(false));

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            info!("card refresher started (interval={interval:?})");
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        info!("card refresher stopped");
                        break;
                    }
                    _ = tokio::time::sleep(interval) => {
                        if in_flight.swap(true, Ordering::AcqRel) {
                            warn!("refresh still in flight, skipping tick");
                            continue;
                        }
                        let provider = Arc::clone(&provider);
                        let in_flight = Arc::clone(&in_flight);
                        // Fetches hit the filesystem; keep them off the
                        // async workers.
                        tokio::task::spawn_blocking(move || {
                            let n = provider.refresh_all();
                            if n > 0 {
                                debug!("refreshed {n} scopes");
                            }
                            in_flight.store(false, Ordering::Release);
                        });
                    }
                }
            }
        });
    }

    cancel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TargetType, WorkspaceCard, WorkspaceScope};
    use crate::provider::{CardProvider, StaticCardProvider};

    fn provider_with_scope() -> Arc<CachingProvider> {
        let scope = WorkspaceScope::new("retail", "pos", "main");
        let mut inner = StaticCardProvider::new();
        inner.insert(
            &scope,
            vec![WorkspaceCard {
                label: "Customers".into(),
                subtitle: None,
                icon: None,
                view_slug: "customers".into(),
                target_type: TargetType::Entity,
                entity_type: None,
                nav_code: None,
                metrics: None,
                status: None,
                priority: None,
            }],
        );
        let caching = Arc::new(CachingProvider::new(Box::new(inner)));
        caching.fetch(&scope).unwrap();
        caching
    }

    #[tokio::test]
    async fn refresher_ticks_and_stops() {
        let provider = provider_with_scope();
        let cancel = start(
            Arc::clone(&provider),
            RefreshConfig { interval_secs: 1 },
        );

        tokio::time::pause();
        tokio::time::advance(Duration::from_secs(2)).await;
        // Let the spawned tasks run.
        tokio::task::yield_now().await;

        cancel.cancel();
        assert_eq!(provider.known_scopes().len(), 1);
    }

    #[tokio::test]
    async fn zero_interval_disables_refresher() {
        let provider = provider_with_scope();
        let cancel = start(provider, RefreshConfig { interval_secs: 0 });
        assert!(!cancel.is_cancelled());
    }
}
