//! View state for a mounted workspace.
//!
//! State transitions are pure: `reduce(state, action)` consumes the
//! old state and returns the new one, so every transition is unit
//! testable without any UI or IO attached.
//!
//! ```text
//! Loading ── CardsLoaded ──▶ Ready ◀──┐ query/sort/group/favorite
//!    │                        │  └────┘
//!    └── LoadFailed ──▶ Error ┘ (Refresh from Ready or Error)
//! ```
//!
//! Mutating actions are ignored while a fetch is pending: a view has a
//! single in-flight fetch, and nothing else may touch it until that
//! fetch settles.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::WorkspaceCard;

/// Maximum number of recently-activated slugs remembered per view.
const MAX_RECENTS: usize = 10;

// ---------------------------------------------------------------------------
// Phase / sort / group
// ---------------------------------------------------------------------------

/// Fetch lifecycle of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum Phase {
    Loading,
    Ready,
    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Label,
    Priority,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    None,
    Status,
    Target,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// The complete client-visible state of one mounted workspace view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    #[serde(flatten)]
    pub phase: Phase,
    pub cards: Vec<WorkspaceCard>,
    pub query: String,
    pub sort: SortKey,
    pub group: GroupBy,
    /// Favorited view slugs.
    pub favorites: BTreeSet<String>,
    /// Recently activated view slugs, most recent first.
    pub recents: Vec<String>,
}

impl ViewState {
    /// A fresh view: fetch pending, nothing loaded.
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            cards: Vec::new(),
            query: String::new(),
            sort: SortKey::Label,
            group: GroupBy::None,
            favorites: BTreeSet::new(),
            recents: Vec::new(),
        }
    }

    /// A fresh view seeded with persisted favorites.
    pub fn with_favorites(favorites: BTreeSet<String>) -> Self {
        Self {
            favorites,
            ..Self::new()
        }
    }

    /// Cards matching the current query, favorites first, then sorted
    /// by the current sort key.
    ///
    /// `sort_by` is a stable sort, so equal keys keep their fetch
    /// order and output is deterministic.
    pub fn visible(&self) -> Vec<&WorkspaceCard> {
        let needle = self.query.to_lowercase();
        let mut cards: Vec<&WorkspaceCard> = self
            .cards
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.label.to_lowercase().contains(&needle)
                    || c.subtitle
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&needle))
            })
            .collect();

        match self.sort {
            SortKey::Label => cards.sort_by(|a, b| a.label.cmp(&b.label)),
            // Higher priority first; missing priority sinks to the bottom.
            SortKey::Priority => {
                cards.sort_by(|a, b| b.priority.unwrap_or(i64::MIN).cmp(&a.priority.unwrap_or(i64::MIN)))
            }
            SortKey::Status => cards.sort_by(|a, b| a.status.cmp(&b.status)),
        }
        // Favorites bubble to the front; stable, so in-bucket order holds.
        cards.sort_by_key(|c| !self.favorites.contains(&c.view_slug));
        cards
    }

    /// Visible cards bucketed by the current grouping.
    pub fn grouped(&self) -> Vec<(String, Vec<&WorkspaceCard>)> {
        let visible = self.visible();
        match self.group {
            GroupBy::None => vec![("all".to_string(), visible)],
            GroupBy::Status => bucket_by(visible, |c| {
                c.status.clone().unwrap_or_else(|| "none".to_string())
            }),
            GroupBy::Target => bucket_by(visible, |c| c.target_type.as_str().to_string()),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

fn bucket_by<'a>(
    cards: Vec<&'a WorkspaceCard>,
    key: impl Fn(&WorkspaceCard) -> String,
) -> Vec<(String, Vec<&'a WorkspaceCard>)> {
    let mut groups: Vec<(String, Vec<&WorkspaceCard>)> = Vec::new();
    for card in cards {
        let k = key(card);
        match groups.iter_mut().find(|(g, _)| *g == k) {
            Some((_, bucket)) => bucket.push(card),
            None => groups.push((k, vec![card])),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Actions + reducer
// ---------------------------------------------------------------------------

/// Everything that can happen to a view.
///
/// `CardsLoaded` / `LoadFailed` are fetch-lifecycle events raised by
/// the module itself; the rest arrive from clients.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewAction {
    CardsLoaded { cards: Vec<WorkspaceCard> },
    LoadFailed { message: String },
    Refresh,
    SetQuery { query: String },
    SetSort { sort: SortKey },
    SetGroup { group: GroupBy },
    ToggleFavorite { view_slug: String },
    CardActivated { view_slug: String },
}

impl ViewAction {
    /// Whether this action may only be raised by the module's own
    /// fetch path, never by a client.
    pub fn is_fetch_event(&self) -> bool {
        matches!(self, Self::CardsLoaded { .. } | Self::LoadFailed { .. })
    }
}

/// Pure state transition.
///
/// Invalid (state, action) pairs return the state unchanged — in
/// particular, every mutating action is a no-op while `Loading`.
pub fn reduce(mut state: ViewState, action: ViewAction) -> ViewState {
    match (&state.phase, action) {
        // Fetch settlement.
        (Phase::Loading, ViewAction::CardsLoaded { cards }) => {
            state.cards = cards;
            state.phase = Phase::Ready;
            state
        }
        (Phase::Loading, ViewAction::LoadFailed { message }) => {
            state.phase = Phase::Error { message };
            state
        }

        // Anything else during a pending fetch is dropped.
        (Phase::Loading, _) => state,

        // Refresh re-enters Loading from Ready or Error. Current cards
        // stay visible until the new fetch settles.
        (_, ViewAction::Refresh) => {
            state.phase = Phase::Loading;
            state
        }

        // View mutations only apply to a Ready view.
        (Phase::Ready, ViewAction::SetQuery { query }) => {
            state.query = query;
            state
        }
        (Phase::Ready, ViewAction::SetSort { sort }) => {
            state.sort = sort;
            state
        }
        (Phase::Ready, ViewAction::SetGroup { group }) => {
            state.group = group;
            state
        }
        (Phase::Ready, ViewAction::ToggleFavorite { view_slug }) => {
            if !state.favorites.remove(&view_slug) {
                state.favorites.insert(view_slug);
            }
            state
        }
        (Phase::Ready, ViewAction::CardActivated { view_slug }) => {
            state.recents.retain(|s| *s != view_slug);
            state.recents.insert(0, view_slug);
            state.recents.truncate(MAX_RECENTS);
            state
        }

        // Fetch events outside Loading, or mutations in Error: no-op.
        (_, _) => state,
    }
}
