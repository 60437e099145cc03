use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// WorkspaceScope
// ---------------------------------------------------------------------------

/// The route triple a view is mounted under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceScope {
    pub domain: String,
    pub section: String,
    pub workspace: String,
}

impl WorkspaceScope {
    pub fn new(
        domain: impl Into<String>,
        section: impl Into<String>,
        workspace: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            section: section.into(),
            workspace: workspace.into(),
        }
    }

    /// Stable key for caches and card files: `domain/section/workspace`.
    pub fn key(&self) -> String {
        format!("{}/{}/{}", self.domain, self.section, self.workspace)
    }
}

impl std::fmt::Display for WorkspaceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.domain, self.section, self.workspace)
    }
}

// ---------------------------------------------------------------------------
// TargetType
// ---------------------------------------------------------------------------

/// What a card navigates to.
///
/// String-backed on the wire (cards arrive as JSON with free-form
/// `target_type` values), a closed sum type in code so routing is
/// matched exhaustively. Unrecognized values land in `Other` and stay
/// routable through the heuristic fallback instead of crashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetType {
    Entity,
    Transaction,
    Workflow,
    Relationship,
    Analytics,
    Report,
    Other(String),
}

impl TargetType {
    /// URL path bucket for this target, if it has one.
    pub fn bucket(&self) -> Option<&'static str> {
        match self {
            Self::Entity => Some("entities"),
            Self::Transaction => Some("transactions"),
            Self::Workflow => Some("workflows"),
            Self::Relationship => Some("relationships"),
            Self::Analytics => Some("analytics"),
            Self::Report => Some("reports"),
            Self::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Entity => "entity",
            Self::Transaction => "transaction",
            Self::Workflow => "workflow",
            Self::Relationship => "relationship",
            Self::Analytics => "analytics",
            Self::Report => "report",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for TargetType {
    fn from(s: String) -> Self {
        // Singular and plural spellings both occur in card payloads.
        match s.as_str() {
            "entity" | "entities" => Self::Entity,
            "transaction" | "transactions" => Self::Transaction,
            "workflow" | "workflows" => Self::Workflow,
            "relationship" | "relationships" => Self::Relationship,
            "analytics" => Self::Analytics,
            "report" | "reports" => Self::Report,
            _ => Self::Other(s),
        }
    }
}

impl From<TargetType> for String {
    fn from(t: TargetType) -> String {
        t.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// WorkspaceCard — the only runtime (non-catalog) entity
// ---------------------------------------------------------------------------

/// One navigable feature tile within a workspace.
///
/// Fetched per scope, owned by a view session, discarded when the
/// session is dropped. Favorite/recency flags live in the view state,
/// not on the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceCard {
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Unique slug within the scope; the card's identity for
    /// favorites, recents and activation.
    pub view_slug: String,

    pub target_type: TargetType,

    /// Entity/transaction/... type id this card opens, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    /// Nav group this card belongs to; cards without one land in the
    /// workspace's default nav section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

// ---------------------------------------------------------------------------
// Layout payloads — GET /v2/{domain}/{section}/{workspace}
// ---------------------------------------------------------------------------

/// Wire shape of the workspace layout endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutResponse {
    pub workspace: serde_json::Value,
    pub layout_config: LayoutConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutConfig {
    pub default_nav_code: String,
    pub nav_items: Vec<NavItem>,
    pub sections: Vec<LayoutSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub code: String,
    pub title: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutSection {
    pub nav_code: String,
    pub title: String,
    pub cards: Vec<WorkspaceCard>,
}

/// Alternate payload for `?format=tiles`.
#[derive(Debug, Clone, Serialize)]
pub struct TilesResponse {
    pub workspace: String,
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tile {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub slug: String,
    pub target: String,
}

impl Tile {
    pub fn from_card(card: &WorkspaceCard) -> Self {
        Self {
            title: card.label.clone(),
            caption: card.subtitle.clone(),
            icon: card.icon.clone(),
            slug: card.view_slug.clone(),
            target: card.target_type.as_str().to_string(),
        }
    }
}
