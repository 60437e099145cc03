//! Registry entity definitions.
//!
//! All of these are immutable reference data: defined in [`crate::catalog`]
//! at build time, never mutated at runtime. Strings are `&'static str`
//! because the catalog is compiled in, not loaded.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// A CRUD-style action an entity or transaction type supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    List,
    Update,
    Delete,
    Export,
    Archive,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::List => "list",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Export => "export",
            Self::Archive => "archive",
        }
    }
}

/// Field data type for generic form/table rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Currency,
    Date,
    Boolean,
    Select,
    Reference,
    Email,
    Phone,
}

/// Kind of a workflow step. Steps are implicitly sequential; there is
/// no explicit transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Manual,
    Automatic,
    Approval,
}

/// Relationship cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToMany,
}

/// Chart families an analytics type can render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Donut,
    Area,
    Table,
    Kpi,
}

// ---------------------------------------------------------------------------
// Catalog entities
// ---------------------------------------------------------------------------

/// A top-level business area (retail, finance, ...).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Section ids available under this domain.
    pub sections: &'static [&'static str],
}

/// A functional grouping within one or more domains (inventory, pos, ...).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Workspace ids reachable from this section.
    pub workspaces: &'static [&'static str],
    /// Domains this section belongs to (many-to-many).
    pub domains: &'static [&'static str],
}

/// A role-scoped view surface within a section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Persona this workspace is designed for ("Manager", "Front Desk", ...).
    pub persona_label: &'static str,
    /// Roles that may see this workspace.
    pub visible_roles: &'static [&'static str],
    /// Nav code selected when the workspace opens.
    pub default_nav: &'static str,
    pub sections: &'static [&'static str],
    pub domains: &'static [&'static str],
}

/// A typed, optionally-required attribute of an entity or transaction type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Enumerated values for `Select` fields; empty otherwise.
    pub options: &'static [&'static str],
}

/// A data-object schema definition driving generic CRUD screens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub fields: &'static [Field],
    pub actions: &'static [Action],
    /// Workspaces this type appears in. Types are workspace-scoped,
    /// not domain-scoped.
    pub workspaces: &'static [&'static str],
}

/// A document-with-lines business transaction with a finite status
/// lifecycle (sales, purchases, ...).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub fields: &'static [Field],
    pub actions: &'static [Action],
    /// Whether documents of this type carry line items.
    pub has_lines: bool,
    /// Status lifecycle. Must include at least one terminal status.
    pub statuses: &'static [&'static str],
    pub workspaces: &'static [&'static str],
}

/// One step of a workflow. Steps run in list order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: StepKind,
    pub required: bool,
}

/// An ordered, typed step list triggered by named events.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub steps: &'static [WorkflowStep],
    pub triggers: &'static [&'static str],
    pub workspaces: &'static [&'static str],
}

/// A typed link between entity types.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Entity type ids allowed on the source side.
    pub source_types: &'static [&'static str],
    /// Entity type ids allowed on the target side.
    pub target_types: &'static [&'static str],
    pub cardinality: Cardinality,
    pub workspaces: &'static [&'static str],
}

/// A reporting/analytics view definition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub chart_types: &'static [ChartKind],
    pub dimensions: &'static [&'static str],
    pub measures: &'static [&'static str],
    pub workspaces: &'static [&'static str],
}

/// Statuses that end a transaction's lifecycle. Every transaction type
/// must list at least one of these.
pub const TERMINAL_STATUSES: &[&str] = &["completed", "cancelled"];

/// Whether a status string is terminal.
pub fn is_terminal_status(status: &str) -> bool {
    TERMINAL_STATUSES.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Action::Create).unwrap(), "\"create\"");
        assert_eq!(Action::Export.as_str(), "export");
    }

    #[test]
    fn cardinality_serializes_kebab() {
        assert_eq!(
            serde_json::to_string(&Cardinality::ManyToMany).unwrap(),
            "\"many-to-many\""
        );
    }

    #[test]
    fn terminal_status_check() {
        assert!(is_terminal_status("completed"));
        assert!(is_terminal_status("cancelled"));
        assert!(!is_terminal_status("draft"));
        assert!(!is_terminal_status("posted"));
    }

    #[test]
    fn workspace_serializes_camel_case() {
        let ws = Workspace {
            id: "main",
            name: "Main",
            description: "",
            icon: "layout",
            color: "blue",
            persona_label: "Associate",
            visible_roles: &["staff"],
            default_nav: "overview",
            sections: &["pos"],
            domains: &["retail"],
        };
        let json = serde_json::to_value(&ws).unwrap();
        assert_eq!(json["personaLabel"], "Associate");
        assert_eq!(json["defaultNav"], "overview");
    }
}
