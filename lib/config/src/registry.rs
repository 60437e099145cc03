//! The configuration registry — an immutable, queryable catalog.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog;
use crate::error::ConfigError;
use crate::model::{
    Action, AnalyticsType, Domain, EntityType, RelationshipType, Section, TransactionType,
    WorkflowType, Workspace, is_terminal_status,
};

/// The canonical catalog of domains, sections, workspaces and type
/// definitions. Built once at startup, read-only afterwards — there is
/// deliberately no mutation API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    pub domains: Vec<Domain>,
    pub sections: Vec<Section>,
    pub workspaces: Vec<Workspace>,
    pub entity_types: Vec<EntityType>,
    pub transaction_types: Vec<TransactionType>,
    pub workflow_types: Vec<WorkflowType>,
    pub relationship_types: Vec<RelationshipType>,
    pub analytics_types: Vec<AnalyticsType>,
}

impl Registry {
    /// Assemble the built-in catalog.
    ///
    /// Call [`Registry::validate`] before serving from it.
    pub fn builtin() -> Self {
        Self {
            domains: catalog::domains(),
            sections: catalog::sections(),
            workspaces: catalog::workspaces(),
            entity_types: catalog::entity_types(),
            transaction_types: catalog::transaction_types(),
            workflow_types: catalog::workflow_types(),
            relationship_types: catalog::relationship_types(),
            analytics_types: catalog::analytics_types(),
        }
    }

    // ── Lookups ─────────────────────────────────────────────────────

    pub fn domain(&self, id: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.id == id)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn workspace(&self, id: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.id == id)
    }

    pub fn entity_type(&self, id: &str) -> Option<&EntityType> {
        self.entity_types.iter().find(|e| e.id == id)
    }

    pub fn transaction_type(&self, id: &str) -> Option<&TransactionType> {
        self.transaction_types.iter().find(|t| t.id == id)
    }

    pub fn workflow_type(&self, id: &str) -> Option<&WorkflowType> {
        self.workflow_types.iter().find(|w| w.id == id)
    }

    // ── Validation ──────────────────────────────────────────────────

    /// Check the catalog's referential integrity and structural
    /// invariants. Returns the first violation found.
    ///
    /// 1. Every `sections`/`workspaces`/`domains`/source/target
    ///    cross-reference names an existing id.
    /// 2. No duplicate ids within a collection.
    /// 3. Entity types with a `create` action have at least one
    ///    required field.
    /// 4. Every transaction type has at least one terminal status.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let domain_ids: HashSet<&str> = self.domains.iter().map(|d| d.id).collect();
        let section_ids: HashSet<&str> = self.sections.iter().map(|s| s.id).collect();
        let workspace_ids: HashSet<&str> = self.workspaces.iter().map(|w| w.id).collect();
        let entity_ids: HashSet<&str> = self.entity_types.iter().map(|e| e.id).collect();

        check_unique("domain", self.domains.iter().map(|d| d.id))?;
        check_unique("section", self.sections.iter().map(|s| s.id))?;
        check_unique("workspace", self.workspaces.iter().map(|w| w.id))?;
        check_unique("entity type", self.entity_types.iter().map(|e| e.id))?;
        check_unique("transaction type", self.transaction_types.iter().map(|t| t.id))?;
        check_unique("workflow type", self.workflow_types.iter().map(|w| w.id))?;
        check_unique("relationship type", self.relationship_types.iter().map(|r| r.id))?;
        check_unique("analytics type", self.analytics_types.iter().map(|a| a.id))?;

        for d in &self.domains {
            check_refs("domain", d.id, "sections", "section", d.sections, &section_ids)?;
        }
        for s in &self.sections {
            check_refs("section", s.id, "workspaces", "workspace", s.workspaces, &workspace_ids)?;
            check_refs("section", s.id, "domains", "domain", s.domains, &domain_ids)?;
        }
        for w in &self.workspaces {
            check_refs("workspace", w.id, "sections", "section", w.sections, &section_ids)?;
            check_refs("workspace", w.id, "domains", "domain", w.domains, &domain_ids)?;
        }
        for e in &self.entity_types {
            check_refs("entity type", e.id, "workspaces", "workspace", e.workspaces, &workspace_ids)?;
            if e.actions.contains(&Action::Create) && !e.fields.iter().any(|f| f.required) {
                return Err(ConfigError::NoRequiredFields { id: e.id.to_string() });
            }
        }
        for t in &self.transaction_types {
            check_refs("transaction type", t.id, "workspaces", "workspace", t.workspaces, &workspace_ids)?;
            if !t.statuses.iter().any(|s| is_terminal_status(s)) {
                return Err(ConfigError::NoTerminalStatus { id: t.id.to_string() });
            }
        }
        for w in &self.workflow_types {
            check_refs("workflow type", w.id, "workspaces", "workspace", w.workspaces, &workspace_ids)?;
        }
        for r in &self.relationship_types {
            check_refs("relationship type", r.id, "workspaces", "workspace", r.workspaces, &workspace_ids)?;
            check_refs("relationship type", r.id, "sourceTypes", "entity type", r.source_types, &entity_ids)?;
            check_refs("relationship type", r.id, "targetTypes", "entity type", r.target_types, &entity_ids)?;
        }
        for a in &self.analytics_types {
            check_refs("analytics type", a.id, "workspaces", "workspace", a.workspaces, &workspace_ids)?;
        }

        Ok(())
    }
}

fn check_unique<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_refs(
    entity: &'static str,
    id: &str,
    field: &'static str,
    target: &'static str,
    refs: &[&str],
    known: &HashSet<&str>,
) -> Result<(), ConfigError> {
    for r in refs {
        if !known.contains(r) {
            return Err(ConfigError::DanglingReference {
                entity,
                id: id.to_string(),
                field,
                target,
                reference: r.to_string(),
            });
        }
    }
    Ok(())
}
