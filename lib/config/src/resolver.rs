//! Pure resolution of `(domain, section, workspace)` route segments
//! into a concrete screen configuration.

use serde::Serialize;

use crate::model::{
    AnalyticsType, Domain, EntityType, RelationshipType, Section, TransactionType, WorkflowType,
    Workspace,
};
use crate::registry::Registry;

/// The configuration slice relevant to one route triple.
///
/// Missing or unknown segments come back as `None` — an unknown id is a
/// display concern ("not configured"), never an error. The five type
/// collections are filtered by workspace membership only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved<'a> {
    pub domain: Option<&'a Domain>,
    pub section: Option<&'a Section>,
    pub workspace: Option<&'a Workspace>,
    pub entity_types: Vec<&'a EntityType>,
    pub transaction_types: Vec<&'a TransactionType>,
    pub workflow_types: Vec<&'a WorkflowType>,
    pub relationship_types: Vec<&'a RelationshipType>,
    pub analytics_types: Vec<&'a AnalyticsType>,
}

impl Registry {
    /// Resolve a route triple against the catalog.
    ///
    /// Each argument is a wildcard when `None`. Type collections are
    /// scoped by `workspace` alone — domain and section identify the
    /// screen but do not narrow the type lists. That is intended
    /// semantics: types belong to workspaces, not domains.
    ///
    /// Pure: no side effects, and identical arguments always produce
    /// deep-equal results since the catalog is immutable.
    pub fn resolve(
        &self,
        domain: Option<&str>,
        section: Option<&str>,
        workspace: Option<&str>,
    ) -> Resolved<'_> {
        Resolved {
            domain: domain.and_then(|id| self.domain(id)),
            section: section.and_then(|id| self.section(id)),
            workspace: workspace.and_then(|id| self.workspace(id)),
            entity_types: filter_by_workspace(&self.entity_types, workspace, |e| e.workspaces),
            transaction_types: filter_by_workspace(&self.transaction_types, workspace, |t| {
                t.workspaces
            }),
            workflow_types: filter_by_workspace(&self.workflow_types, workspace, |w| w.workspaces),
            relationship_types: filter_by_workspace(&self.relationship_types, workspace, |r| {
                r.workspaces
            }),
            analytics_types: filter_by_workspace(&self.analytics_types, workspace, |a| {
                a.workspaces
            }),
        }
    }
}

fn filter_by_workspace<'a, T>(
    items: &'a [T],
    workspace: Option<&str>,
    workspaces_of: impl Fn(&T) -> &'static [&'static str],
) -> Vec<&'a T> {
    match workspace {
        Some(ws) => items
            .iter()
            .filter(|item| workspaces_of(item).contains(&ws))
            .collect(),
        None => items.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every triple drawn from the catalog's own ids resolves to
    // non-null domain/section/workspace objects.
    #[test]
    fn registry_triples_resolve_fully() {
        let reg = Registry::builtin();
        for d in &reg.domains {
            for s in d.sections {
                let section = reg.section(s).unwrap();
                for w in section.workspaces {
                    let resolved = reg.resolve(Some(d.id), Some(s), Some(w));
                    assert!(resolved.domain.is_some(), "{}/{}/{}", d.id, s, w);
                    assert!(resolved.section.is_some(), "{}/{}/{}", d.id, s, w);
                    assert!(resolved.workspace.is_some(), "{}/{}/{}", d.id, s, w);
                }
            }
        }
    }

    #[test]
    fn unknown_segments_degrade_to_none() {
        let reg = Registry::builtin();
        let resolved = reg.resolve(Some("no-such-domain"), Some("pos"), None);
        assert!(resolved.domain.is_none());
        assert_eq!(resolved.section.unwrap().id, "pos");
        assert!(resolved.workspace.is_none());
    }

    #[test]
    fn absent_segments_act_as_wildcards() {
        let reg = Registry::builtin();
        let resolved = reg.resolve(None, None, None);
        assert!(resolved.domain.is_none());
        // No workspace filter: every type comes back.
        assert_eq!(resolved.entity_types.len(), reg.entity_types.len());
        assert_eq!(resolved.transaction_types.len(), reg.transaction_types.len());
        assert_eq!(resolved.analytics_types.len(), reg.analytics_types.len());
    }

    // Filter correctness both ways: everything returned contains the
    // workspace, and everything containing the workspace is returned.
    #[test]
    fn workspace_filter_is_exact() {
        let reg = Registry::builtin();
        for ws in &reg.workspaces {
            let resolved = reg.resolve(None, None, Some(ws.id));
            for e in &resolved.entity_types {
                assert!(e.workspaces.contains(&ws.id), "{} leaked into {}", e.id, ws.id);
            }
            for e in &reg.entity_types {
                if e.workspaces.contains(&ws.id) {
                    assert!(
                        resolved.entity_types.iter().any(|r| r.id == e.id),
                        "{} dropped from {}",
                        e.id,
                        ws.id
                    );
                }
            }
            for t in &resolved.transaction_types {
                assert!(t.workspaces.contains(&ws.id));
            }
            for w in &resolved.workflow_types {
                assert!(w.workspaces.contains(&ws.id));
            }
            for r in &resolved.relationship_types {
                assert!(r.workspaces.contains(&ws.id));
            }
            for a in &resolved.analytics_types {
                assert!(a.workspaces.contains(&ws.id));
            }
        }
    }

    // Domain and section do not narrow the type collections; only the
    // workspace does.
    #[test]
    fn domain_and_section_do_not_filter_types() {
        let reg = Registry::builtin();
        let with_domain = reg.resolve(Some("retail"), Some("pos"), Some("main"));
        let without = reg.resolve(None, None, Some("main"));
        let ids =
            |v: &Vec<&EntityType>| v.iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids(&with_domain.entity_types), ids(&without.entity_types));
    }

    // Idempotence: identical arguments, deep-equal results.
    #[test]
    fn resolve_is_idempotent() {
        let reg = Registry::builtin();
        let a = serde_json::to_value(reg.resolve(Some("retail"), Some("pos"), Some("main"))).unwrap();
        let b = serde_json::to_value(reg.resolve(Some("retail"), Some("pos"), Some("main"))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn main_workspace_includes_customers() {
        let reg = Registry::builtin();
        let resolved = reg.resolve(Some("retail"), Some("pos"), Some("main"));
        assert!(resolved.entity_types.iter().any(|e| e.id == "customers"));
    }
}
