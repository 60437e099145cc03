//! Breadcrumb trail generation from route segments.

use serde::Serialize;

use crate::registry::Registry;

/// One crumb in a navigation trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Crumb {
    pub label: String,
    pub href: String,
    pub icon: String,
}

/// Build a strictly left-to-right-growing breadcrumb trail.
///
/// Each present segment appends one crumb whose `href` is the
/// cumulative path of all segments so far. The trail truncates at the
/// first absent segment: an `id` supplied without an `entity_type`
/// produces no `id` crumb, so a malformed href can never be emitted.
///
/// Labels come from the catalog when the segment names a known id, and
/// fall back to the raw segment otherwise.
pub fn breadcrumbs(
    registry: &Registry,
    domain: Option<&str>,
    section: Option<&str>,
    workspace: Option<&str>,
    entity_type: Option<&str>,
    id: Option<&str>,
) -> Vec<Crumb> {
    let mut crumbs = Vec::new();
    let mut path = String::new();

    let Some(d) = domain else { return crumbs };
    path.push('/');
    path.push_str(d);
    crumbs.push(Crumb {
        label: registry.domain(d).map(|x| x.name.to_string()).unwrap_or_else(|| d.to_string()),
        href: path.clone(),
        icon: registry.domain(d).map(|x| x.icon).unwrap_or("folder").to_string(),
    });

    let Some(s) = section else { return crumbs };
    path.push('/');
    path.push_str(s);
    crumbs.push(Crumb {
        label: registry.section(s).map(|x| x.name.to_string()).unwrap_or_else(|| s.to_string()),
        href: path.clone(),
        icon: registry.section(s).map(|x| x.icon).unwrap_or("folder").to_string(),
    });

    let Some(w) = workspace else { return crumbs };
    path.push('/');
    path.push_str(w);
    crumbs.push(Crumb {
        label: registry.workspace(w).map(|x| x.name.to_string()).unwrap_or_else(|| w.to_string()),
        href: path.clone(),
        icon: registry.workspace(w).map(|x| x.icon).unwrap_or("layout").to_string(),
    });

    let Some(e) = entity_type else { return crumbs };
    path.push('/');
    path.push_str(e);
    crumbs.push(Crumb {
        label: registry.entity_type(e).map(|x| x.name.to_string()).unwrap_or_else(|| e.to_string()),
        href: path.clone(),
        icon: registry.entity_type(e).map(|x| x.icon).unwrap_or("table").to_string(),
    });

    let Some(i) = id else { return crumbs };
    path.push('/');
    path.push_str(i);
    crumbs.push(Crumb {
        label: i.to_string(),
        href: path,
        icon: "file".to_string(),
    });

    crumbs
}
