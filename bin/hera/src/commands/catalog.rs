//! Local catalog commands — no server required.

use anyhow::Result;

use hera_config::{Registry, breadcrumbs, generate_smart_code};

/// List domains and their sections.
pub fn domains(json: bool) -> Result<()> {
    let registry = Registry::builtin();
    if json {
        println!("{}", serde_json::to_string_pretty(&registry.domains)?);
        return Ok(());
    }

    println!("{:<16} {:<24} SECTIONS", "ID", "NAME");
    for domain in &registry.domains {
        println!(
            "{:<16} {:<24} {}",
            domain.id,
            domain.name,
            domain.sections.join(", ")
        );
    }
    Ok(())
}

/// Resolve a route triple against the catalog.
pub fn resolve(
    domain: Option<&str>,
    section: Option<&str>,
    workspace: Option<&str>,
    json: bool,
) -> Result<()> {
    let registry = Registry::builtin();
    let resolved = registry.resolve(domain, section, workspace);
    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    let name_of = |label: &str, name: Option<&str>| match name {
        Some(n) => println!("{:<12} {}", label, n),
        None => println!("{:<12} (not configured)", label),
    };
    name_of("domain", resolved.domain.map(|d| d.name));
    name_of("section", resolved.section.map(|s| s.name));
    name_of("workspace", resolved.workspace.map(|w| w.name));

    println!("\nENTITY TYPES");
    for e in &resolved.entity_types {
        println!("  {:<16} {}", e.id, e.name);
    }
    println!("TRANSACTION TYPES");
    for t in &resolved.transaction_types {
        println!("  {:<16} {}", t.id, t.name);
    }
    println!("ANALYTICS TYPES");
    for a in &resolved.analytics_types {
        println!("  {:<16} {}", a.id, a.name);
    }
    Ok(())
}

/// Generate a smart code.
pub fn code(
    domain: &str,
    section: Option<&str>,
    workspace: Option<&str>,
    kind: Option<&str>,
    subtype: Option<&str>,
) -> Result<()> {
    println!("{}", generate_smart_code(domain, section, workspace, kind, subtype));
    Ok(())
}

/// Print the breadcrumb trail for route segments.
pub fn crumbs(
    domain: Option<&str>,
    section: Option<&str>,
    workspace: Option<&str>,
    entity_type: Option<&str>,
    id: Option<&str>,
    json: bool,
) -> Result<()> {
    let registry = Registry::builtin();
    let trail = breadcrumbs(&registry, domain, section, workspace, entity_type, id);
    if json {
        println!("{}", serde_json::to_string_pretty(&trail)?);
        return Ok(());
    }

    for crumb in &trail {
        println!("{:<24} {}", crumb.label, crumb.href);
    }
    Ok(())
}

/// Validate the built-in catalog, exiting non-zero on the first defect.
pub fn validate() -> Result<()> {
    let registry = Registry::builtin();
    registry
        .validate()
        .map_err(|e| anyhow::anyhow!("catalog validation failed: {}", e))?;
    println!(
        "catalog ok: {} domains, {} sections, {} workspaces, {} entity types, {} transaction types",
        registry.domains.len(),
        registry.sections.len(),
        registry.workspaces.len(),
        registry.entity_types.len(),
        registry.transaction_types.len(),
    );
    Ok(())
}
