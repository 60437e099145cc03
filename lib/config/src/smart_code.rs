//! Smart code generation.
//!
//! A smart code is the dotted namespace tag used across the data model:
//! `HERA.<DOMAIN>.<SECTION>.<TYPE>.<WORKSPACE>.<SUBTYPE>.v1`.

/// Build a smart code from route segments.
///
/// Absent segments are omitted entirely (never emitted as empty
/// placeholders); present segments are upper-cased. The version suffix
/// `v1` is always last.
///
/// Note the argument order takes `workspace` before `kind`, but the
/// emitted code puts `TYPE` before `WORKSPACE`. The emitted order is
/// load-bearing: existing smart-code parsers consume
/// `DOMAIN.SECTION.TYPE.WORKSPACE.SUBTYPE`, so keep it exactly.
pub fn generate_smart_code(
    domain: &str,
    section: Option<&str>,
    workspace: Option<&str>,
    kind: Option<&str>,
    subtype: Option<&str>,
) -> String {
    let mut segments = vec!["HERA".to_string(), domain.to_uppercase()];
    if let Some(s) = section {
        segments.push(s.to_uppercase());
    }
    if let Some(k) = kind {
        segments.push(k.to_uppercase());
    }
    if let Some(w) = workspace {
        segments.push(w.to_uppercase());
    }
    if let Some(st) = subtype {
        segments.push(st.to_uppercase());
    }
    segments.push("v1".to_string());
    segments.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_only() {
        assert_eq!(generate_smart_code("retail", None, None, None, None), "HERA.RETAIL.v1");
    }

    #[test]
    fn full_code_keeps_type_before_workspace() {
        assert_eq!(
            generate_smart_code("retail", Some("pos"), Some("main"), Some("entity"), Some("customer")),
            "HERA.RETAIL.POS.ENTITY.MAIN.CUSTOMER.v1"
        );
    }

    #[test]
    fn gaps_are_omitted_not_blank() {
        assert_eq!(
            generate_smart_code("finance", None, Some("owner"), None, None),
            "HERA.FINANCE.OWNER.v1"
        );
        assert_eq!(
            generate_smart_code("finance", Some("accounting"), None, Some("txn"), None),
            "HERA.FINANCE.ACCOUNTING.TXN.v1"
        );
    }

    #[test]
    fn segments_are_uppercased() {
        assert_eq!(
            generate_smart_code("Salon", Some("Scheduling"), None, None, None),
            "HERA.SALON.SCHEDULING.v1"
        );
    }

    #[test]
    fn version_suffix_is_always_last() {
        for code in [
            generate_smart_code("retail", None, None, None, None),
            generate_smart_code("retail", Some("pos"), Some("main"), Some("entity"), Some("customer")),
        ] {
            assert!(code.ends_with(".v1"));
            assert!(code.starts_with("HERA."));
        }
    }
}
