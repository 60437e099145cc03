//! Card activation routing.

use serde::Serialize;

use crate::model::{TargetType, WorkspaceCard, WorkspaceScope};

/// What happens when a card is activated.
///
/// Cards that cannot be routed produce an informational outcome, never
/// an error — the caller renders a dialog instead of navigating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteOutcome {
    Navigate { path: String },
    Inform { message: String },
}

/// Route a card activation to a target path
/// `/{domain}/{section}/{workspace}/{bucket}/{slug}`.
///
/// Dispatch order:
/// 1. Known target types map to their path bucket directly.
/// 2. Unknown target types fall back to `view_slug` substring
///    heuristics (`entity` / `transaction`).
/// 3. Anything else is "not yet routable" — an informational message.
pub fn route_card(scope: &WorkspaceScope, card: &WorkspaceCard) -> RouteOutcome {
    let slug = card.entity_type.as_deref().unwrap_or(&card.view_slug);

    if let Some(bucket) = card.target_type.bucket() {
        return navigate(scope, bucket, slug);
    }

    // Heuristic fallback for unrecognized targets.
    if card.view_slug.contains("entity") {
        return navigate(scope, "entities", slug);
    }
    if card.view_slug.contains("transaction") {
        return navigate(scope, "transactions", slug);
    }

    let target = match &card.target_type {
        TargetType::Other(s) => s.as_str(),
        t => t.as_str(),
    };
    RouteOutcome::Inform {
        message: format!("'{}' ({}) is not yet routable", card.label, target),
    }
}

fn navigate(scope: &WorkspaceScope, bucket: &str, slug: &str) -> RouteOutcome {
    RouteOutcome::Navigate {
        path: format!(
            "/{}/{}/{}/{}/{}",
            scope.domain, scope.section, scope.workspace, bucket, slug
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> WorkspaceScope {
        WorkspaceScope::new("retail", "pos", "main")
    }

    fn card(target: &str, slug: &str, entity_type: Option<&str>) -> WorkspaceCard {
        WorkspaceCard {
            label: "Card".into(),
            subtitle: None,
            icon: None,
            view_slug: slug.into(),
            target_type: TargetType::from(target.to_string()),
            entity_type: entity_type.map(String::from),
            nav_code: None,
            metrics: None,
            status: None,
            priority: None,
        }
    }

    #[test]
    fn entity_card_routes_to_entities_bucket() {
        let outcome = route_card(&scope(), &card("entity", "customers-list", Some("customers")));
        assert_eq!(
            outcome,
            RouteOutcome::Navigate {
                path: "/retail/pos/main/entities/customers".into()
            }
        );
    }

    #[test]
    fn plural_target_spelling_routes_the_same() {
        let a = route_card(&scope(), &card("transaction", "sales-list", Some("sales")));
        let b = route_card(&scope(), &card("transactions", "sales-list", Some("sales")));
        assert_eq!(a, b);
    }

    #[test]
    fn slug_falls_back_to_view_slug_without_entity_type() {
        let outcome = route_card(&scope(), &card("report", "daily-summary", None));
        assert_eq!(
            outcome,
            RouteOutcome::Navigate {
                path: "/retail/pos/main/reports/daily-summary".into()
            }
        );
    }

    #[test]
    fn unknown_target_uses_view_slug_heuristic() {
        let outcome = route_card(&scope(), &card("custom", "entity-browser", None));
        assert_eq!(
            outcome,
            RouteOutcome::Navigate {
                path: "/retail/pos/main/entities/entity-browser".into()
            }
        );

        let outcome = route_card(&scope(), &card("custom", "transaction-feed", None));
        assert_eq!(
            outcome,
            RouteOutcome::Navigate {
                path: "/retail/pos/main/transactions/transaction-feed".into()
            }
        );
    }

    #[test]
    fn unroutable_card_informs_instead_of_failing() {
        let outcome = route_card(&scope(), &card("salon_calendar", "calendar", None));
        match outcome {
            RouteOutcome::Inform { message } => {
                assert!(message.contains("not yet routable"));
                assert!(message.contains("salon_calendar"));
            }
            other => panic!("expected Inform, got {:?}", other),
        }
    }

    #[test]
    fn analytics_and_workflow_buckets() {
        let outcome = route_card(&scope(), &card("analytics", "sales-performance", None));
        assert_eq!(
            outcome,
            RouteOutcome::Navigate {
                path: "/retail/pos/main/analytics/sales-performance".into()
            }
        );

        let outcome = route_card(&scope(), &card("workflows", "invoice-approval", None));
        assert_eq!(
            outcome,
            RouteOutcome::Navigate {
                path: "/retail/pos/main/workflows/invoice-approval".into()
            }
        );
    }
}
