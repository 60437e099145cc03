//! Universal workspace configuration — the immutable catalog of
//! domains, sections, workspaces and type definitions, plus the pure
//! functions that resolve a concrete screen configuration from route
//! segments.
//!
//! Adding a new domain/section/workspace is a data-only change in
//! [`catalog`]; nothing downstream needs code changes.

pub mod breadcrumb;
pub mod catalog;
pub mod error;
pub mod model;
pub mod registry;
pub mod resolver;
pub mod smart_code;

pub use breadcrumb::{Crumb, breadcrumbs};
pub use error::ConfigError;
pub use model::{
    Action, AnalyticsType, Cardinality, ChartKind, Domain, EntityType, Field, FieldKind,
    RelationshipType, Section, StepKind, TransactionType, WorkflowStep, WorkflowType, Workspace,
};
pub use registry::Registry;
pub use resolver::Resolved;
pub use smart_code::generate_smart_code;
