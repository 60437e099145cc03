use thiserror::Error;

/// Catalog validation errors.
///
/// Any of these at startup means the compiled-in catalog is broken and
/// the server must refuse to start — a dangling reference would
/// otherwise surface as a blank screen somewhere downstream.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A cross-reference names an id that does not exist.
    #[error("{entity} '{id}': {field} references unknown {target} '{reference}'")]
    DanglingReference {
        entity: &'static str,
        id: String,
        field: &'static str,
        target: &'static str,
        reference: String,
    },

    /// Two catalog entries in the same collection share an id.
    #[error("duplicate {entity} id '{id}'")]
    DuplicateId { entity: &'static str, id: String },

    /// An entity type supports `create` but has no required fields.
    #[error("entity type '{id}' supports create but has no required fields")]
    NoRequiredFields { id: String },

    /// A transaction type has no terminal status in its lifecycle.
    #[error("transaction type '{id}' has no terminal status (expected one of completed/cancelled)")]
    NoTerminalStatus { id: String },
}
