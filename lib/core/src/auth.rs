//! Authentication seam for modules.
//!
//! Modules do NOT depend on any specific auth mechanism. They only know
//! this trait. The concrete implementation is injected at startup time.

use axum::http::HeaderMap;
use tracing::warn;

use crate::ServiceError;

/// Pluggable authenticator. Modules call this before every sensitive
/// action (export, edit, target-setting).
///
/// The check receives the request headers (for extracting tokens)
/// and a permission string of the form `module:resource:action`.
pub trait Authenticator: Send + Sync + 'static {
    /// Authenticate a request and check the given permission.
    ///
    /// - `headers`: the HTTP request headers
    /// - `permission`: e.g. `"workspace:main:export"`
    /// - Returns `Ok(())` if allowed, `Err(ServiceError)` if denied.
    fn check(&self, headers: &HeaderMap, permission: &str) -> Result<(), ServiceError>;
}

/// A no-op authenticator that allows everything. Used for testing
/// and for public-only deployments.
pub struct AllowAll;

impl Authenticator for AllowAll {
    fn check(&self, _headers: &HeaderMap, _permission: &str) -> Result<(), ServiceError> {
        Ok(())
    }
}

/// An authenticator that denies everything. Used for testing.
pub struct DenyAll;

impl Authenticator for DenyAll {
    fn check(&self, _headers: &HeaderMap, permission: &str) -> Result<(), ServiceError> {
        warn!(permission, "permission denied (deny-all policy)");
        Err(ServiceError::PermissionDenied(format!(
            "permission '{}' denied",
            permission
        )))
    }
}

/// Bearer-token authenticator with a single shared secret.
///
/// Any request carrying `Authorization: Bearer <token>` with the
/// configured token passes every permission check. Denials are logged
/// as the audit trail.
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl Authenticator for StaticToken {
    fn check(&self, headers: &HeaderMap, permission: &str) -> Result<(), ServiceError> {
        let presented = headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        match presented {
            Some(token) if token == self.token => Ok(()),
            Some(_) => {
                warn!(permission, "permission denied: bad token");
                Err(ServiceError::PermissionDenied(format!(
                    "permission '{}' denied",
                    permission
                )))
            }
            None => {
                warn!(permission, "permission denied: missing bearer token");
                Err(ServiceError::Unauthorized(
                    "missing bearer token".to_string(),
                ))
            }
        }
    }
}
