pub mod auth;
pub mod config;
pub mod error;
pub mod module;
pub mod types;

pub use auth::{AllowAll, Authenticator, DenyAll, StaticToken};
pub use config::ServiceConfig;
pub use error::ServiceError;
pub use module::Module;
pub use types::{Envelope, new_id, now_rfc3339};
