//! Bootstrap — startup checks that must pass before the server binds.
//!
//! 1. Verify the configuration file is usable.
//! 2. Validate the built-in catalog. A catalog defect (dangling
//!    reference, duplicate id, create-without-required-field,
//!    no-terminal-status) is a build error and refuses startup.

use hera_config::Registry;
use tracing::info;

use crate::config::ServerConfig;

/// Verify server configuration is ready for use.
pub fn verify_config(config: &ServerConfig) -> anyhow::Result<()> {
    if config.storage.data_dir.is_empty() {
        anyhow::bail!("Storage data_dir is empty in configuration.");
    }
    match config.auth.mode.as_str() {
        "" | "allow-all" => {}
        "token" => {
            if config.auth.token.is_empty() {
                anyhow::bail!("auth.mode is \"token\" but auth.token is empty.");
            }
        }
        other => anyhow::bail!("Unknown auth.mode {:?} (expected \"allow-all\" or \"token\").", other),
    }
    Ok(())
}

/// Validate the catalog and refuse startup on the first defect.
pub fn validate_catalog(registry: &Registry) -> anyhow::Result<()> {
    registry
        .validate()
        .map_err(|e| anyhow::anyhow!("catalog validation failed: {}", e))?;
    info!(
        domains = registry.domains.len(),
        workspaces = registry.workspaces.len(),
        entity_types = registry.entity_types.len(),
        "catalog validated"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, RefreshSection, StorageConfig};

    fn base_config() -> ServerConfig {
        ServerConfig {
            storage: StorageConfig {
                data_dir: "/tmp".to_string(),
            },
            auth: AuthConfig::default(),
            refresh: RefreshSection::default(),
        }
    }

    #[test]
    fn test_verify_config_empty_data_dir() {
        let mut config = base_config();
        config.storage.data_dir = String::new();
        assert!(verify_config(&config).is_err());
    }

    #[test]
    fn test_verify_config_token_mode_requires_token() {
        let mut config = base_config();
        config.auth.mode = "token".to_string();
        assert!(verify_config(&config).is_err());
        config.auth.token = "s3cret".to_string();
        assert!(verify_config(&config).is_ok());
    }

    #[test]
    fn test_verify_config_unknown_mode() {
        let mut config = base_config();
        config.auth.mode = "oauth".to_string();
        assert!(verify_config(&config).is_err());
    }

    #[test]
    fn test_builtin_catalog_passes() {
        assert!(validate_catalog(&Registry::builtin()).is_ok());
    }
}
