//! Server configuration file handling.
//!
//! The `-c` argument is either a context name (resolved to
//! `/etc/hera/<name>.toml`) or a direct path when it contains `/` or
//! `.`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub storage: StorageConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub refresh: RefreshSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for runtime data (cards, preferences).
    pub data_dir: String,
}

/// Authentication policy for permission-gated endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// "allow-all" (default) or "token".
    #[serde(default)]
    pub mode: String,

    /// Shared bearer token, required when mode = "token".
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshSection {
    /// Seconds between card-cache refreshes. 0 disables.
    pub interval_secs: u64,
}

impl Default for RefreshSection {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

impl ServerConfig {
    /// Resolve a context name or path to a config file path.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/hera/{}.toml", name_or_path))
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config {}: {}", path.display(), e))?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("cannot parse config {}: {}", path.display(), e))?;
        Ok(config)
    }
}
