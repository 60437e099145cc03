use std::path::PathBuf;

/// Common service configuration shared by all modules.
///
/// The server binary parses these from its config file, then passes
/// them to module initialization.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory containing runtime data (card payloads, preferences).
    pub data_dir: Option<PathBuf>,

    /// Directory containing per-scope workspace card JSON files.
    /// Defaults to `{data_dir}/cards/` if not specified.
    pub cards_dir: Option<PathBuf>,

    /// Directory for persisted user preferences.
    /// Defaults to `{data_dir}/prefs/` if not specified.
    pub prefs_dir: Option<PathBuf>,

    /// Listen address for the HTTP server.
    pub listen: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            cards_dir: None,
            prefs_dir: None,
            listen: "0.0.0.0:8080".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Resolve the card data directory, falling back to `{data_dir}/cards`.
    pub fn resolve_cards_dir(&self) -> PathBuf {
        self.cards_dir
            .clone()
            .unwrap_or_else(|| self.resolve_data_subpath("cards"))
    }

    /// Resolve the preferences directory, falling back to `{data_dir}/prefs`.
    pub fn resolve_prefs_dir(&self) -> PathBuf {
        self.prefs_dir
            .clone()
            .unwrap_or_else(|| self.resolve_data_subpath("prefs"))
    }

    fn resolve_data_subpath(&self, name: &str) -> PathBuf {
        self.data_dir
            .as_ref()
            .map(|d| d.join(name))
            .unwrap_or_else(|| PathBuf::from(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = ServiceConfig {
            data_dir: Some(PathBuf::from("/data")),
            ..Default::default()
        };
        assert_eq!(config.resolve_cards_dir(), PathBuf::from("/data/cards"));
        assert_eq!(config.resolve_prefs_dir(), PathBuf::from("/data/prefs"));
    }

    #[test]
    fn test_explicit_dirs_win() {
        let config = ServiceConfig {
            data_dir: Some(PathBuf::from("/data")),
            cards_dir: Some(PathBuf::from("/elsewhere/cards")),
            ..Default::default()
        };
        assert_eq!(config.resolve_cards_dir(), PathBuf::from("/elsewhere/cards"));
    }

    #[test]
    fn test_no_data_dir_falls_back_to_relative() {
        let config = ServiceConfig::default();
        assert_eq!(config.resolve_prefs_dir(), PathBuf::from("prefs"));
    }
}
