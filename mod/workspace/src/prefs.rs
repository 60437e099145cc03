//! Personalization persistence.
//!
//! One JSON document per key, written whole on every save — there is
//! no partial update and no schema versioning, matching the client
//! cache this replaces.

use std::path::PathBuf;

use hera_core::ServiceError;

/// File-backed preference store: `{dir}/{key}.json`.
pub struct PrefsStore {
    dir: PathBuf,
}

impl PrefsStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| ServiceError::Internal(format!("cannot create prefs dir: {}", e)))?;
        Ok(Self { dir })
    }

    /// Load the document stored under `key`, if any.
    pub fn load(&self, key: &str) -> Result<Option<serde_json::Value>, ServiceError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| ServiceError::Internal(format!("corrupt prefs '{}': {}", key, e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ServiceError::Internal(format!(
                "cannot read prefs '{}': {}",
                key, e
            ))),
        }
    }

    /// Overwrite the document stored under `key`.
    pub fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), ServiceError> {
        let path = self.path_for(key)?;
        let raw = serde_json::to_string_pretty(value)
            .map_err(|e| ServiceError::Internal(format!("cannot encode prefs '{}': {}", key, e)))?;
        std::fs::write(&path, raw)
            .map_err(|e| ServiceError::Internal(format!("cannot write prefs '{}': {}", key, e)))
    }

    // Keys become file names; anything path-like is rejected.
    fn path_for(&self, key: &str) -> Result<PathBuf, ServiceError> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ServiceError::Validation(format!(
                "invalid prefs key '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::open(dir.path()).unwrap();

        store
            .save("favorites_retail_pos_main", &json!({"slugs": ["customers"]}))
            .unwrap();
        let loaded = store.load("favorites_retail_pos_main").unwrap().unwrap();
        assert_eq!(loaded["slugs"][0], "customers");
    }

    #[test]
    fn missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::open(dir.path()).unwrap();
        assert!(store.load("nothing_here").unwrap().is_none());
    }

    // Save is a full overwrite: fields from the previous document do
    // not survive.
    #[test]
    fn save_is_full_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::open(dir.path()).unwrap();

        store.save("doc", &json!({"a": 1, "b": 2})).unwrap();
        store.save("doc", &json!({"a": 3})).unwrap();
        let loaded = store.load("doc").unwrap().unwrap();
        assert_eq!(loaded, json!({"a": 3}));
    }

    #[test]
    fn path_like_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefsStore::open(dir.path()).unwrap();
        for key in ["../escape", "a/b", "", "dot.dot"] {
            let err = store.save(key, &json!({})).unwrap_err();
            assert_eq!(err.error_code(), "VALIDATION_FAILED", "key {:?}", key);
        }
    }
}
