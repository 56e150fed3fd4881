//! Persisted config: the derived token identifier between invocations
//!
//! One small JSON object at a fixed path relative to the working
//! directory. Written wholesale after the full value is computed, read at
//! most once per command. Absence is a normal precondition-not-met state
//! for first-ever issuance.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "sft-config.json";

/// The persisted record. Unknown fields are ignored on read so the schema
/// can grow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedConfig {
    #[serde(rename = "tokenIdentifier", default)]
    pub token_identifier: Option<String>,
}

/// Reads and writes the persisted record.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path relative to the current working directory.
    pub fn in_working_dir() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }

    /// Serialize the whole record, then write it in one call, overwriting
    /// any prior content. The value is fully computed before any byte
    /// reaches disk.
    pub fn save(&self, config: &PersistedConfig) -> Result<()> {
        let contents = serde_json::to_string_pretty(config)
            .map_err(|e| Error::ConfigFormat(e.to_string()))?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    pub fn load(&self) -> Result<PersistedConfig> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound)
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&contents).map_err(|e| Error::ConfigFormat(e.to_string()))
    }

    /// The token identifier, or `ConfigNotFound` when the file is missing
    /// or the field was never written.
    pub fn require_token_identifier(&self) -> Result<String> {
        self.load()?.token_identifier.ok_or(Error::ConfigNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("sft-config.json"));
        let config = PersistedConfig {
            token_identifier: Some("ABC-1234".to_string()),
        };
        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
        assert_eq!(store.require_token_identifier().unwrap(), "ABC-1234");
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nope.json"));
        assert!(matches!(store.load().unwrap_err(), Error::ConfigNotFound));
    }

    #[test]
    fn corrupt_file_is_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sft-config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = ConfigStore::new(&path);
        assert!(matches!(store.load().unwrap_err(), Error::ConfigFormat(_)));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sft-config.json");
        std::fs::write(
            &path,
            r#"{"tokenIdentifier": "MTK-a1b2c3", "futureField": 42}"#,
        )
        .unwrap();
        let store = ConfigStore::new(&path);
        assert_eq!(
            store.load().unwrap().token_identifier.as_deref(),
            Some("MTK-a1b2c3")
        );
    }

    #[test]
    fn reissue_overwrites_prior_identifier() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("sft-config.json"));
        store
            .save(&PersistedConfig {
                token_identifier: Some("OLD-0001".to_string()),
            })
            .unwrap();
        store
            .save(&PersistedConfig {
                token_identifier: Some("NEW-0002".to_string()),
            })
            .unwrap();
        assert_eq!(store.require_token_identifier().unwrap(), "NEW-0002");
    }
}
