//! JSON file score store
//!
//! The file holds one object keyed by score name:
//!
//! ```json
//! { "creature_high_score": { "value": 275, "updated_at": "2026-01-01T12:00:00Z" } }
//! ```
//!
//! Writes go to a sibling temp file first and are renamed into place, so a
//! crash mid-write leaves the previous contents intact.

use chrono::{DateTime, Utc};
use quiz_application::{ScoreStore, ScoreStoreError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScoreRecord {
    value: u32,
    updated_at: DateTime<Utc>,
}

type ScoreFile = BTreeMap<String, ScoreRecord>;

/// Score store persisted as a small JSON document
pub struct JsonFileScoreStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// `<data_dir>/creature-quiz/scores.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("creature-quiz").join("scores.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<ScoreFile, ScoreStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ScoreFile::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(ScoreFile::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            ScoreStoreError::Corrupt(format!("{}: {}", self.path.display(), e))
        })
    }

    fn save(&self, scores: &ScoreFile) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(scores)
            .map_err(|e| ScoreStoreError::Corrupt(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for JsonFileScoreStore {
    fn read(&self, key: &str) -> Result<Option<u32>, ScoreStoreError> {
        Ok(self.load()?.get(key).map(|record| record.value))
    }

    fn write(&self, key: &str, value: u32) -> Result<(), ScoreStoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|p| p.into_inner());

        let mut scores = match self.load() {
            Ok(scores) => scores,
            Err(ScoreStoreError::Corrupt(reason)) => {
                warn!("Replacing unreadable score file: {}", reason);
                ScoreFile::new()
            }
            Err(e) => return Err(e),
        };

        scores.insert(
            key.to_string(),
            ScoreRecord {
                value,
                updated_at: Utc::now(),
            },
        );
        self.save(&scores)?;

        debug!("Stored {}={} in {}", key, value, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_application::HIGH_SCORE_KEY;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileScoreStore {
        JsonFileScoreStore::new(dir.path().join("nested").join("scores.json"))
    }

    #[test]
    fn test_missing_file_reads_absent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.read(HIGH_SCORE_KEY).unwrap(), None);
    }

    #[test]
    fn test_write_then_read_across_instances() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).write(HIGH_SCORE_KEY, 275).unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.read(HIGH_SCORE_KEY).unwrap(), Some(275));
    }

    #[test]
    fn test_file_layout() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.write(HIGH_SCORE_KEY, 60).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw[HIGH_SCORE_KEY]["value"], 60);
        assert!(raw[HIGH_SCORE_KEY]["updated_at"].is_string());
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_other_keys_preserved() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.write("other", 1).unwrap();
        store.write(HIGH_SCORE_KEY, 2).unwrap();
        assert_eq!(store.read("other").unwrap(), Some(1));
        assert_eq!(store.read(HIGH_SCORE_KEY).unwrap(), Some(2));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(
            store.read(HIGH_SCORE_KEY),
            Err(ScoreStoreError::Corrupt(_))
        ));

        // A write recovers the file
        store.write(HIGH_SCORE_KEY, 10).unwrap();
        assert_eq!(store.read(HIGH_SCORE_KEY).unwrap(), Some(10));
    }

    #[test]
    fn test_default_path_is_under_app_dir() {
        if let Some(path) = JsonFileScoreStore::default_path() {
            assert!(path.ends_with("creature-quiz/scores.json"));
        }
    }
}
