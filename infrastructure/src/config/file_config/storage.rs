//! Storage configuration from TOML (`[storage]` section)

use crate::storage::JsonFileScoreStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Where the best score is kept (defaults under the user data dir)
    pub high_score_file: Option<PathBuf>,
}

impl FileStorageConfig {
    /// Configured path, falling back to the platform data directory
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.high_score_file
            .clone()
            .or_else(JsonFileScoreStore::default_path)
    }
}
