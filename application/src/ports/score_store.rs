//! Score store port
//!
//! A durable key → integer store. The game only ever uses one key,
//! [`HIGH_SCORE_KEY`].

use thiserror::Error;

/// Key the best score is stored under
pub const HIGH_SCORE_KEY: &str = "creature_high_score";

/// Errors from the backing store
#[derive(Error, Debug)]
pub enum ScoreStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt score data: {0}")]
    Corrupt(String),
}

/// Durable scalar storage
pub trait ScoreStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<u32>, ScoreStoreError>;

    /// Store `value` under `key`, replacing what was there
    fn write(&self, key: &str, value: u32) -> Result<(), ScoreStoreError>;
}
