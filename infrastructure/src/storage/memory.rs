//! Process-local score store

use quiz_application::{ScoreStore, ScoreStoreError};
use std::collections::HashMap;
use std::sync::Mutex;

/// Score store that forgets everything when the process exits
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    values: Mutex<HashMap<String, u32>>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`
    pub fn with_value(key: impl Into<String>, value: u32) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.into(), value);
        store
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn read(&self, key: &str) -> Result<Option<u32>, ScoreStoreError> {
        let values = self.values.lock().unwrap_or_else(|p| p.into_inner());
        Ok(values.get(key).copied())
    }

    fn write(&self, key: &str, value: u32) -> Result<(), ScoreStoreError> {
        let mut values = self.values.lock().unwrap_or_else(|p| p.into_inner());
        values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_application::HIGH_SCORE_KEY;

    #[test]
    fn test_read_absent() {
        let store = InMemoryScoreStore::new();
        assert_eq!(store.read(HIGH_SCORE_KEY).unwrap(), None);
    }

    #[test]
    fn test_write_replaces() {
        let store = InMemoryScoreStore::with_value(HIGH_SCORE_KEY, 40);
        assert_eq!(store.read(HIGH_SCORE_KEY).unwrap(), Some(40));
        store.write(HIGH_SCORE_KEY, 90).unwrap();
        assert_eq!(store.read(HIGH_SCORE_KEY).unwrap(), Some(90));
        assert_eq!(store.read("other").unwrap(), None);
    }
}
