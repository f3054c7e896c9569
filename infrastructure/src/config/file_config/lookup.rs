//! Lookup configuration from TOML (`[lookup]` section)

use crate::lookup::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw lookup service configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLookupConfig {
    /// API root; `/pokemon/{id}` is appended
    pub base_url: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
    /// Overrides the default `creature-quiz/<version>` agent
    pub user_agent: Option<String>,
}

impl Default for FileLookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
            user_agent: None,
        }
    }
}

impl FileLookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent() {
        let config = FileLookupConfig::default();
        assert!(config.user_agent().starts_with("creature-quiz/"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }
}
