//! Game configuration from TOML (`[game]` section)

use quiz_application::GameSettings;
use quiz_domain::GameRules;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw game configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Seconds on the clock each round
    pub round_seconds: u32,
    /// Lives at the start of a game
    pub initial_lives: u32,
    /// How long the answer stays on screen, in milliseconds
    pub reveal_delay_ms: u64,
    /// Ids are drawn from `1..=creature_count`
    pub creature_count: u32,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        let settings = GameSettings::default();
        Self {
            round_seconds: settings.rules.round_seconds,
            initial_lives: settings.rules.initial_lives,
            reveal_delay_ms: settings.reveal_delay.as_millis() as u64,
            creature_count: settings.creature_count,
        }
    }
}

impl FileGameConfig {
    pub fn to_settings(&self) -> GameSettings {
        let rules = GameRules {
            round_seconds: self.round_seconds,
            initial_lives: self.initial_lives,
            ..GameRules::default()
        };

        GameSettings::default()
            .with_rules(rules)
            .with_reveal_delay(Duration::from_millis(self.reveal_delay_ms))
            .with_creature_count(self.creature_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_settings() {
        let settings = FileGameConfig::default().to_settings();
        let expected = GameSettings::default();
        assert_eq!(settings.rules, expected.rules);
        assert_eq!(settings.reveal_delay, expected.reveal_delay);
        assert_eq!(settings.creature_count, expected.creature_count);
    }

    #[test]
    fn test_scoring_is_not_configurable() {
        let config = FileGameConfig {
            round_seconds: 30,
            ..FileGameConfig::default()
        };
        let rules = config.to_settings().rules;
        assert_eq!(rules.round_seconds, 30);
        assert_eq!(rules.base_points, 50);
        assert_eq!(rules.points_per_second, 5);
    }
}
