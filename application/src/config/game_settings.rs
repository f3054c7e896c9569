//! Game settings: controller pacing.

use quiz_domain::GameRules;
use std::time::Duration;

/// Settings the game controller runs with.
///
/// Scoring and lives are domain policy ([`GameRules`]); how long things take
/// and how large the id pool is are application concerns.
#[derive(Debug, Clone)]
pub struct GameSettings {
    /// Scoring, lives and round length
    pub rules: GameRules,
    /// How long the answer stays revealed before the game moves on
    pub reveal_delay: Duration,
    /// Ids are drawn from `[1, creature_count]`
    pub creature_count: u32,
    /// Length of one clock tick
    pub tick: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            reveal_delay: Duration::from_secs(2),
            creature_count: 493,
            tick: Duration::from_secs(1),
        }
    }
}

impl GameSettings {
    // ==================== Builder Methods ====================

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    pub fn with_creature_count(mut self, count: u32) -> Self {
        self.creature_count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.rules.round_seconds, 15);
        assert_eq!(settings.rules.initial_lives, 3);
        assert_eq!(settings.reveal_delay, Duration::from_secs(2));
        assert_eq!(settings.creature_count, 493);
    }

    #[test]
    fn test_builder() {
        let settings = GameSettings::default()
            .with_creature_count(151)
            .with_reveal_delay(Duration::from_millis(500));
        assert_eq!(settings.creature_count, 151);
        assert_eq!(settings.reveal_delay, Duration::from_millis(500));
    }
}
