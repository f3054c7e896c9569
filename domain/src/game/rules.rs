//! Scoring and pacing rules

use serde::{Deserialize, Serialize};

/// Rules a session is played under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Seconds on the clock at the start of every round
    pub round_seconds: u32,
    /// Lives at the start of a session
    pub initial_lives: u32,
    /// Points for any correct answer
    pub base_points: u32,
    /// Extra points per second left on the clock
    pub points_per_second: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            round_seconds: 15,
            initial_lives: 3,
            base_points: 50,
            points_per_second: 5,
        }
    }
}

impl GameRules {
    /// Points for a correct answer given with `time_remaining` seconds left,
    /// saturating at `u32::MAX`
    pub fn points_for(&self, time_remaining: u32) -> u32 {
        time_remaining
            .saturating_mul(self.points_per_second)
            .saturating_add(self.base_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_at_ten_seconds() {
        assert_eq!(GameRules::default().points_for(10), 100);
    }

    #[test]
    fn test_points_bounds() {
        let rules = GameRules::default();
        assert_eq!(rules.points_for(0), 50);
        assert_eq!(rules.points_for(15), 125);
    }

    #[test]
    fn test_points_saturate_on_huge_clock() {
        let rules = GameRules {
            round_seconds: 1_000_000_000,
            ..GameRules::default()
        };
        assert_eq!(rules.points_for(1_000_000_000), u32::MAX);
    }
}
