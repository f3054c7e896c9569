//! Game phase

use serde::{Deserialize, Serialize};

/// Discrete state of a game session
///
/// ```text
/// menu → loading → playing ⇄ paused
///                  playing → revealed → loading | game-over
///        loading → error → loading (retry)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    #[default]
    Menu,
    Loading,
    Playing,
    Paused,
    Revealed,
    Error,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Loading => "loading",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::Revealed => "revealed",
            Phase::Error => "error",
            Phase::GameOver => "game-over",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
