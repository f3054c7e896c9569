//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field has a default, so an empty file is a valid configuration.

mod game;
mod logging;
mod lookup;
mod output;
mod storage;

pub use game::FileGameConfig;
pub use logging::FileLoggingConfig;
pub use lookup::FileLookupConfig;
pub use output::FileOutputConfig;
pub use storage::FileStorageConfig;

use quiz_application::GameSettings;
use quiz_domain::OPTION_COUNT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest round the game accepts, in seconds
pub const MAX_ROUND_SECONDS: u32 = 3600;

/// Most lives a game may start with
pub const MAX_INITIAL_LIVES: u32 = 99;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("game.round_seconds cannot be 0")]
    ZeroRoundLength,

    #[error("game.round_seconds must be at most {max}, got {actual}")]
    RoundTooLong { max: u32, actual: u32 },

    #[error("game.initial_lives cannot be 0")]
    ZeroLives,

    #[error("game.initial_lives must be at most {max}, got {actual}")]
    TooManyLives { max: u32, actual: u32 },

    #[error("game.creature_count must be at least {min}, got {actual}")]
    CreaturePoolTooSmall { min: u32, actual: u32 },

    #[error("lookup.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("lookup.base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Round length, lives and pacing
    pub game: FileGameConfig,
    /// Creature lookup service
    pub lookup: FileLookupConfig,
    /// High score persistence
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file redirection
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.game.round_seconds == 0 {
            return Err(ConfigValidationError::ZeroRoundLength);
        }
        if self.game.round_seconds > MAX_ROUND_SECONDS {
            return Err(ConfigValidationError::RoundTooLong {
                max: MAX_ROUND_SECONDS,
                actual: self.game.round_seconds,
            });
        }
        if self.game.initial_lives == 0 {
            return Err(ConfigValidationError::ZeroLives);
        }
        if self.game.initial_lives > MAX_INITIAL_LIVES {
            return Err(ConfigValidationError::TooManyLives {
                max: MAX_INITIAL_LIVES,
                actual: self.game.initial_lives,
            });
        }

        let min = OPTION_COUNT as u32;
        if self.game.creature_count < min {
            return Err(ConfigValidationError::CreaturePoolTooSmall {
                min,
                actual: self.game.creature_count,
            });
        }

        if self.lookup.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.lookup.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        Ok(())
    }

    /// Settings for the game controller
    pub fn game_settings(&self) -> GameSettings {
        self.game.to_settings()
    }
}
