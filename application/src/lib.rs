//! Application layer for creature-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GameSettings;
pub use ports::{
    game_event::{GameEvent, RevealView, RoundView},
    lookup::{CreatureLookup, LookupError},
    score_store::{HIGH_SCORE_KEY, ScoreStore, ScoreStoreError},
};
pub use use_cases::game_controller::{GameCommand, GameController};
pub use use_cases::generate_round::{GenerateRoundError, GenerateRoundUseCase};
pub use use_cases::round_timer::{DelayedSignal, RoundTimer};
