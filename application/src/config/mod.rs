//! Application-level configuration.
//!
//! - [`GameSettings`]: pacing and pool size for the game controller

pub mod game_settings;

pub use game_settings::GameSettings;
