//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod game_controller;
pub mod generate_round;
pub mod round_timer;
