//! Domain layer for creature-quiz
//!
//! This crate contains the core game rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Round
//!
//! One guessing challenge: four distinct creatures, one of them correct,
//! shown in shuffled order with a countdown.
//!
//! ## Game Session
//!
//! The phase state machine (`menu → loading → playing → revealed → …`)
//! that owns score, lives and the best score.
//!
//! ## Conversion
//!
//! Pure unit conversion for currency, temperature and length.

pub mod conversion;
pub mod core;
pub mod creature;
pub mod game;
pub mod round;

// Re-export commonly used types
pub use conversion::{ConversionPanel, ConversionRequest, UnitCategory};
pub use core::error::DomainError;
pub use creature::entities::{Creature, CreatureId};
pub use game::{
    phase::Phase,
    rules::GameRules,
    session::{GameSession, GuessOutcome, NextStep, TickOutcome},
};
pub use round::{Guess, OPTION_COUNT, OptionStatus, Round, sample_ids};
