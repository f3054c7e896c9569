//! Creature domain
//!
//! A creature is the unit of a guessing challenge: an identifier, the name the
//! player must pick and the image shown as the hint.

pub mod entities;
