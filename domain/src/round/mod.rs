//! Round domain
//!
//! One guessing challenge: a correct creature, four shuffled options and the
//! seconds left on the clock.

pub mod entities;
pub mod sampling;

pub use entities::{Guess, OPTION_COUNT, OptionStatus, Round};
pub use sampling::sample_ids;
