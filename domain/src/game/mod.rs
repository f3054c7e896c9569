//! Game domain
//!
//! The session state machine and its scoring rules. Timing lives outside
//! the domain: callers feed ticks and guesses in, the session decides what
//! they mean for the current phase.

pub mod phase;
pub mod rules;
pub mod session;
