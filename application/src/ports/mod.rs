//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod game_event;
pub mod lookup;
pub mod score_store;
