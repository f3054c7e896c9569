//! Creature lookup port
//!
//! Defines the interface for resolving creature ids against the external
//! data source.

use async_trait::async_trait;
use quiz_domain::{Creature, CreatureId};
use thiserror::Error;

/// Errors that can occur while resolving a creature
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Lookup of {id} returned HTTP {status}")]
    Status { id: CreatureId, status: u16 },

    #[error("Malformed record for {id}: {reason}")]
    Malformed { id: CreatureId, reason: String },

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Lookup service for creature records
///
/// Treated as unreliable: any call may fail or be slow. No retry is
/// expected from implementations; callers surface failures to the user.
#[async_trait]
pub trait CreatureLookup: Send + Sync {
    /// Resolve a single id to its record
    async fn get(&self, id: CreatureId) -> Result<Creature, LookupError>;
}
