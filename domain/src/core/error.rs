//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("A round needs exactly {expected} creatures, got {actual}")]
    WrongOptionCount { expected: usize, actual: usize },

    #[error("Creature #{0} appears more than once in the round")]
    DuplicateCreature(u32),

    #[error("Cannot draw {count} distinct ids from a pool of {pool}")]
    PoolTooSmall { count: usize, pool: u32 },

    #[error("Invalid creature id: {0}")]
    InvalidCreatureId(u32),

    #[error("Unknown unit category: {0}")]
    UnknownCategory(String),
}
