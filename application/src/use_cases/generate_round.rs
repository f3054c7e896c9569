//! Generate Round use case
//!
//! Draws four distinct ids, resolves them concurrently and builds a shuffled
//! [`Round`]. All four lookups must succeed; the first failure aborts the
//! remaining ones and fails the whole round.

use crate::ports::lookup::{CreatureLookup, LookupError};
use quiz_domain::{Creature, CreatureId, DomainError, OPTION_COUNT, Round, sample_ids};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can occur while generating a round
#[derive(Error, Debug)]
pub enum GenerateRoundError {
    #[error("Lookup of creature {id} failed: {source}")]
    Lookup {
        id: CreatureId,
        #[source]
        source: LookupError,
    },

    #[error("Invalid round: {0}")]
    InvalidRound(#[from] DomainError),

    #[error("Lookup task failed: {0}")]
    TaskFailed(String),
}

/// Use case for generating one round
pub struct GenerateRoundUseCase<L: CreatureLookup + 'static> {
    lookup: Arc<L>,
    creature_count: u32,
    rng: Mutex<StdRng>,
}

impl<L: CreatureLookup + 'static> GenerateRoundUseCase<L> {
    pub fn new(lookup: Arc<L>, creature_count: u32) -> Self {
        Self {
            lookup,
            creature_count,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Use a fixed seed so id draws and shuffles are reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Execute the use case
    pub async fn execute(&self) -> Result<Round, GenerateRoundError> {
        let ids = sample_ids(&mut *self.rng(), self.creature_count, OPTION_COUNT)?;
        debug!("Drew creature ids {:?}", ids);

        let candidates = self.resolve_all(&ids).await?;

        let round = Round::from_candidates(candidates, &mut *self.rng())?;
        info!(
            "Round ready: {} options, answer {}",
            round.options().len(),
            round.correct().id()
        );
        Ok(round)
    }

    /// Resolve every id in parallel, keeping the draw order
    async fn resolve_all(&self, ids: &[CreatureId]) -> Result<Vec<Creature>, GenerateRoundError> {
        let mut join_set = JoinSet::new();

        for (slot, id) in ids.iter().copied().enumerate() {
            let lookup = Arc::clone(&self.lookup);
            join_set.spawn(async move {
                let result = lookup.get(id).await;
                (slot, id, result)
            });
        }

        let mut resolved: Vec<Option<Creature>> = vec![None; ids.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((slot, id, Ok(creature))) => {
                    debug!("Resolved {} as {}", id, creature.name());
                    resolved[slot] = Some(creature);
                }
                Ok((_, id, Err(source))) => {
                    warn!("Lookup of {} failed: {}", id, source);
                    join_set.abort_all();
                    return Err(GenerateRoundError::Lookup { id, source });
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                    join_set.abort_all();
                    return Err(GenerateRoundError::TaskFailed(e.to_string()));
                }
            }
        }

        resolved
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| GenerateRoundError::TaskFailed("lookup result missing".to_string()))
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
