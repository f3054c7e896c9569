//! Random selection of creature identifiers

use crate::core::error::DomainError;
use crate::creature::entities::CreatureId;
use rand::Rng;
use rand::seq::index;

/// Draw `count` pairwise distinct ids uniformly from `[1, pool]`.
///
/// Sampling is without replacement, so there is no retry loop and the
/// result is always exactly `count` long.
pub fn sample_ids<R: Rng + ?Sized>(
    rng: &mut R,
    pool: u32,
    count: usize,
) -> Result<Vec<CreatureId>, DomainError> {
    if (pool as usize) < count {
        return Err(DomainError::PoolTooSmall { count, pool });
    }

    index::sample(rng, pool as usize, count)
        .into_iter()
        .map(|i| CreatureId::new(i as u32 + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let ids = sample_ids(&mut rng, 493, 4).unwrap();
            assert_eq!(ids.len(), 4);
            let unique: HashSet<_> = ids.iter().collect();
            assert_eq!(unique.len(), 4);
            assert!(ids.iter().all(|id| (1..=493).contains(&id.get())));
        }
    }

    #[test]
    fn test_sample_ids_exhausts_exact_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ids: Vec<u32> = sample_ids(&mut rng, 4, 4)
            .unwrap()
            .into_iter()
            .map(|id| id.get())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sample_ids_pool_too_small() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            sample_ids(&mut rng, 3, 4),
            Err(DomainError::PoolTooSmall { count: 4, pool: 3 })
        );
    }
}
