//! Round entities

use crate::core::error::DomainError;
use crate::creature::entities::Creature;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of options offered in every round
pub const OPTION_COUNT: usize = 4;

/// What the player answered (Value Object)
///
/// Timer expiry is expressed as [`Guess::NoSelection`] and flows through the
/// same resolution path as an explicit pick; it can never be correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guess {
    /// The player picked the option with this display name
    Pick(String),
    /// Nothing was picked before the clock ran out
    NoSelection,
}

impl Guess {
    pub fn pick(name: impl Into<String>) -> Self {
        Self::Pick(name.into())
    }

    pub fn selected_name(&self) -> Option<&str> {
        match self {
            Guess::Pick(name) => Some(name),
            Guess::NoSelection => None,
        }
    }

    pub fn is_no_selection(&self) -> bool {
        matches!(self, Guess::NoSelection)
    }
}

/// How an option is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionStatus {
    /// Round still open
    Neutral,
    /// The right answer, shown after the reveal
    Correct,
    /// The player's pick, when it was wrong
    WrongSelection,
    /// Any other option after the reveal
    Dimmed,
}

/// A single guessing challenge (Entity)
///
/// Invariants: `options` holds [`OPTION_COUNT`] creatures with distinct ids,
/// and the correct creature's id appears among them exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    correct: Creature,
    options: Vec<Creature>,
    time_remaining: u32,
}

impl Round {
    /// Build a round from resolved candidates.
    ///
    /// The first candidate is the correct answer. The option order is then
    /// shuffled so the answer does not sit in a predictable slot. The clock
    /// starts at zero until the session arms it.
    pub fn from_candidates<R: Rng + ?Sized>(
        candidates: Vec<Creature>,
        rng: &mut R,
    ) -> Result<Self, DomainError> {
        if candidates.len() != OPTION_COUNT {
            return Err(DomainError::WrongOptionCount {
                expected: OPTION_COUNT,
                actual: candidates.len(),
            });
        }

        let mut seen = HashSet::with_capacity(OPTION_COUNT);
        for creature in &candidates {
            if !seen.insert(creature.id()) {
                return Err(DomainError::DuplicateCreature(creature.id().get()));
            }
        }

        let correct = candidates[0].clone();
        let mut options = candidates;
        options.shuffle(rng);

        Ok(Self {
            correct,
            options,
            time_remaining: 0,
        })
    }

    pub fn correct(&self) -> &Creature {
        &self.correct
    }

    /// Options in display order (fixed after the shuffle)
    pub fn options(&self) -> &[Creature] {
        &self.options
    }

    pub fn option_names(&self) -> Vec<String> {
        self.options.iter().map(|c| c.name().to_string()).collect()
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Whether `guess` names the correct creature
    pub fn is_correct(&self, guess: &Guess) -> bool {
        guess.selected_name() == Some(self.correct.name())
    }

    /// Highlighting for each option, in display order.
    ///
    /// `resolved` is `None` while the round is open.
    pub fn option_statuses(&self, resolved: Option<&Guess>) -> Vec<OptionStatus> {
        let Some(guess) = resolved else {
            return vec![OptionStatus::Neutral; self.options.len()];
        };

        self.options
            .iter()
            .map(|option| {
                if option.name() == self.correct.name() {
                    OptionStatus::Correct
                } else if guess.selected_name() == Some(option.name()) {
                    OptionStatus::WrongSelection
                } else {
                    OptionStatus::Dimmed
                }
            })
            .collect()
    }

    pub(crate) fn reset_clock(&mut self, seconds: u32) {
        self.time_remaining = seconds;
    }

    /// Count down one second, returning what is left
    pub(crate) fn tick(&mut self) -> u32 {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.time_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::entities::CreatureId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn creature(id: u32, name: &str) -> Creature {
        Creature::new(
            CreatureId::new(id).unwrap(),
            name,
            format!("https://img/{id}.png"),
        )
    }

    fn candidates() -> Vec<Creature> {
        vec![
            creature(25, "Pikachu"),
            creature(1, "Bulbasaur"),
            creature(4, "Charmander"),
            creature(7, "Squirtle"),
        ]
    }

    #[test]
    fn test_first_candidate_is_correct() {
        let mut rng = StdRng::seed_from_u64(3);
        let round = Round::from_candidates(candidates(), &mut rng).unwrap();
        assert_eq!(round.correct().name(), "Pikachu");
    }

    #[test]
    fn test_correct_appears_exactly_once() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let round = Round::from_candidates(candidates(), &mut rng).unwrap();
            let hits = round
                .options()
                .iter()
                .filter(|c| c.id() == round.correct().id())
                .count();
            assert_eq!(hits, 1);
            assert_eq!(round.options().len(), OPTION_COUNT);
        }
    }

    #[test]
    fn test_shuffle_moves_correct_answer() {
        let mut rng = StdRng::seed_from_u64(5);
        let positions: HashSet<usize> = (0..100)
            .map(|_| {
                let round = Round::from_candidates(candidates(), &mut rng).unwrap();
                round
                    .options()
                    .iter()
                    .position(|c| c.name() == "Pikachu")
                    .unwrap()
            })
            .collect();
        assert!(positions.len() > 1, "correct option never moved");
    }

    #[test]
    fn test_rejects_wrong_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut short = candidates();
        short.pop();
        assert_eq!(
            Round::from_candidates(short, &mut rng),
            Err(DomainError::WrongOptionCount {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut dupes = candidates();
        dupes[3] = creature(25, "Pikachu");
        assert_eq!(
            Round::from_candidates(dupes, &mut rng),
            Err(DomainError::DuplicateCreature(25))
        );
    }

    #[test]
    fn test_no_selection_is_never_correct() {
        let mut rng = StdRng::seed_from_u64(1);
        let round = Round::from_candidates(candidates(), &mut rng).unwrap();
        assert!(!round.is_correct(&Guess::NoSelection));
        assert!(round.is_correct(&Guess::pick("Pikachu")));
        assert!(!round.is_correct(&Guess::pick("pikachu")));
    }

    #[test]
    fn test_option_statuses_after_wrong_pick() {
        let mut rng = StdRng::seed_from_u64(9);
        let round = Round::from_candidates(candidates(), &mut rng).unwrap();

        assert!(
            round
                .option_statuses(None)
                .iter()
                .all(|s| *s == OptionStatus::Neutral)
        );

        let guess = Guess::pick("Squirtle");
        let statuses = round.option_statuses(Some(&guess));
        for (option, status) in round.options().iter().zip(statuses) {
            let expected = match option.name() {
                "Pikachu" => OptionStatus::Correct,
                "Squirtle" => OptionStatus::WrongSelection,
                _ => OptionStatus::Dimmed,
            };
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn test_tick_saturates_at_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut round = Round::from_candidates(candidates(), &mut rng).unwrap();
        round.reset_clock(1);
        assert_eq!(round.tick(), 0);
        assert_eq!(round.tick(), 0);
    }
}
