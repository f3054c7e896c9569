//! Game session state machine

use super::phase::Phase;
use super::rules::GameRules;
use crate::creature::entities::Creature;
use crate::round::{Guess, OptionStatus, Round};
use serde::{Deserialize, Serialize};

/// What happens once the reveal delay is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum NextStep {
    /// Load another round
    NextRound,
    /// Lives are exhausted
    GameOver {
        final_score: u32,
        /// The final score beat the best score known at session start
        new_record: bool,
    },
}

/// Result of resolving a guess (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess: Guess,
    pub correct: bool,
    pub answer: Creature,
    /// Points awarded (0 when wrong)
    pub points: u32,
    /// Seconds left at the moment of the guess
    pub time_remaining: u32,
    /// Score after this guess
    pub score: u32,
    /// Lives after this guess
    pub lives: u32,
    pub next: NextStep,
}

impl GuessOutcome {
    /// The clock ran out (or the player explicitly passed)
    pub fn timed_out(&self) -> bool {
        self.guess.is_no_selection()
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.next, NextStep::GameOver { .. })
    }
}

/// Result of a one-second tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; the tick was dropped
    Ignored,
    /// Clock counted down, seconds left
    Counted(u32),
    /// Clock hit zero and the round resolved as a "no selection" guess
    Expired(GuessOutcome),
}

/// A game session (Aggregate Root)
///
/// Owns score, lives, phase and the current round. Every operation that does
/// not apply to the current phase is a silent no-op, reported to the caller
/// as `false` / `None` so it can decide whether to log it.
#[derive(Debug, Clone)]
pub struct GameSession {
    rules: GameRules,
    phase: Phase,
    score: u32,
    lives: u32,
    high_score: u32,
    /// Best score loaded when the session was created, used for `new_record`
    best_at_start: u32,
    round: Option<Round>,
    resolved: Option<Guess>,
    rounds_played: u32,
}

impl GameSession {
    /// Create a session in `menu` with the best score loaded from storage
    pub fn new(rules: GameRules, high_score: u32) -> Self {
        Self {
            rules,
            phase: Phase::Menu,
            score: 0,
            lives: rules.initial_lives,
            high_score,
            best_at_start: high_score,
            round: None,
            resolved: None,
            rounds_played: 0,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The current score beats the best score known when this game started
    pub fn is_new_record(&self) -> bool {
        self.score > self.best_at_start
    }

    pub fn time_remaining(&self) -> Option<u32> {
        self.round.as_ref().map(Round::time_remaining)
    }

    /// Option highlighting for the round on screen
    pub fn option_statuses(&self) -> Vec<OptionStatus> {
        match &self.round {
            Some(round) => round.option_statuses(self.resolved.as_ref()),
            None => Vec::new(),
        }
    }

    /// `menu | game-over → loading`, resetting score and lives
    pub fn start(&mut self) -> bool {
        if !matches!(self.phase, Phase::Menu | Phase::GameOver) {
            return false;
        }
        self.score = 0;
        self.lives = self.rules.initial_lives;
        self.best_at_start = self.high_score;
        self.rounds_played = 0;
        self.enter_loading();
        true
    }

    /// `error → loading`, keeping score and lives
    pub fn retry(&mut self) -> bool {
        if self.phase != Phase::Error {
            return false;
        }
        self.enter_loading();
        true
    }

    /// `loading → playing` with a freshly generated round
    pub fn round_ready(&mut self, mut round: Round) -> bool {
        if self.phase != Phase::Loading {
            return false;
        }
        round.reset_clock(self.rules.round_seconds);
        self.round = Some(round);
        self.rounds_played += 1;
        self.phase = Phase::Playing;
        true
    }

    /// `loading → error`
    pub fn round_failed(&mut self) -> bool {
        if self.phase != Phase::Loading {
            return false;
        }
        self.phase = Phase::Error;
        true
    }

    /// One second elapsed on the round clock
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Playing {
            return TickOutcome::Ignored;
        }
        let Some(round) = self.round.as_mut() else {
            return TickOutcome::Ignored;
        };

        let left = round.tick();
        if left > 0 {
            return TickOutcome::Counted(left);
        }

        match self.guess(Guess::NoSelection) {
            Some(outcome) => TickOutcome::Expired(outcome),
            None => TickOutcome::Ignored,
        }
    }

    /// `playing → revealed`
    ///
    /// A correct pick scores `base + time_remaining × bonus`. Anything else,
    /// including [`Guess::NoSelection`], costs a life. When the last life goes
    /// the high score is updated here so the caller can persist it before the
    /// reveal delay.
    pub fn guess(&mut self, guess: Guess) -> Option<GuessOutcome> {
        if self.phase != Phase::Playing {
            return None;
        }
        let round = self.round.as_ref()?;

        let time_remaining = round.time_remaining();
        let correct = round.is_correct(&guess);
        let answer = round.correct().clone();

        let points = if correct {
            let points = self.rules.points_for(time_remaining);
            self.score = self.score.saturating_add(points);
            points
        } else {
            self.lives = self.lives.saturating_sub(1);
            0
        };

        let next = if self.lives == 0 {
            let new_record = self.score > self.best_at_start;
            if self.score > self.high_score {
                self.high_score = self.score;
            }
            NextStep::GameOver {
                final_score: self.score,
                new_record,
            }
        } else {
            NextStep::NextRound
        };

        self.phase = Phase::Revealed;
        self.resolved = Some(guess.clone());

        Some(GuessOutcome {
            guess,
            correct,
            answer,
            points,
            time_remaining,
            score: self.score,
            lives: self.lives,
            next,
        })
    }

    /// `revealed → loading | game-over`, once the reveal delay is over
    pub fn advance(&mut self) -> Option<Phase> {
        if self.phase != Phase::Revealed {
            return None;
        }
        if self.lives == 0 {
            self.phase = Phase::GameOver;
        } else {
            self.enter_loading();
        }
        Some(self.phase)
    }

    /// `playing → paused`
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    /// `paused → playing`, clock and options untouched
    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Playing;
        true
    }

    fn enter_loading(&mut self) {
        self.round = None;
        self.resolved = None;
        self.phase = Phase::Loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::entities::CreatureId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_round() -> Round {
        let names = ["Pikachu", "Bulbasaur", "Charmander", "Squirtle"];
        let candidates = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Creature::new(CreatureId::new(i as u32 + 1).unwrap(), *name, "img")
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(42);
        Round::from_candidates(candidates, &mut rng).unwrap()
    }

    fn playing_session(high_score: u32) -> GameSession {
        let mut session = GameSession::new(GameRules::default(), high_score);
        assert!(session.start());
        assert!(session.round_ready(test_round()));
        session
    }

    fn lose_round(session: &mut GameSession) -> GuessOutcome {
        let outcome = session.guess(Guess::pick("Squirtle")).unwrap();
        session.advance();
        if session.phase() == Phase::Loading {
            session.round_ready(test_round());
        }
        outcome
    }

    #[test]
    fn test_new_session_starts_in_menu() {
        let session = GameSession::new(GameRules::default(), 120);
        assert_eq!(session.phase(), Phase::Menu);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.high_score(), 120);
        assert!(session.round().is_none());
    }

    #[test]
    fn test_round_ready_arms_clock() {
        let session = playing_session(0);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.time_remaining(), Some(15));
        assert_eq!(session.rounds_played(), 1);
    }

    #[test]
    fn test_guess_ignored_outside_playing() {
        let mut session = GameSession::new(GameRules::default(), 0);
        assert!(session.guess(Guess::pick("Pikachu")).is_none());
        assert_eq!(session.phase(), Phase::Menu);

        session.start();
        assert!(session.guess(Guess::pick("Pikachu")).is_none());
        assert_eq!(session.phase(), Phase::Loading);
    }

    #[test]
    fn test_correct_guess_at_ten_seconds_scores_100() {
        let mut session = playing_session(0);
        for _ in 0..5 {
            session.tick();
        }
        assert_eq!(session.time_remaining(), Some(10));

        let outcome = session.guess(Guess::pick("Pikachu")).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.points, 100);
        assert_eq!(outcome.time_remaining, 10);
        assert_eq!(session.score(), 100);
        assert_eq!(session.lives(), 3);
        assert_eq!(outcome.next, NextStep::NextRound);
        assert_eq!(session.phase(), Phase::Revealed);
    }

    #[test]
    fn test_second_guess_rejected_until_next_round() {
        let mut session = playing_session(0);
        session.guess(Guess::pick("Pikachu")).unwrap();
        assert!(session.guess(Guess::pick("Pikachu")).is_none());
        assert_eq!(session.score(), 125);

        assert_eq!(session.advance(), Some(Phase::Loading));
        assert!(session.guess(Guess::pick("Pikachu")).is_none());
    }

    #[test]
    fn test_wrong_guess_costs_a_life() {
        let mut session = playing_session(0);
        let outcome = session.guess(Guess::pick("Bulbasaur")).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.lives, 2);
        assert_eq!(outcome.answer.name(), "Pikachu");
        assert!(!outcome.timed_out());

        let statuses = session.option_statuses();
        assert!(statuses.contains(&OptionStatus::Correct));
        assert!(statuses.contains(&OptionStatus::WrongSelection));
    }

    #[test]
    fn test_timer_expiry_equals_no_selection_guess() {
        let mut expired = playing_session(0);
        let mut outcome = None;
        for _ in 0..15 {
            if let TickOutcome::Expired(o) = expired.tick() {
                outcome = Some(o);
            }
        }
        let outcome = outcome.expect("clock should expire on the 15th tick");
        assert!(outcome.timed_out());
        assert_eq!(outcome.time_remaining, 0);

        let mut explicit = playing_session(0);
        for _ in 0..14 {
            explicit.tick();
        }
        let explicit_outcome = explicit.guess(Guess::NoSelection).unwrap();

        assert_eq!(outcome.correct, explicit_outcome.correct);
        assert_eq!(outcome.lives, explicit_outcome.lives);
        assert_eq!(outcome.score, explicit_outcome.score);
        assert_eq!(expired.phase(), explicit.phase());
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut session = playing_session(0);
        session.tick();
        assert!(session.pause());
        assert_eq!(session.tick(), TickOutcome::Ignored);
        assert!(session.guess(Guess::pick("Pikachu")).is_none());
        assert!(session.resume());
        assert_eq!(session.time_remaining(), Some(14));
        assert_eq!(session.tick(), TickOutcome::Counted(13));
    }

    #[test]
    fn test_pause_only_from_playing() {
        let mut session = GameSession::new(GameRules::default(), 0);
        assert!(!session.pause());
        assert!(!session.resume());
        session.start();
        assert!(!session.pause());
    }

    #[test]
    fn test_lives_never_increase_and_game_over_at_zero() {
        let mut session = playing_session(0);
        let mut previous = session.lives();

        for expected in [2, 1] {
            let outcome = lose_round(&mut session);
            assert_eq!(outcome.lives, expected);
            assert!(outcome.lives < previous);
            assert!(!outcome.is_game_over());
            previous = outcome.lives;
            assert_eq!(session.phase(), Phase::Playing);
        }

        // A correct answer never restores a life
        session.guess(Guess::pick("Pikachu")).unwrap();
        assert_eq!(session.lives(), 1);
        session.advance();
        session.round_ready(test_round());

        let outcome = session.guess(Guess::NoSelection).unwrap();
        assert_eq!(outcome.lives, 0);
        assert!(outcome.is_game_over());
        assert_eq!(session.phase(), Phase::Revealed);
        assert_eq!(session.advance(), Some(Phase::GameOver));
    }

    #[test]
    fn test_high_score_kept_when_not_beaten() {
        let mut session = playing_session(500);
        session.guess(Guess::pick("Pikachu")).unwrap();
        session.advance();
        session.round_ready(test_round());
        for _ in 0..2 {
            lose_round(&mut session);
        }
        let outcome = session.guess(Guess::NoSelection).unwrap();
        assert_eq!(
            outcome.next,
            NextStep::GameOver {
                final_score: 125,
                new_record: false
            }
        );
        assert_eq!(session.high_score(), 500);
    }

    #[test]
    fn test_high_score_updated_when_beaten() {
        let mut session = playing_session(100);
        session.guess(Guess::pick("Pikachu")).unwrap();
        session.advance();
        session.round_ready(test_round());
        for _ in 0..2 {
            lose_round(&mut session);
        }
        let outcome = session.guess(Guess::NoSelection).unwrap();
        assert_eq!(
            outcome.next,
            NextStep::GameOver {
                final_score: 125,
                new_record: true
            }
        );
        assert_eq!(session.high_score(), 125);
    }

    #[test]
    fn test_error_then_retry_keeps_score() {
        let mut session = playing_session(0);
        session.guess(Guess::pick("Pikachu")).unwrap();
        session.advance();
        assert!(session.round_failed());
        assert_eq!(session.phase(), Phase::Error);

        assert!(!session.start());
        assert!(session.retry());
        assert_eq!(session.phase(), Phase::Loading);
        assert_eq!(session.score(), 125);
    }

    #[test]
    fn test_play_again_from_game_over_resets() {
        let mut session = playing_session(0);
        session.guess(Guess::pick("Pikachu")).unwrap();
        session.advance();
        session.round_ready(test_round());
        for _ in 0..3 {
            lose_round(&mut session);
        }
        assert_eq!(session.phase(), Phase::GameOver);

        assert!(session.start());
        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.high_score(), 125);
    }
}
