//! Game event types emitted by GameController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer.

use quiz_domain::{GuessOutcome, OptionStatus, Round};

/// What the player sees while a round is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// 1-based round counter within the current game
    pub round_number: u32,
    /// Hint image of the creature to guess
    pub image_url: String,
    /// Option names in display order
    pub options: Vec<String>,
    pub time_remaining: u32,
    pub score: u32,
    pub lives: u32,
}

impl RoundView {
    pub(crate) fn new(round: &Round, round_number: u32, score: u32, lives: u32) -> Self {
        Self {
            round_number,
            image_url: round.correct().image_url().to_string(),
            options: round.option_names(),
            time_remaining: round.time_remaining(),
            score,
            lives,
        }
    }
}

/// A resolved round: the outcome plus per-option highlighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealView {
    pub outcome: GuessOutcome,
    /// `(name, status)` in display order
    pub options: Vec<(String, OptionStatus)>,
}

/// Events emitted by GameController for the presentation layer to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    // === Menu ===
    /// Controller is up; show the menu
    Welcome { high_score: u32, initial_lives: u32 },

    // === Round lifecycle ===
    /// A new round is being generated
    Loading,
    /// Round generated, clock running
    RoundReady(RoundView),
    /// One second elapsed
    Tick { time_remaining: u32 },
    /// The round was answered (or timed out)
    GuessResolved(RevealView),
    /// Round generation failed; `retry` is available
    RoundFailed { error: String },

    // === Pause ===
    Paused { time_remaining: u32 },
    Resumed { time_remaining: u32 },

    // === End ===
    /// Lives exhausted
    GameOver {
        score: u32,
        high_score: u32,
        new_record: bool,
    },
    /// Controller has shut down
    Stopped,
}
