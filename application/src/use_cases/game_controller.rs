//! Game Controller
//!
//! Owns the [`GameSession`] and every timed side effect of a game. Runs as
//! a single actor task: user commands arrive on one channel, timer and
//! round-generation results on an internal one, and everything the player
//! should see leaves as [`GameEvent`]s.
//!
//! Every phase change bumps an epoch counter and drops the active timer
//! handles. Internal messages carry the epoch they were scheduled in, so a
//! tick or reveal that was already queued when the phase changed is
//! discarded instead of touching the next round.

use crate::config::GameSettings;
use crate::ports::game_event::{GameEvent, RevealView, RoundView};
use crate::ports::lookup::CreatureLookup;
use crate::ports::score_store::{HIGH_SCORE_KEY, ScoreStore};
use crate::use_cases::generate_round::{GenerateRoundError, GenerateRoundUseCase};
use crate::use_cases::round_timer::{DelayedSignal, RoundTimer};
use quiz_domain::{GameSession, Guess, GuessOutcome, Phase, Round, TickOutcome};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Commands accepted from the user input surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Start,
    Guess(Guess),
    Pause,
    Resume,
    Retry,
    Quit,
}

/// Messages the controller sends itself from background tasks
#[derive(Debug)]
enum Internal {
    RoundLoaded {
        epoch: u64,
        result: Result<Round, GenerateRoundError>,
    },
    Tick {
        epoch: u64,
    },
    RevealElapsed {
        epoch: u64,
    },
}

/// Game controller managing one player's sessions
pub struct GameController<L: CreatureLookup + 'static> {
    session: GameSession,
    generator: Arc<GenerateRoundUseCase<L>>,
    score_store: Arc<dyn ScoreStore>,
    settings: GameSettings,
    /// Channel sender for game events
    tx: mpsc::UnboundedSender<GameEvent>,
    internal_tx: mpsc::UnboundedSender<Internal>,
    internal_rx: mpsc::UnboundedReceiver<Internal>,
    epoch: u64,
    timer: Option<RoundTimer>,
    reveal: Option<DelayedSignal>,
    loading: Option<JoinHandle<()>>,
}

impl<L: CreatureLookup + 'static> GameController<L> {
    /// Create a controller, loading the best score from `score_store`
    pub fn new(
        generator: Arc<GenerateRoundUseCase<L>>,
        score_store: Arc<dyn ScoreStore>,
        settings: GameSettings,
        tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let high_score = match score_store.read(HIGH_SCORE_KEY) {
            Ok(value) => value.unwrap_or(0),
            Err(e) => {
                warn!("Could not read high score, starting from 0: {}", e);
                0
            }
        };
        info!("Loaded high score {}", high_score);

        let (internal_tx, internal_rx) = mpsc::unbounded_channel();

        Self {
            session: GameSession::new(settings.rules, high_score),
            generator,
            score_store,
            settings,
            tx,
            internal_tx,
            internal_rx,
            epoch: 0,
            timer: None,
            reveal: None,
            loading: None,
        }
    }

    /// Run until [`GameCommand::Quit`] arrives or the command channel closes
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<GameCommand>) {
        self.emit(GameEvent::Welcome {
            high_score: self.session.high_score(),
            initial_lives: self.settings.rules.initial_lives,
        });

        loop {
            tokio::select! {
                biased;

                Some(message) = self.internal_rx.recv() => {
                    self.handle_internal(message);
                }

                command = commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    if !self.handle_command(command) {
                        break;
                    }
                }
            }
        }

        self.shutdown();
    }

    /// Apply one user command; returns false once the controller should stop.
    /// Commands that do not fit the current phase are ignored.
    fn handle_command(&mut self, command: GameCommand) -> bool {
        let phase = self.session.phase();
        let name = command_name(&command);
        let applied = match command {
            GameCommand::Start => {
                let started = self.session.start();
                if started {
                    info!("Game started");
                    self.begin_loading();
                }
                started
            }
            GameCommand::Retry => {
                let retried = self.session.retry();
                if retried {
                    info!("Retrying round generation");
                    self.begin_loading();
                }
                retried
            }
            GameCommand::Guess(guess) => match self.session.guess(guess) {
                Some(outcome) => {
                    self.on_resolved(outcome);
                    true
                }
                None => false,
            },
            GameCommand::Pause => {
                let paused = self.session.pause();
                if paused {
                    self.bump_epoch();
                    self.emit(GameEvent::Paused {
                        time_remaining: self.session.time_remaining().unwrap_or(0),
                    });
                }
                paused
            }
            GameCommand::Resume => {
                let resumed = self.session.resume();
                if resumed {
                    self.bump_epoch();
                    self.start_timer();
                    self.emit(GameEvent::Resumed {
                        time_remaining: self.session.time_remaining().unwrap_or(0),
                    });
                }
                resumed
            }
            GameCommand::Quit => {
                info!("Quit requested in phase {}", phase);
                return false;
            }
        };

        if !applied {
            debug!("Ignored command '{}' in phase {}", name, phase);
        }
        true
    }

    fn handle_internal(&mut self, message: Internal) {
        let epoch = match &message {
            Internal::RoundLoaded { epoch, .. }
            | Internal::Tick { epoch }
            | Internal::RevealElapsed { epoch } => *epoch,
        };
        if epoch != self.epoch {
            debug!("Dropping stale {:?} (epoch {} != {})", message, epoch, self.epoch);
            return;
        }

        match message {
            Internal::RoundLoaded { result, .. } => self.on_round_loaded(result),
            Internal::Tick { .. } => self.on_tick(),
            Internal::RevealElapsed { .. } => self.on_reveal_elapsed(),
        }
    }

    fn on_round_loaded(&mut self, result: Result<Round, GenerateRoundError>) {
        self.loading = None;
        match result {
            Ok(round) => {
                if !self.session.round_ready(round) {
                    return;
                }
                self.bump_epoch();
                self.start_timer();
                if let Some(round) = self.session.round() {
                    let view = RoundView::new(
                        round,
                        self.session.rounds_played(),
                        self.session.score(),
                        self.session.lives(),
                    );
                    self.emit(GameEvent::RoundReady(view));
                }
            }
            Err(e) => {
                if !self.session.round_failed() {
                    return;
                }
                warn!("Round generation failed: {}", e);
                self.bump_epoch();
                self.emit(GameEvent::RoundFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    fn on_tick(&mut self) {
        match self.session.tick() {
            TickOutcome::Ignored => {}
            TickOutcome::Counted(time_remaining) => {
                self.emit(GameEvent::Tick { time_remaining });
            }
            TickOutcome::Expired(outcome) => {
                info!("Clock ran out");
                self.emit(GameEvent::Tick { time_remaining: 0 });
                self.on_resolved(outcome);
            }
        }
    }

    fn on_resolved(&mut self, outcome: GuessOutcome) {
        self.bump_epoch();

        if outcome.correct {
            info!("Correct: {} (+{})", outcome.answer.name(), outcome.points);
        } else {
            info!(
                "Wrong: {:?}, answer was {} ({} lives left)",
                outcome.guess.selected_name(),
                outcome.answer.name(),
                outcome.lives
            );
        }

        if outcome.is_game_over() {
            self.persist_high_score();
        }

        let options = match self.session.round() {
            Some(round) => round
                .option_names()
                .into_iter()
                .zip(self.session.option_statuses())
                .collect(),
            None => Vec::new(),
        };
        self.emit(GameEvent::GuessResolved(RevealView { outcome, options }));

        let epoch = self.epoch;
        let tx = self.internal_tx.clone();
        self.reveal = Some(DelayedSignal::after(self.settings.reveal_delay, move || {
            let _ = tx.send(Internal::RevealElapsed { epoch });
        }));
    }

    fn on_reveal_elapsed(&mut self) {
        match self.session.advance() {
            Some(Phase::Loading) => self.begin_loading(),
            Some(Phase::GameOver) => {
                self.bump_epoch();
                info!("Game over with score {}", self.session.score());
                self.emit(GameEvent::GameOver {
                    score: self.session.score(),
                    high_score: self.session.high_score(),
                    new_record: self.session.is_new_record(),
                });
            }
            _ => {}
        }
    }

    /// Spawn round generation for the current epoch
    fn begin_loading(&mut self) {
        self.bump_epoch();
        self.emit(GameEvent::Loading);

        let epoch = self.epoch;
        let generator = Arc::clone(&self.generator);
        let tx = self.internal_tx.clone();
        self.loading = Some(tokio::spawn(async move {
            let result = generator.execute().await;
            let _ = tx.send(Internal::RoundLoaded { epoch, result });
        }));
    }

    fn start_timer(&mut self) {
        let epoch = self.epoch;
        let tx = self.internal_tx.clone();
        self.timer = Some(RoundTimer::start(self.settings.tick, move || {
            tx.send(Internal::Tick { epoch }).is_ok()
        }));
    }

    /// Save the best score if this game beat it
    fn persist_high_score(&self) {
        if !self.session.is_new_record() {
            return;
        }
        let high_score = self.session.high_score();
        match self.score_store.write(HIGH_SCORE_KEY, high_score) {
            Ok(()) => info!("New high score {} saved", high_score),
            Err(e) => warn!("Could not save high score {}: {}", high_score, e),
        }
    }

    /// Invalidate every pending timed message
    fn bump_epoch(&mut self) {
        self.epoch += 1;
        self.timer = None;
        self.reveal = None;
    }

    fn shutdown(&mut self) {
        self.bump_epoch();
        if let Some(handle) = self.loading.take() {
            handle.abort();
        }
        self.emit(GameEvent::Stopped);
    }

    fn emit(&self, event: GameEvent) {
        let _ = self.tx.send(event);
    }
}

fn command_name(command: &GameCommand) -> &'static str {
    match command {
        GameCommand::Start => "start",
        GameCommand::Guess(_) => "guess",
        GameCommand::Pause => "pause",
        GameCommand::Resume => "resume",
        GameCommand::Retry => "retry",
        GameCommand::Quit => "quit",
    }
}
