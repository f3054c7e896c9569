//! Line-based game REPL
//!
//! Reads commands from stdin and renders [`GameEvent`]s as they arrive. The
//! clock keeps running while the player types, so input and events are
//! multiplexed in one `select!` loop rather than read in turn.

use super::input::{InputAction, parse_input};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{RoundIndicator, SimpleProgress};
use quiz_application::{GameCommand, GameEvent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Interactive game REPL
pub struct GameRepl {
    commands: mpsc::UnboundedSender<GameCommand>,
    events: mpsc::UnboundedReceiver<GameEvent>,
    indicator: Box<dyn RoundIndicator>,
    round_seconds: u32,
    /// Names of the open round, in display order
    options: Vec<String>,
}

impl GameRepl {
    pub fn new(
        commands: mpsc::UnboundedSender<GameCommand>,
        events: mpsc::UnboundedReceiver<GameEvent>,
        round_seconds: u32,
    ) -> Self {
        Self {
            commands,
            events,
            indicator: Box::new(SimpleProgress),
            round_seconds,
            options: Vec::new(),
        }
    }

    /// Set how loading and the countdown are shown
    pub fn with_indicator(mut self, indicator: Box<dyn RoundIndicator>) -> Self {
        self.indicator = indicator;
        self
    }

    /// Run against the terminal until the controller stops
    pub async fn run(self) -> std::io::Result<()> {
        self.run_with(BufReader::new(tokio::io::stdin())).await
    }

    /// Run against any line source until the controller stops
    pub async fn run_with<R>(mut self, input: R) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut input_open = true;

        loop {
            tokio::select! {
                event = self.events.recv() => match event {
                    Some(GameEvent::Stopped) => {
                        self.render(GameEvent::Stopped);
                        break;
                    }
                    Some(event) => self.render(event),
                    None => {
                        debug!("Event channel closed");
                        break;
                    }
                },
                line = lines.next_line(), if input_open => match line {
                    Ok(Some(line)) => input_open = self.handle_line(&line),
                    Ok(None) => {
                        debug!("Input closed, quitting");
                        input_open = false;
                        self.send(GameCommand::Quit);
                    }
                    Err(e) => {
                        warn!("Failed to read input: {}", e);
                        input_open = false;
                        self.send(GameCommand::Quit);
                    }
                },
            }
        }

        self.indicator.clear();
        Ok(())
    }

    /// Act on one line; returns false once no more input should be read
    fn handle_line(&mut self, line: &str) -> bool {
        match parse_input(line, &self.options) {
            InputAction::Command(GameCommand::Quit) => {
                self.send(GameCommand::Quit);
                return false;
            }
            InputAction::Command(command) => self.send(command),
            InputAction::Help => self.indicator.println(&ConsoleFormatter::help()),
            InputAction::Empty => {}
            InputAction::Unknown(text) => self.indicator.println(&format!(
                "Unknown input '{}'. Type help for commands.",
                text
            )),
        }
        true
    }

    fn send(&self, command: GameCommand) {
        if self.commands.send(command).is_err() {
            debug!("Controller is gone; command dropped");
        }
    }

    fn render(&mut self, event: GameEvent) {
        match &event {
            GameEvent::Loading => {
                self.options.clear();
                self.indicator.loading();
            }
            GameEvent::RoundReady(view) => {
                self.options = view.options.clone();
                self.indicator.clear();
            }
            GameEvent::Tick { time_remaining } => self.indicator.tick(*time_remaining),
            GameEvent::Paused { .. } => self.indicator.clear(),
            GameEvent::Resumed { .. } => {}
            _ => {
                self.options.clear();
                self.indicator.clear();
            }
        }

        if let Some(text) = ConsoleFormatter::format_event(&event) {
            self.indicator.println(&text);
        }

        match event {
            GameEvent::RoundReady(view) => self
                .indicator
                .round_started(self.round_seconds, view.time_remaining),
            GameEvent::Resumed { time_remaining } => self
                .indicator
                .round_started(self.round_seconds, time_remaining),
            _ => {}
        }
    }
}
