//! Presentation layer for creature-quiz
//!
//! This crate contains CLI definitions, output formatters,
//! progress indicators, and the interactive game REPL.

pub mod cli;
pub mod config;
pub mod game;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{CategoryArg, Cli, Command};
pub use config::OutputConfig;
pub use game::input::{InputAction, parse_input};
pub use game::repl::GameRepl;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, RoundIndicator, SimpleProgress};
