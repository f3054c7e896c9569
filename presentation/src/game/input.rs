//! Mapping typed lines to game commands

use quiz_application::GameCommand;
use quiz_domain::Guess;

/// What one line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Forward to the controller
    Command(GameCommand),
    /// Print the command list
    Help,
    /// Blank line
    Empty,
    /// Neither a command nor one of the visible options
    Unknown(String),
}

/// Parse a line against the options currently on screen
///
/// Options can be picked by 1-based position or by name (case-insensitive).
/// Keywords win over names.
pub fn parse_input(line: &str, options: &[String]) -> InputAction {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return InputAction::Empty;
    }

    let command = match trimmed.to_lowercase().as_str() {
        "start" | "s" | "play" => Some(GameCommand::Start),
        "pause" | "p" => Some(GameCommand::Pause),
        "resume" | "r" => Some(GameCommand::Resume),
        "retry" => Some(GameCommand::Retry),
        "quit" | "q" | "exit" => Some(GameCommand::Quit),
        "help" | "h" | "?" => return InputAction::Help,
        _ => None,
    };
    if let Some(command) = command {
        return InputAction::Command(command);
    }

    if let Ok(position) = trimmed.parse::<usize>() {
        return match position.checked_sub(1).and_then(|i| options.get(i)) {
            Some(name) => InputAction::Command(GameCommand::Guess(Guess::pick(name.clone()))),
            None => InputAction::Unknown(trimmed.to_string()),
        };
    }

    options
        .iter()
        .find(|name| name.eq_ignore_ascii_case(trimmed))
        .map(|name| InputAction::Command(GameCommand::Guess(Guess::pick(name.clone()))))
        .unwrap_or_else(|| InputAction::Unknown(trimmed.to_string()))
}
