//! Console output formatter for the game and the converter

use colored::Colorize;
use quiz_application::{GameEvent, RevealView, RoundView};
use quiz_domain::{ConversionPanel, NextStep, OptionStatus, UnitCategory};

/// Lives shown as individual hearts before switching to a count
const MAX_HEARTS: u32 = 10;

/// Formats game events and conversions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an event, or `None` for events the indicators handle
    pub fn format_event(event: &GameEvent) -> Option<String> {
        match event {
            GameEvent::Welcome {
                high_score,
                initial_lives,
            } => Some(Self::welcome(*high_score, *initial_lives)),
            GameEvent::Loading | GameEvent::Tick { .. } => None,
            GameEvent::RoundReady(view) => Some(Self::round(view)),
            GameEvent::GuessResolved(reveal) => Some(Self::reveal(reveal)),
            GameEvent::RoundFailed { error } => Some(Self::round_failed(error)),
            GameEvent::Paused { time_remaining } => Some(format!(
                "{} {}s left. Type {} to continue.",
                "Paused.".yellow().bold(),
                time_remaining,
                "resume".bold()
            )),
            GameEvent::Resumed { time_remaining } => {
                Some(format!("{} {}s left.", "Resumed.".green(), time_remaining))
            }
            GameEvent::GameOver {
                score,
                high_score,
                new_record,
            } => Some(Self::game_over(*score, *high_score, *new_record)),
            GameEvent::Stopped => Some("Bye!".to_string()),
        }
    }

    pub fn welcome(high_score: u32, initial_lives: u32) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Creature Quiz"));
        output.push_str("\n\n");
        output.push_str("Name the creature from its artwork before the clock runs out.\n");
        output.push_str(&format!(
            "You have {} lives. Faster answers score more.\n\n",
            initial_lives
        ));
        output.push_str(&format!("{} {}\n\n", "High score:".cyan().bold(), high_score));
        output.push_str(&format!("Type {} to begin, {} for commands.", "start".bold(), "help".bold()));
        output
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  start, s        - Start a new game\n");
        output.push_str("  1-4 or a name   - Answer the current round\n");
        output.push_str("  pause, p        - Pause the clock\n");
        output.push_str("  resume, r       - Resume a paused round\n");
        output.push_str("  retry           - Reload a round that failed to load\n");
        output.push_str("  help, h, ?      - Show this help\n");
        output.push_str("  quit, q         - Exit");
        output
    }

    pub fn round(view: &RoundView) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header(&format!("Round {}", view.round_number)));
        output.push_str(&format!(
            "{} {}   {} {}\n",
            "Score:".cyan().bold(),
            view.score,
            "Lives:".cyan().bold(),
            Self::lives(view.lives)
        ));
        output.push_str(&format!("{} {}\n\n", "Who's that?".bold(), view.image_url.underline()));

        for (i, name) in view.options.iter().enumerate() {
            output.push_str(&format!("  {} {}\n", format!("[{}]", i + 1).yellow(), name));
        }
        output.push_str(&format!("\n{}s on the clock.", view.time_remaining));
        output
    }

    pub fn reveal(reveal: &RevealView) -> String {
        let outcome = &reveal.outcome;
        let mut output = String::new();

        let verdict = if outcome.correct {
            format!("{} +{} points", "Correct!".green().bold(), outcome.points)
        } else if outcome.timed_out() {
            format!("{} It was {}.", "Time's up!".red().bold(), outcome.answer.name().bold())
        } else {
            format!("{} It was {}.", "Wrong!".red().bold(), outcome.answer.name().bold())
        };
        output.push_str(&verdict);
        output.push_str("\n\n");

        for (i, (name, status)) in reveal.options.iter().enumerate() {
            output.push_str(&format!("  [{}] {}\n", i + 1, Self::option(name, *status)));
        }

        output.push_str(&format!(
            "\n{} {}   {} {}",
            "Score:".cyan().bold(),
            outcome.score,
            "Lives:".cyan().bold(),
            Self::lives(outcome.lives)
        ));

        if outcome.next == NextStep::NextRound {
            output.push_str(&format!("\n{}", "Next round coming up...".dimmed()));
        }
        output
    }

    pub fn round_failed(error: &str) -> String {
        format!(
            "{} {}\nType {} to try again.",
            "Could not load a round:".red().bold(),
            error,
            "retry".bold()
        )
    }

    pub fn game_over(score: u32, high_score: u32, new_record: bool) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Game Over"));
        output.push_str(&format!("\n\n{} {}\n", "Final score:".cyan().bold(), score));
        if new_record {
            output.push_str(&format!("{}\n", "New high score!".green().bold()));
        } else {
            output.push_str(&format!("{} {}\n", "High score:".cyan().bold(), high_score));
        }
        output.push_str(&format!("\nType {} to play again or {} to exit.", "start".bold(), "quit".bold()));
        output
    }

    /// `1 USD = 0.92 EUR`, or a hint when the input is not a number
    pub fn conversion(panel: &ConversionPanel) -> String {
        let result = panel.output();
        let mut output = if result.is_empty() {
            format!(
                "{} '{}' is not a number",
                "Invalid input:".red().bold(),
                panel.input().trim()
            )
        } else {
            format!(
                "{} {} = {} {}",
                panel.input().trim(),
                panel.from_unit(),
                result.green().bold(),
                panel.to_unit()
            )
        };

        if let Some(notice) = panel.category().notice() {
            output.push_str(&format!("\n{}", notice.dimmed()));
        }
        output
    }

    /// Unit lists, one family per line
    pub fn units(categories: &[UnitCategory]) -> String {
        categories
            .iter()
            .map(|category| {
                let (from, to) = category.default_pair();
                format!(
                    "{:<12} {}  {}",
                    format!("{}:", category).cyan().bold(),
                    category.units().join(", "),
                    format!("(default {} -> {})", from, to).dimmed()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn option(name: &str, status: OptionStatus) -> String {
        match status {
            OptionStatus::Neutral => name.to_string(),
            OptionStatus::Correct => format!("{} {}", name.green().bold(), "<- answer".green()),
            OptionStatus::WrongSelection => format!("{} {}", name.red().strikethrough(), "<- your pick".red()),
            OptionStatus::Dimmed => name.dimmed().to_string(),
        }
    }

    /// One heart per life, or a count once the row would get too long
    fn lives(lives: u32) -> String {
        if lives > MAX_HEARTS {
            format!("♥ x{}", lives).red().to_string()
        } else {
            "♥".repeat(lives as usize).red().to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(44);
        format!("{}\n{:^44}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(30))
    }
}
