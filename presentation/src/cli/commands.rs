//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use quiz_domain::UnitCategory;
use std::path::PathBuf;

/// Unit family selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// USD, EUR, JPY, GBP, CAD (indicative rates)
    Currency,
    /// Celsius, Fahrenheit, Kelvin
    #[value(alias = "temp")]
    Temperature,
    /// Meters, Kilometers, Miles, Feet
    Length,
}

impl From<CategoryArg> for UnitCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Currency => UnitCategory::Currency,
            CategoryArg::Temperature => UnitCategory::Temperature,
            CategoryArg::Length => UnitCategory::Length,
        }
    }
}

/// Subcommands; `play` runs when none is given
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Play the timed creature guessing game
    Play,

    /// Convert a value between two units of one family
    Convert {
        /// Value to convert (non-numeric input gives an empty result)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit family
        #[arg(short, long, value_enum, default_value = "currency")]
        category: CategoryArg,

        /// Source unit (defaults to the family's usual source)
        #[arg(short, long, value_name = "UNIT")]
        from: Option<String>,

        /// Target unit (defaults to the family's usual target)
        #[arg(short, long, value_name = "UNIT")]
        to: Option<String>,
    },

    /// List the units of every family (or of one)
    Units {
        #[arg(value_enum)]
        category: Option<CategoryArg>,
    },
}

/// CLI arguments for creature-quiz
#[derive(Parser, Debug)]
#[command(name = "creature-quiz")]
#[command(author, version, about = "Timed creature guessing game with a unit converter")]
#[command(long_about = r#"
Creature Quiz shows a creature's artwork and four names. Pick the right one
before the clock runs out. Fast answers score more; wrong answers and
timeouts cost a life.

Configuration files are loaded from (in priority order):
1. CREATURE_QUIZ_* environment variables
2. --config <path>             Explicit config file
3. ./creature-quiz.toml        Project-level config
4. ~/.config/creature-quiz/config.toml   Global config

Example:
  creature-quiz
  creature-quiz play --seed 42 --no-persist
  creature-quiz convert 100 --category temperature --from Celsius --to Kelvin
  creature-quiz units length
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Keep the high score in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Seed the round generator for a reproducible game
    #[arg(long, value_name = "SEED", global = true)]
    pub seed: Option<u64>,
}

impl Cli {
    /// The subcommand to run, `play` when none was given
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
