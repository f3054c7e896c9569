//! Configuration file loading for creature-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `CREATURE_QUIZ_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./creature-quiz.toml` or `./.creature-quiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/creature-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGameConfig, FileLoggingConfig, FileLookupConfig,
    FileOutputConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
