//! Infrastructure layer for creature-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod lookup;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGameConfig, FileLoggingConfig,
    FileLookupConfig, FileOutputConfig, FileStorageConfig,
};
pub use lookup::PokeApiLookup;
pub use storage::{InMemoryScoreStore, JsonFileScoreStore};
