//! Score store adapters
//!
//! [`JsonFileScoreStore`] is the durable default; [`InMemoryScoreStore`]
//! backs `--no-persist` sessions and tests.

mod json_file;
mod memory;

pub use json_file::JsonFileScoreStore;
pub use memory::InMemoryScoreStore;
