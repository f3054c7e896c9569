//! Creature lookup adapters

mod pokeapi;
mod record;

pub use pokeapi::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, PokeApiLookup};
