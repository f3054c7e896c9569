//! Interactive game surface

pub mod input;
pub mod repl;
