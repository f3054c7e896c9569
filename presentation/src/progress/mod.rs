//! Loading and countdown indicators

pub mod reporter;
