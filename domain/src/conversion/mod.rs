//! Unit conversion
//!
//! Three independent unit families, each converted through a base unit with
//! a static table. Everything here is pure: invalid input produces an empty
//! result rather than an error.

pub mod category;
pub mod engine;
pub mod panel;

pub use category::UnitCategory;
pub use engine::{ConversionRequest, convert, parse_value};
pub use panel::ConversionPanel;
