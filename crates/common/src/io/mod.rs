//! Terminal output.

mod macros;
pub mod shell;
pub mod style;
