//! Common utilities shared by the marketplace crates.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod errors;
pub mod io;

pub use io::shell::{self, ColorChoice, Shell, Verbosity};
