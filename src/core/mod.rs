//! Tunable constants and the pity configuration built from them.

pub mod config;
pub mod constants;

pub use config::*;
pub use constants::*;
