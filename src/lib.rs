//! Gacha - pity-aware pull simulator library
//!
//! Exposes the pull engine (sampler, pity counters, session history) and the
//! Monte Carlo estimator for the terminal front end, the batch CLI and tests.

pub mod core;
pub mod error;
pub mod pull;
pub mod simulator;

pub use crate::core::{PityConfig, SoftPityStep};
pub use error::{GachaError, Result};
pub use pull::{
    draw, pull, GachaSession, PullState, RandomSource, RarityOutcome, ScriptedSource,
    SessionHistory,
};
pub use simulator::{estimate, estimate_probability, SimConfig, SimulationRequest, SimulationResult};
