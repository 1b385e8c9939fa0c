//! Estimator configuration.

use crate::core::constants::DEFAULT_TRIAL_COUNT;

/// How the Monte Carlo estimator runs its trials.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Trials used when a request is built from UI input
    pub trial_count: u32,

    /// Base seed for reproducibility (None = fresh entropy per estimate).
    /// Trial `i` is seeded with `seed + i`.
    pub seed: Option<u64>,

    /// Spread trials across the rayon thread pool
    pub parallel: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trial_count: DEFAULT_TRIAL_COUNT,
            seed: None,
            parallel: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Default trial count with result logging off, for callers that own
    /// the terminal
    pub fn interactive() -> Self {
        Self {
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Fixed seed, single thread, no logging
    pub fn deterministic(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            parallel: false,
            verbosity: 0,
            ..Default::default()
        }
    }
}
