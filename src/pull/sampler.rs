//! Single-pull sampler.

use super::rates::{compute_rates, Tier};
use super::state::PullState;
use super::types::RarityOutcome;
use crate::core::config::PityConfig;
use rand::Rng;

/// Source of uniform samples in `[0, 1)`.
///
/// Every `rand::Rng` is a source; tests can also script exact rolls with
/// [`ScriptedSource`].
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of rolls, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    rolls: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(rolls: Vec<f64>) -> Self {
        Self { rolls, next: 0 }
    }

    /// Number of rolls handed out so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let roll = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        roll
    }
}

/// Draw one outcome and advance `state`.
///
/// Consumes one roll for the rarity tier and, on a 5★ that is not
/// guaranteed featured, a second roll for the featured check.
pub fn draw(
    state: &mut PullState,
    config: &PityConfig,
    rng: &mut impl RandomSource,
) -> RarityOutcome {
    let rates = compute_rates(state, config);

    let outcome = match rates.tier_for(rng.next_unit()) {
        Tier::Five => {
            if state.featured_guaranteed(config) || rng.next_unit() < config.featured_rate {
                RarityOutcome::FeaturedFiveStar
            } else {
                RarityOutcome::FiveStar
            }
        }
        Tier::Four => RarityOutcome::FourStar,
        Tier::Three => RarityOutcome::ThreeStar,
    };

    state.record(outcome, config);
    outcome
}

/// Front-end name for [`draw`].
pub fn pull(
    state: &mut PullState,
    config: &PityConfig,
    rng: &mut impl RandomSource,
) -> RarityOutcome {
    draw(state, config, rng)
}

/// Draw `count` outcomes in sequence.
pub fn pull_many(
    state: &mut PullState,
    config: &PityConfig,
    rng: &mut impl RandomSource,
    count: usize,
) -> Vec<RarityOutcome> {
    (0..count).map(|_| draw(state, config, rng)).collect()
}
