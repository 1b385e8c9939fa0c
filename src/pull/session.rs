//! Interactive pull session: one pity state, one history, one RNG.

use super::history::SessionHistory;
use super::sampler::{pull, RandomSource};
use super::state::PullState;
use super::types::RarityOutcome;
use crate::core::config::PityConfig;
use crate::core::constants::MULTI_PULL_COUNT;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Bundles the state a front end threads through successive pulls.
///
/// The session owns its pieces outright; nothing here is shared across
/// sessions or with the estimator.
pub struct GachaSession<R: RandomSource = ChaCha8Rng> {
    config: PityConfig,
    state: PullState,
    history: SessionHistory,
    rng: R,
}

impl GachaSession<ChaCha8Rng> {
    pub fn new(config: PityConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    pub fn with_seed(config: PityConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> GachaSession<R> {
    pub fn with_rng(config: PityConfig, rng: R) -> Self {
        Self {
            config,
            state: PullState::new(),
            history: SessionHistory::new(),
            rng,
        }
    }

    pub fn single_pull(&mut self) -> RarityOutcome {
        let outcome = pull(&mut self.state, &self.config, &mut self.rng);
        self.history.record(outcome);
        outcome
    }

    pub fn multi_pull(&mut self, count: usize) -> Vec<RarityOutcome> {
        (0..count).map(|_| self.single_pull()).collect()
    }

    pub fn ten_pull(&mut self) -> Vec<RarityOutcome> {
        self.multi_pull(MULTI_PULL_COUNT)
    }

    /// Discard the history and start from zeroed pity counters.
    pub fn reset(&mut self) {
        self.history.reset();
        self.state.reset();
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn state(&self) -> &PullState {
        &self.state
    }

    pub fn config(&self) -> &PityConfig {
        &self.config
    }

    pub fn summary_text(&self) -> String {
        self.history.summary_text()
    }
}
