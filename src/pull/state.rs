//! Pull-history counters consulted by the sampler.

use super::types::RarityOutcome;
use crate::core::config::PityConfig;
use serde::{Deserialize, Serialize};

/// Counters for one pull session.
///
/// Every field stays within `[0, hard_pity_ceiling]`: a pull either bumps a
/// counter by one, leaves it alone, or resets it to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullState {
    /// Pulls since the last 4★ or better
    pub pulls_since_four_star: u32,

    /// Pulls since the last 5★ of either kind
    pub pulls_since_five_star: u32,

    /// Plain 5★ results (lost featured rolls) since the last featured 5★.
    /// Only 5★-tier pulls move this counter.
    pub pulls_since_featured: u32,
}

impl PullState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the next 5★ is guaranteed to be featured.
    pub fn featured_guaranteed(&self, config: &PityConfig) -> bool {
        self.pulls_since_featured >= config.featured_guarantee_threshold
    }

    /// Apply the counter updates for a pull that produced `outcome`.
    pub fn record(&mut self, outcome: RarityOutcome, config: &PityConfig) {
        let ceiling = config.hard_pity_ceiling;
        let bump = |counter: u32| counter.saturating_add(1).min(ceiling);

        match outcome {
            RarityOutcome::FeaturedFiveStar => {
                self.pulls_since_five_star = 0;
                self.pulls_since_four_star = 0;
                self.pulls_since_featured = 0;
            }
            RarityOutcome::FiveStar => {
                self.pulls_since_five_star = 0;
                self.pulls_since_four_star = 0;
                self.pulls_since_featured = bump(self.pulls_since_featured);
            }
            RarityOutcome::FourStar => {
                self.pulls_since_four_star = 0;
                self.pulls_since_five_star = bump(self.pulls_since_five_star);
            }
            RarityOutcome::ThreeStar => {
                self.pulls_since_four_star = bump(self.pulls_since_four_star);
                self.pulls_since_five_star = bump(self.pulls_since_five_star);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_zeroed() {
        let state = PullState::new();
        assert_eq!(state.pulls_since_four_star, 0);
        assert_eq!(state.pulls_since_five_star, 0);
        assert_eq!(state.pulls_since_featured, 0);
    }

    #[test]
    fn test_three_star_bumps_both_pity_counters() {
        let config = PityConfig::standard();
        let mut state = PullState::new();
        state.record(RarityOutcome::ThreeStar, &config);
        state.record(RarityOutcome::ThreeStar, &config);
        assert_eq!(state.pulls_since_four_star, 2);
        assert_eq!(state.pulls_since_five_star, 2);
        assert_eq!(state.pulls_since_featured, 0);
    }

    #[test]
    fn test_four_star_resets_only_four_star_counter() {
        let config = PityConfig::standard();
        let mut state = PullState {
            pulls_since_four_star: 7,
            pulls_since_five_star: 40,
            pulls_since_featured: 1,
        };
        state.record(RarityOutcome::FourStar, &config);
        assert_eq!(state.pulls_since_four_star, 0);
        assert_eq!(state.pulls_since_five_star, 41);
        assert_eq!(state.pulls_since_featured, 1);
    }

    #[test]
    fn test_plain_five_star_counts_lost_featured_roll() {
        let config = PityConfig::standard();
        let mut state = PullState {
            pulls_since_four_star: 3,
            pulls_since_five_star: 60,
            pulls_since_featured: 0,
        };
        state.record(RarityOutcome::FiveStar, &config);
        assert_eq!(state.pulls_since_four_star, 0);
        assert_eq!(state.pulls_since_five_star, 0);
        assert_eq!(state.pulls_since_featured, 1);
        assert!(state.featured_guaranteed(&config));
    }

    #[test]
    fn test_featured_five_star_resets_everything() {
        let config = PityConfig::standard();
        let mut state = PullState {
            pulls_since_four_star: 5,
            pulls_since_five_star: 70,
            pulls_since_featured: 1,
        };
        state.record(RarityOutcome::FeaturedFiveStar, &config);
        assert_eq!(state, PullState::new());
    }

    #[test]
    fn test_counters_clamp_at_ceiling() {
        let config = PityConfig::flat_ceiling(5);
        let mut state = PullState::new();
        for _ in 0..20 {
            state.record(RarityOutcome::ThreeStar, &config);
        }
        assert_eq!(state.pulls_since_five_star, 5);
        assert_eq!(state.pulls_since_four_star, 5);
    }

    #[test]
    fn test_reset_zeroes_in_place() {
        let mut state = PullState {
            pulls_since_four_star: 4,
            pulls_since_five_star: 12,
            pulls_since_featured: 1,
        };
        state.reset();
        assert_eq!(state, PullState::default());
    }
}
