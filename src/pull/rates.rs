//! Pity rate curve and the closed-form quantities derived from it.
//!
//! The sampler never branches on pity thresholds itself: it asks
//! [`compute_rates`] for the unconditional distribution of the next pull and
//! makes a single categorical draw against it.

use super::state::PullState;
use crate::core::config::PityConfig;

/// Rarity tier chosen by the categorical draw, before the featured roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Three,
    Four,
    Five,
}

/// Unconditional probabilities of each tier for the next pull. Sums to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub three: f64,
    pub four: f64,
    pub five: f64,
}

impl Rates {
    /// Map a uniform roll in `[0, 1)` onto a tier.
    pub fn tier_for(&self, roll: f64) -> Tier {
        if roll < self.five {
            Tier::Five
        } else if roll < self.five + self.four {
            Tier::Four
        } else {
            Tier::Three
        }
    }
}

/// 5★ rate for the pull following `pulls_since_five_star` misses.
pub fn five_star_rate(pulls_since_five_star: u32, config: &PityConfig) -> f64 {
    let pull = pulls_since_five_star.saturating_add(1);
    if pull >= config.hard_pity_ceiling {
        return 1.0;
    }

    let mut rate = config.base_five_star_rate;
    let mut ramp_from = config.soft_pity_start;
    for step in &config.soft_pity_steps {
        if pull <= ramp_from {
            break;
        }
        let pulls_in_step = pull.min(step.through_pull).saturating_sub(ramp_from);
        rate += pulls_in_step as f64 * step.increment;
        ramp_from = step.through_pull;
    }

    rate.clamp(0.0, 1.0)
}

/// 4★ rate on a pull that did not produce a 5★.
pub fn four_star_rate(pulls_since_four_star: u32, config: &PityConfig) -> f64 {
    if pulls_since_four_star.saturating_add(1) >= config.four_star_pity {
        1.0
    } else {
        config.base_four_star_rate
    }
}

pub fn compute_rates(state: &PullState, config: &PityConfig) -> Rates {
    let five = five_star_rate(state.pulls_since_five_star, config);
    let four_given_miss = four_star_rate(state.pulls_since_four_star, config);
    let four = (1.0 - five) * four_given_miss;
    let three = (1.0 - five) * (1.0 - four_given_miss);
    Rates { three, four, five }
}

/// Probability that the first 5★ of a fresh cycle lands on pull `k`,
/// indexed by `k` (index 0 is always 0).
pub fn five_star_distribution(config: &PityConfig) -> Vec<f64> {
    let ceiling = config.hard_pity_ceiling as usize;
    let mut dist = vec![0.0; ceiling + 1];
    let mut survival = 1.0;

    for (k, slot) in dist.iter_mut().enumerate().skip(1) {
        let p = five_star_rate(k as u32 - 1, config);
        *slot = survival * p;
        survival *= 1.0 - p;
        if survival <= 0.0 {
            break;
        }
    }

    dist
}

pub fn expected_pulls_per_five_star(config: &PityConfig) -> f64 {
    five_star_distribution(config)
        .iter()
        .enumerate()
        .map(|(k, p)| k as f64 * p)
        .sum()
}

/// Probability of at least one 5★ within `pulls` pulls from a fresh state.
pub fn prob_five_star_within(config: &PityConfig, pulls: u32) -> f64 {
    five_star_distribution(config)
        .iter()
        .take(pulls as usize + 1)
        .sum::<f64>()
        .min(1.0)
}

/// Exact probability of at least `target` featured 5★ within `planned_pulls`
/// pulls from a fresh state.
///
/// Dynamic program over (featured still needed, lost-roll streak, pulls left).
/// Cost grows with `target * threshold * planned_pulls * ceiling`; targets
/// the planned pulls cannot reach return 0 without running it.
pub fn exact_featured_probability(config: &PityConfig, planned_pulls: u32, target: u32) -> f64 {
    if target == 0 {
        return 1.0;
    }

    let gaps = five_star_distribution(config);

    // Each featured 5★ needs at least the shortest possible gap
    let Some(shortest_gap) = gaps.iter().position(|&g| g > 0.0) else {
        return 0.0;
    };
    if target as usize > planned_pulls as usize / shortest_gap {
        return 0.0;
    }

    let pulls = planned_pulls as usize;
    let needed = target as usize;
    let streaks = config.featured_guarantee_threshold as usize + 1;

    // reach[k][s][n]: P(at least k featured within n pulls | fresh 5★ cycle, s lost rolls)
    let mut reach = vec![vec![vec![0.0; pulls + 1]; streaks]; needed + 1];
    for row in reach[0].iter_mut() {
        row.fill(1.0);
    }

    for n in 1..=pulls {
        for k in 1..=needed {
            for s in 0..streaks {
                let featured = if s + 1 >= streaks {
                    1.0
                } else {
                    config.featured_rate
                };

                let mut p = 0.0;
                for (gap, &g) in gaps.iter().enumerate().take(n + 1).skip(1) {
                    if g == 0.0 {
                        continue;
                    }
                    let rest = n - gap;
                    let mut next = featured * reach[k - 1][0][rest];
                    if featured < 1.0 {
                        next += (1.0 - featured) * reach[k][s + 1][rest];
                    }
                    p += g * next;
                }
                reach[k][s][n] = p.min(1.0);
            }
        }
    }

    reach[needed][0][pulls]
}
