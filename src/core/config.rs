//! Pity configuration.

use super::constants::*;
use crate::error::{GachaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One segment of the soft-pity ramp.
///
/// Every pull number up to and including `through_pull` adds `increment`
/// to the 5★ rate, on top of whatever earlier segments already added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftPityStep {
    pub through_pull: u32,
    pub increment: f64,
}

/// Rates and thresholds driving the pull sampler.
///
/// Pull numbers are 1-based: the first pull after a 5★ is pull 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PityConfig {
    /// 5★ rate before soft pity kicks in
    pub base_five_star_rate: f64,

    /// Last pull number that uses the base rate
    pub soft_pity_start: u32,

    /// Escalation segments after `soft_pity_start`, ascending
    pub soft_pity_steps: Vec<SoftPityStep>,

    /// Pull number at which a 5★ is certain
    pub hard_pity_ceiling: u32,

    /// 4★ rate on pulls that are not 5★
    pub base_four_star_rate: f64,

    /// Pull number (since the last 4★ or better) that forces a 4★
    pub four_star_pity: u32,

    /// Chance that a non-guaranteed 5★ is the featured one
    pub featured_rate: f64,

    /// Lost featured rolls after which the next 5★ is always featured
    pub featured_guarantee_threshold: u32,
}

impl Default for PityConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl PityConfig {
    /// Standard banner: 0.8% base, soft pity from pull 66, hard pity at 79.
    pub fn standard() -> Self {
        Self {
            base_five_star_rate: BASE_FIVE_STAR_RATE,
            soft_pity_start: SOFT_PITY_START,
            soft_pity_steps: SOFT_PITY_STEPS
                .iter()
                .map(|&(through_pull, increment)| SoftPityStep {
                    through_pull,
                    increment,
                })
                .collect(),
            hard_pity_ceiling: HARD_PITY_CEILING,
            base_four_star_rate: BASE_FOUR_STAR_RATE,
            four_star_pity: FOUR_STAR_PITY,
            featured_rate: FEATURED_RATE,
            featured_guarantee_threshold: FEATURED_GUARANTEE_THRESHOLD,
        }
    }

    /// Flat base rate with a hard ceiling and no soft pity ramp.
    pub fn flat_ceiling(ceiling: u32) -> Self {
        Self {
            soft_pity_start: ceiling.saturating_sub(1),
            soft_pity_steps: Vec::new(),
            hard_pity_ceiling: ceiling,
            ..Self::standard()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        check_probability("base_five_star_rate", self.base_five_star_rate)?;
        check_probability("base_four_star_rate", self.base_four_star_rate)?;
        check_probability("featured_rate", self.featured_rate)?;

        if self.hard_pity_ceiling == 0 {
            return Err(invalid("hard_pity_ceiling must be at least 1".into()));
        }
        if self.soft_pity_start >= self.hard_pity_ceiling {
            return Err(invalid(format!(
                "soft_pity_start ({}) must be below hard_pity_ceiling ({})",
                self.soft_pity_start, self.hard_pity_ceiling
            )));
        }
        if self.four_star_pity == 0 {
            return Err(invalid("four_star_pity must be at least 1".into()));
        }
        if self.featured_guarantee_threshold > self.hard_pity_ceiling {
            return Err(invalid(format!(
                "featured_guarantee_threshold ({}) exceeds hard_pity_ceiling ({})",
                self.featured_guarantee_threshold, self.hard_pity_ceiling
            )));
        }

        let mut previous = self.soft_pity_start;
        for step in &self.soft_pity_steps {
            if step.through_pull <= previous {
                return Err(invalid(format!(
                    "soft pity step through pull {} must come after pull {}",
                    step.through_pull, previous
                )));
            }
            if step.through_pull > self.hard_pity_ceiling {
                return Err(invalid(format!(
                    "soft pity step through pull {} is past the hard ceiling {}",
                    step.through_pull, self.hard_pity_ceiling
                )));
            }
            if !step.increment.is_finite() || step.increment < 0.0 {
                return Err(invalid(format!(
                    "soft pity increment must be a non-negative number, got {}",
                    step.increment
                )));
            }
            previous = step.through_pull;
        }

        Ok(())
    }

    /// Single-line description used in reports and the UI footer.
    pub fn summary(&self) -> String {
        format!(
            "5★ {:.1}% (soft pity after {}, hard pity at {}), 4★ {:.1}% (pity {}), featured {:.0}% (guarantee after {} lost)",
            self.base_five_star_rate * 100.0,
            self.soft_pity_start,
            self.hard_pity_ceiling,
            self.base_four_star_rate * 100.0,
            self.four_star_pity,
            self.featured_rate * 100.0,
            self.featured_guarantee_threshold,
        )
    }
}

fn invalid(message: String) -> GachaError {
    GachaError::InvalidConfig(message)
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be within [0, 1], got {value}")))
    }
}
