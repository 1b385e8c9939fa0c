//! Estimator input and output.

use crate::core::constants::{CONFIDENCE_Z_95, DEFAULT_TRIAL_COUNT};
use crate::error::{GachaError, Result};
use serde::{Deserialize, Serialize};

/// What to estimate: P(at least `target_featured_count` featured 5★ in
/// `planned_pulls` pulls).
///
/// Counts are signed so that raw user input can be carried here and rejected
/// by [`SimulationRequest::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub planned_pulls: i64,
    pub target_featured_count: i64,
    pub trial_count: u32,
}

/// A request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub planned_pulls: u32,
    pub target_featured_count: u32,
    pub trial_count: u32,
}

impl SimulationRequest {
    pub fn new(planned_pulls: i64, target_featured_count: i64) -> Self {
        Self {
            planned_pulls,
            target_featured_count,
            trial_count: DEFAULT_TRIAL_COUNT,
        }
    }

    pub fn with_trials(mut self, trial_count: u32) -> Self {
        self.trial_count = trial_count;
        self
    }

    pub fn validate(&self) -> Result<ValidatedRequest> {
        if self.planned_pulls <= 0 {
            return Err(GachaError::InvalidArgument(format!(
                "planned pulls must be positive, got {}",
                self.planned_pulls
            )));
        }
        if self.target_featured_count < 0 {
            return Err(GachaError::InvalidArgument(format!(
                "target featured count must not be negative, got {}",
                self.target_featured_count
            )));
        }
        if self.trial_count == 0 {
            return Err(GachaError::InvalidArgument(
                "trial count must be positive".to_string(),
            ));
        }

        let planned_pulls = u32::try_from(self.planned_pulls).map_err(|_| {
            GachaError::InvalidArgument(format!(
                "planned pulls too large: {}",
                self.planned_pulls
            ))
        })?;
        let target_featured_count = u32::try_from(self.target_featured_count).map_err(|_| {
            GachaError::InvalidArgument(format!(
                "target featured count too large: {}",
                self.target_featured_count
            ))
        })?;

        Ok(ValidatedRequest {
            planned_pulls,
            target_featured_count,
            trial_count: self.trial_count,
        })
    }
}

/// Outcome of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// successes / trial_count, in [0, 1]
    pub estimated_probability: f64,
    pub successes: u64,
    pub trial_count: u32,
    pub standard_error: f64,
    /// 95% normal-approximation interval, clamped to [0, 1]
    pub ci_low: f64,
    pub ci_high: f64,
    /// Average featured 5★ count per trial
    pub mean_featured: f64,
}

impl SimulationResult {
    pub fn from_counts(successes: u64, featured_total: u64, trial_count: u32) -> Self {
        let trials = trial_count.max(1) as f64;
        let p = successes as f64 / trials;
        let standard_error = (p * (1.0 - p) / trials).sqrt();
        let margin = CONFIDENCE_Z_95 * standard_error;

        Self {
            estimated_probability: p,
            successes,
            trial_count,
            standard_error,
            ci_low: (p - margin).max(0.0),
            ci_high: (p + margin).min(1.0),
            mean_featured: featured_total as f64 / trials,
        }
    }

    /// Whether `p` lies inside the 95% interval.
    pub fn is_consistent_with(&self, p: f64) -> bool {
        (self.ci_low..=self.ci_high).contains(&p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_planned_pulls() {
        let err = SimulationRequest::new(0, 1).validate().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_rejects_negative_target() {
        let err = SimulationRequest::new(90, -1).validate().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_rejects_zero_trials() {
        let err = SimulationRequest::new(90, 1)
            .with_trials(0)
            .validate()
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_rejects_oversized_pulls() {
        assert!(SimulationRequest::new(i64::from(u32::MAX) + 1, 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_zero_target_is_valid() {
        let valid = SimulationRequest::new(10, 0).validate().unwrap();
        assert_eq!(valid.target_featured_count, 0);
        assert_eq!(valid.trial_count, DEFAULT_TRIAL_COUNT);
    }

    #[test]
    fn test_result_from_counts() {
        let result = SimulationResult::from_counts(2_500, 3_000, 10_000);
        assert!((result.estimated_probability - 0.25).abs() < f64::EPSILON);
        assert!((result.mean_featured - 0.3).abs() < f64::EPSILON);
        // sqrt(0.25 * 0.75 / 10000) ≈ 0.00433
        assert!((result.standard_error - 0.004330).abs() < 1e-5);
        assert!(result.ci_low < 0.25 && result.ci_high > 0.25);
        assert!(result.is_consistent_with(0.252));
        assert!(!result.is_consistent_with(0.3));
    }

    #[test]
    fn test_certain_result_has_degenerate_interval() {
        let result = SimulationResult::from_counts(100, 100, 100);
        assert_eq!(result.estimated_probability, 1.0);
        assert_eq!(result.ci_high, 1.0);
        assert_eq!(result.ci_low, 1.0);
    }
}
