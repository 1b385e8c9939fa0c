//! Monte Carlo estimator built on the pull sampler.
//!
//! Each trial is an independent session: fresh pity counters, its own
//! ChaCha8 stream seeded from the base seed and the trial index. Trials share
//! nothing, so the parallel path only has to sum per-worker tallies and gives
//! the same answer as the sequential path for a fixed seed.

use super::config::SimConfig;
use super::request::{SimulationRequest, SimulationResult, ValidatedRequest};
use crate::core::config::PityConfig;
use crate::error::Result;
use crate::pull::sampler::{draw, RandomSource};
use crate::pull::state::PullState;
use crate::pull::types::RarityOutcome;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Run the estimator for `request`.
pub fn estimate(
    request: &SimulationRequest,
    pity: &PityConfig,
    config: &SimConfig,
) -> Result<SimulationResult> {
    let plan = request.validate()?;
    pity.validate()?;

    if plan.target_featured_count > plan.planned_pulls {
        log::warn!(
            "target of {} featured cannot be reached in {} pulls",
            plan.target_featured_count,
            plan.planned_pulls
        );
    }

    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::debug!(
        "estimating {} pulls, target {}, {} trials, seed {}, parallel {}",
        plan.planned_pulls,
        plan.target_featured_count,
        plan.trial_count,
        base_seed,
        config.parallel
    );

    let (successes, featured_total) = if config.parallel {
        (0..plan.trial_count)
            .into_par_iter()
            .map(|trial| tally_trial(&plan, pity, base_seed, trial))
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
    } else {
        (0..plan.trial_count)
            .map(|trial| tally_trial(&plan, pity, base_seed, trial))
            .fold((0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
    };

    let result = SimulationResult::from_counts(successes, featured_total, plan.trial_count);

    if config.verbosity >= 1 {
        log::info!(
            "P(>= {} featured in {} pulls) ≈ {:.4} ± {:.4} ({} trials)",
            plan.target_featured_count,
            plan.planned_pulls,
            result.estimated_probability,
            result.ci_high - result.estimated_probability,
            plan.trial_count
        );
    }

    Ok(result)
}

/// Estimate with the standard banner and the default trial count.
pub fn estimate_probability(planned_pulls: i64, target_featured_count: i64) -> Result<f64> {
    estimate_probability_for(planned_pulls, target_featured_count, &PityConfig::standard())
}

/// Estimate on `pity` the way the interactive dialog does: default trial
/// count, no result logging.
pub fn estimate_probability_for(
    planned_pulls: i64,
    target_featured_count: i64,
    pity: &PityConfig,
) -> Result<f64> {
    let request = SimulationRequest::new(planned_pulls, target_featured_count);
    let result = estimate(&request, pity, &SimConfig::interactive())?;
    Ok(result.estimated_probability)
}

/// Simulate one session of `planned_pulls` pulls from a fresh state and
/// return how many featured 5★ it produced.
pub fn run_trial(planned_pulls: u32, pity: &PityConfig, rng: &mut impl RandomSource) -> u32 {
    let mut state = PullState::new();
    let mut featured = 0;

    for _ in 0..planned_pulls {
        if draw(&mut state, pity, rng) == RarityOutcome::FeaturedFiveStar {
            featured += 1;
        }
    }

    featured
}

/// RNG for trial `trial` of an estimate seeded with `base_seed`.
pub fn trial_rng(base_seed: u64, trial: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(trial as u64))
}

/// (success, featured count) for one trial.
fn tally_trial(
    plan: &ValidatedRequest,
    pity: &PityConfig,
    base_seed: u64,
    trial: u32,
) -> (u64, u64) {
    let mut rng = trial_rng(base_seed, trial);
    let featured = run_trial(plan.planned_pulls, pity, &mut rng);
    let success = featured >= plan.target_featured_count;

    log::trace!("trial {trial}: {featured} featured");

    (u64::from(success), u64::from(featured))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GachaError;
    use crate::pull::rates::exact_featured_probability;
    use crate::pull::sampler::ScriptedSource;

    #[test]
    fn test_trial_counts_featured_only() {
        // 5★ lost, 3★, then guaranteed featured
        let mut rng = ScriptedSource::new(vec![0.001, 0.9, 0.99, 0.001]);
        let featured = run_trial(3, &PityConfig::standard(), &mut rng);
        assert_eq!(featured, 1);
    }

    #[test]
    fn test_rejects_invalid_requests() {
        let pity = PityConfig::standard();
        let config = SimConfig::deterministic(1);

        let zero_pulls = estimate(&SimulationRequest::new(0, 1), &pity, &config);
        assert!(matches!(zero_pulls, Err(GachaError::InvalidArgument(_))));

        let negative_target = estimate(&SimulationRequest::new(90, -1), &pity, &config);
        assert!(matches!(negative_target, Err(GachaError::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_invalid_pity_config() {
        let pity = PityConfig {
            featured_rate: -0.1,
            ..PityConfig::standard()
        };
        let result = estimate(
            &SimulationRequest::new(10, 1).with_trials(10),
            &pity,
            &SimConfig::deterministic(1),
        );
        assert!(matches!(result, Err(GachaError::InvalidConfig(_))));
    }

    #[test]
    fn test_target_zero_always_succeeds() {
        let result = estimate(
            &SimulationRequest::new(5, 0).with_trials(500),
            &PityConfig::standard(),
            &SimConfig::deterministic(3),
        )
        .unwrap();
        assert_eq!(result.estimated_probability, 1.0);
        assert_eq!(result.successes, 500);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let request = SimulationRequest::new(120, 1).with_trials(2_000);
        let pity = PityConfig::standard();
        let a = estimate(&request, &pity, &SimConfig::deterministic(42)).unwrap();
        let b = estimate(&request, &pity, &SimConfig::deterministic(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let request = SimulationRequest::new(160, 2).with_trials(3_000);
        let pity = PityConfig::standard();
        let sequential = estimate(&request, &pity, &SimConfig::deterministic(7)).unwrap();
        let parallel = estimate(
            &request,
            &pity,
            &SimConfig {
                parallel: true,
                ..SimConfig::deterministic(7)
            },
        )
        .unwrap();
        assert_eq!(sequential.successes, parallel.successes);
        assert_eq!(sequential.mean_featured, parallel.mean_featured);
    }

    #[test]
    fn test_estimate_tracks_exact_probability() {
        let pity = PityConfig::standard();
        let request = SimulationRequest::new(100, 1).with_trials(20_000);
        let result = estimate(&request, &pity, &SimConfig::deterministic(2024)).unwrap();
        let exact = exact_featured_probability(&pity, 100, 1);

        // 4 standard errors is generous for 20k trials
        let tolerance = 4.0 * result.standard_error.max(0.001);
        assert!(
            (result.estimated_probability - exact).abs() < tolerance,
            "estimate {} vs exact {}",
            result.estimated_probability,
            exact
        );
    }

    #[test]
    fn test_trial_rng_streams_differ() {
        let mut a = trial_rng(10, 0);
        let mut b = trial_rng(10, 1);
        let first_a: u64 = a.gen();
        let first_b: u64 = b.gen();
        assert_ne!(first_a, first_b);
    }

    #[test]
    fn test_estimate_probability_for_uses_given_banner() {
        // Ceiling 5 guarantees a 5★ within 5 pulls, so the 50/50 dominates
        let p = estimate_probability_for(5, 1, &PityConfig::flat_ceiling(5)).unwrap();
        let exact = exact_featured_probability(&PityConfig::flat_ceiling(5), 5, 1);
        assert!((p - exact).abs() < 0.05, "estimate {p} vs exact {exact}");

        let standard = estimate_probability(5, 1).unwrap();
        assert!(standard < 0.1, "standard banner rarely hits in 5 pulls, got {standard}");
    }
}
