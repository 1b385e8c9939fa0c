//! Property tests for the pull engine across banner shapes and seeds.

use gacha::pull::{exact_featured_probability, pull_many};
use gacha::{draw, GachaSession, PityConfig, PullState, RarityOutcome};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn banner() -> impl Strategy<Value = PityConfig> {
    (1u32..=120, 1u32..=20, 0.0f64..=1.0, 0u32..=3, 0.0f64..=0.05).prop_map(
        |(ceiling, four_star_pity, featured_rate, threshold, base)| PityConfig {
            base_five_star_rate: base,
            four_star_pity,
            featured_rate,
            featured_guarantee_threshold: threshold.min(ceiling),
            ..PityConfig::flat_ceiling(ceiling)
        },
    )
}

proptest! {
    #[test]
    fn counters_stay_within_ceiling(config in banner(), seed in any::<u64>()) {
        prop_assert!(config.validate().is_ok());
        let ceiling = config.hard_pity_ceiling;
        let mut state = PullState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        for _ in 0..400 {
            draw(&mut state, &config, &mut rng);
            prop_assert!(state.pulls_since_four_star <= ceiling);
            prop_assert!(state.pulls_since_five_star <= ceiling);
            prop_assert!(state.pulls_since_featured <= ceiling);
        }
    }

    #[test]
    fn five_star_within_every_ceiling_window(config in banner(), seed in any::<u64>()) {
        let ceiling = config.hard_pity_ceiling as usize;
        let mut state = PullState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcomes = pull_many(&mut state, &config, &mut rng, 4 * ceiling);

        for window in outcomes.windows(ceiling) {
            prop_assert!(window.iter().any(|o| o.is_five_star()));
        }
    }

    #[test]
    fn lost_rolls_never_exceed_threshold(config in banner(), seed in any::<u64>()) {
        let threshold = config.featured_guarantee_threshold;
        let mut state = PullState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut lost_in_a_row = 0;
        for _ in 0..600 {
            match draw(&mut state, &config, &mut rng) {
                RarityOutcome::FiveStar => {
                    lost_in_a_row += 1;
                    prop_assert!(
                        lost_in_a_row <= threshold,
                        "{} lost rolls in a row with threshold {}",
                        lost_in_a_row,
                        threshold
                    );
                }
                RarityOutcome::FeaturedFiveStar => lost_in_a_row = 0,
                _ => {}
            }
        }
    }

    #[test]
    fn session_history_matches_pull_count(seed in any::<u64>(), pulls in 0usize..300) {
        let mut session = GachaSession::with_seed(PityConfig::standard(), seed);
        session.multi_pull(pulls);
        prop_assert_eq!(session.history().total_pulls(), pulls as u64);

        session.reset();
        prop_assert_eq!(session.history().total_pulls(), 0);
        prop_assert_eq!(*session.state(), PullState::new());
    }

    #[test]
    fn exact_probability_is_monotone_in_pulls(pulls in 1u32..200, target in 0u32..4) {
        let config = PityConfig::standard();
        let fewer = exact_featured_probability(&config, pulls, target);
        let more = exact_featured_probability(&config, pulls + 1, target);
        prop_assert!((0.0..=1.0).contains(&fewer));
        prop_assert!(more + 1e-12 >= fewer);
    }
}
