// 5★ pity curve
pub const BASE_FIVE_STAR_RATE: f64 = 0.008;
pub const SOFT_PITY_START: u32 = 65; // last pull number at the base rate
pub const HARD_PITY_CEILING: u32 = 79; // pull number that always yields a 5★

// Soft pity escalation: (through pull number, rate added per pull)
// Increments accumulate: pull 70 is base + 5 * 0.04, pull 75 adds 5 * 0.08 on top.
pub const SOFT_PITY_STEPS: [(u32, f64); 3] = [
    (70, 0.04), // pulls 66-70
    (75, 0.08), // pulls 71-75
    (78, 0.10), // pulls 76-78
];

// 4★
pub const BASE_FOUR_STAR_RATE: f64 = 0.085;
pub const FOUR_STAR_PITY: u32 = 10; // every 10th pull without a 4★ or better is a forced 4★

// Featured (rate-up) 5★
pub const FEATURED_RATE: f64 = 0.5;
pub const FEATURED_GUARANTEE_THRESHOLD: u32 = 1; // lost 50/50s before the next 5★ is forced featured

// Session and estimation
pub const MULTI_PULL_COUNT: usize = 10;
pub const DEFAULT_TRIAL_COUNT: u32 = 10_000;
pub const CONFIDENCE_Z_95: f64 = 1.96;
