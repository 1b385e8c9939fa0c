//! Pull plan simulator CLI.
//!
//! Run Monte Carlo estimates of reaching a featured 5★ target.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 90 pulls, 1 up!5★
//!   cargo run --bin simulate -- -n 160 -t 2        # 160 pulls, 2 up!5★
//!   cargo run --bin simulate -- --seed 42          # Reproducible run
//!   cargo run --bin simulate -- --curve 200        # Probability by planned pulls

use clap::Parser;
use gacha::simulator::{
    curve_text, estimate, probability_curve, EstimateReport, SimConfig, SimulationRequest,
};
use gacha::{GachaError, PityConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "simulate", version, about = "Estimate featured 5★ odds for a pull plan")]
struct Args {
    /// Planned number of pulls
    #[arg(short = 'n', long = "pulls", default_value_t = 90, allow_negative_numbers = true)]
    pulls: i64,

    /// Featured 5★ (up!5★) count to reach
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    target: i64,

    /// Monte Carlo trials
    #[arg(short = 'r', long, default_value_t = gacha::core::DEFAULT_TRIAL_COUNT)]
    trials: u32,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run trials on a single thread
    #[arg(long)]
    sequential: bool,

    /// Pity config as JSON (missing fields use the standard banner)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also sweep planned pulls up to this many
    #[arg(long, value_name = "MAX_PULLS")]
    curve: Option<u32>,

    /// Step between curve points
    #[arg(long, default_value_t = 10)]
    curve_step: u32,

    /// Save a JSON report next to the working directory
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(if e.is_invalid_argument() { 2 } else { 1 });
    }
}

fn run(args: &Args) -> Result<(), GachaError> {
    let pity = match &args.config {
        Some(path) => PityConfig::from_json_file(path)?,
        None => PityConfig::standard(),
    };
    let config = SimConfig {
        trial_count: args.trials,
        seed: args.seed,
        parallel: !args.sequential,
        verbosity: if args.verbose { 2 } else { 0 },
    };
    let request = SimulationRequest::new(args.pulls, args.target).with_trials(args.trials);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              GACHA PULL PLAN SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Planned Pulls:  {}", request.planned_pulls);
    println!("  Target up!5★:   {}", request.target_featured_count);
    println!("  Trials:         {}", request.trial_count);
    println!("  Threads:        {}", if config.parallel { "all" } else { "1" });
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!("  Banner:         {}", pity.summary());
    println!();
    println!("Running simulation...");
    println!();

    let result = estimate(&request, &pity, &config)?;
    let report = EstimateReport::new(request, result, pity.clone(), config.seed);

    println!("{}", report.to_text());

    if let Some(max_pulls) = args.curve {
        let target = u32::try_from(args.target).map_err(|_| {
            GachaError::InvalidArgument(format!("target must not be negative, got {}", args.target))
        })?;
        let points = probability_curve(target, max_pulls, args.curve_step, &pity, &config)?;
        println!("{}", curve_text(&points, target));
    }

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
