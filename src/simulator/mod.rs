//! Monte Carlo estimation of pull plans.
//!
//! Runs thousands of independent simulated sessions to answer "how likely
//! am I to get N featured 5★ within P pulls":
//! - single estimates with a 95% interval
//! - probability curves over a range of planned pulls
//! - text and JSON reports, cross-checked against the closed form
//!
//! Every trial goes through the same sampler the interactive session uses
//! (src/pull/sampler.rs), so estimates match real pulls.

mod config;
mod curve;
mod report;
mod request;
mod runner;

pub use config::SimConfig;
pub use curve::{curve_text, probability_curve, CurvePoint};
pub use report::EstimateReport;
pub use request::{SimulationRequest, SimulationResult, ValidatedRequest};
pub use runner::{estimate, estimate_probability, estimate_probability_for, run_trial, trial_rng};
