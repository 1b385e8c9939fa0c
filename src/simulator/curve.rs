//! Probability curve: how the estimate grows with the number of planned pulls.

use super::config::SimConfig;
use super::request::SimulationRequest;
use super::runner::estimate;
use crate::core::config::PityConfig;
use crate::error::{GachaError, Result};
use crate::pull::rates::exact_featured_probability;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub planned_pulls: u32,
    pub estimated: f64,
    pub exact: f64,
}

/// Estimate P(at least `target` featured) at `step`, `2 * step`, … up to
/// `max_pulls`.
pub fn probability_curve(
    target: u32,
    max_pulls: u32,
    step: u32,
    pity: &PityConfig,
    config: &SimConfig,
) -> Result<Vec<CurvePoint>> {
    if step == 0 {
        return Err(GachaError::InvalidArgument(
            "curve step must be positive".to_string(),
        ));
    }
    if max_pulls < step {
        return Err(GachaError::InvalidArgument(format!(
            "max pulls ({max_pulls}) must be at least the step ({step})"
        )));
    }

    let mut points = Vec::new();
    for planned_pulls in (step..=max_pulls).step_by(step as usize) {
        let request = SimulationRequest::new(i64::from(planned_pulls), i64::from(target))
            .with_trials(config.trial_count);
        let result = estimate(&request, pity, config)?;
        points.push(CurvePoint {
            planned_pulls,
            estimated: result.estimated_probability,
            exact: exact_featured_probability(pity, planned_pulls, target),
        });
    }

    Ok(points)
}

/// Bar chart of a curve, one line per point.
pub fn curve_text(points: &[CurvePoint], target: u32) -> String {
    let mut text = String::new();

    text.push_str(&format!(
        "── P(≥ {} up!5★) BY PLANNED PULLS ───────────────────────────────\n",
        target
    ));
    text.push_str("  Pulls   Estimate   Exact\n");
    text.push_str("  ─────   ────────   ──────\n");

    for point in points {
        let bar_len = (point.estimated * 40.0).round() as usize;
        let bar: String = "█".repeat(bar_len);
        text.push_str(&format!(
            "  {:>5}   {:>7.2}%   {:>5.1}%  {}\n",
            point.planned_pulls,
            point.estimated * 100.0,
            point.exact * 100.0,
            bar
        ));
    }

    text
}
