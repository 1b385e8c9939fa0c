//! Estimate report generation.

use super::request::{SimulationRequest, SimulationResult};
use crate::core::config::PityConfig;
use crate::pull::rates::{exact_featured_probability, expected_pulls_per_five_star};
use serde::Serialize;

/// Everything the CLI prints about one estimate.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub request: SimulationRequest,
    pub result: SimulationResult,
    pub pity: PityConfig,
    pub seed: Option<u64>,
    pub exact_probability: Option<f64>,
    pub expected_pulls_per_five_star: f64,
}

impl EstimateReport {
    pub fn new(
        request: SimulationRequest,
        result: SimulationResult,
        pity: PityConfig,
        seed: Option<u64>,
    ) -> Self {
        let exact_probability = match (
            u32::try_from(request.planned_pulls),
            u32::try_from(request.target_featured_count),
        ) {
            (Ok(pulls), Ok(target)) => Some(exact_featured_probability(&pity, pulls, target)),
            _ => None,
        };
        let expected_pulls_per_five_star = expected_pulls_per_five_star(&pity);

        Self {
            request,
            result,
            pity,
            seed,
            exact_probability,
            expected_pulls_per_five_star,
        }
    }

    /// Gap between the estimate and the closed form, in standard errors.
    pub fn deviation_in_standard_errors(&self) -> Option<f64> {
        let exact = self.exact_probability?;
        if self.result.standard_error == 0.0 {
            return None;
        }
        Some((self.result.estimated_probability - exact).abs() / self.result.standard_error)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  PULL PROBABILITY REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Plan: {} pulls, target {} up!5★, {} trials\n",
            self.request.planned_pulls, self.request.target_featured_count, self.result.trial_count
        ));
        if let Some(seed) = self.seed {
            report.push_str(&format!("Seed: {}\n", seed));
        }
        report.push('\n');

        report.push_str("── ESTIMATE ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Probability:         {:.2}%\n",
            self.result.estimated_probability * 100.0
        ));
        report.push_str(&format!(
            "  95% interval:        {:.2}% – {:.2}%\n",
            self.result.ci_low * 100.0,
            self.result.ci_high * 100.0
        ));
        report.push_str(&format!(
            "  Successful trials:   {} / {}\n",
            self.result.successes, self.result.trial_count
        ));
        report.push_str(&format!(
            "  Avg up!5★ per plan:  {:.2}\n\n",
            self.result.mean_featured
        ));

        report.push_str("── CLOSED FORM ──────────────────────────────────────────────────\n");
        match self.exact_probability {
            Some(exact) => {
                report.push_str(&format!("  Exact probability:   {:.2}%\n", exact * 100.0));
            }
            None => report.push_str("  Exact probability:   n/a\n"),
        }
        report.push_str(&format!(
            "  Expected pulls/5★:   {:.1}\n\n",
            self.expected_pulls_per_five_star
        ));

        report.push_str("── BANNER ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  {}\n", self.pity.summary()));

        if let Some(deviation) = self.deviation_in_standard_errors() {
            if deviation > 4.0 {
                report.push_str(&format!(
                    "\n  ⚠️  Estimate is {:.1} standard errors from the closed form - too few trials?\n",
                    deviation
                ));
            }
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> EstimateReport {
        let request = SimulationRequest::new(90, 1).with_trials(1_000);
        let result = SimulationResult::from_counts(560, 610, 1_000);
        EstimateReport::new(request, result, PityConfig::flat_ceiling(90), Some(5))
    }

    #[test]
    fn test_report_generation() {
        let report = sample_report();
        let exact = report.exact_probability.unwrap();
        assert!(exact >= 0.5);
        assert!(report.expected_pulls_per_five_star > 0.0);

        let text = report.to_text();
        assert!(text.contains("Probability:         56.00%"));
        assert!(text.contains("Seed: 5"));
        assert!(text.contains("Expected pulls/5★"));
    }

    #[test]
    fn test_json_report_fields() {
        let json: serde_json::Value = serde_json::from_str(&sample_report().to_json()).unwrap();
        assert_eq!(json["request"]["planned_pulls"], 90);
        assert_eq!(json["result"]["successes"], 560);
        assert_eq!(json["pity"]["hard_pity_ceiling"], 90);
        assert_eq!(json["seed"], 5);
    }

    #[test]
    fn test_deviation_without_exact() {
        let request = SimulationRequest::new(-3, 1);
        let result = SimulationResult::from_counts(1, 1, 10);
        let report = EstimateReport::new(request, result, PityConfig::standard(), None);
        assert!(report.exact_probability.is_none());
        assert!(report.deviation_in_standard_errors().is_none());
    }
}
