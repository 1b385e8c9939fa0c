use super::types::RarityOutcome;
use serde::{Deserialize, Serialize};

/// Running tally of pull outcomes for an interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHistory {
    counts: [u64; 4],
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: RarityOutcome) {
        self.counts[outcome.index()] += 1;
    }

    pub fn record_all(&mut self, outcomes: &[RarityOutcome]) {
        for outcome in outcomes {
            self.record(*outcome);
        }
    }

    pub fn count(&self, outcome: RarityOutcome) -> u64 {
        self.counts[outcome.index()]
    }

    pub fn total_pulls(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// All 5★ results, featured or not.
    pub fn five_star_total(&self) -> u64 {
        self.count(RarityOutcome::FiveStar) + self.count(RarityOutcome::FeaturedFiveStar)
    }

    /// Observed share of `outcome` among all pulls (0 when empty).
    pub fn share(&self, outcome: RarityOutcome) -> f64 {
        let total = self.total_pulls();
        if total == 0 {
            0.0
        } else {
            self.count(outcome) as f64 / total as f64
        }
    }

    pub fn reset(&mut self) {
        self.counts = [0; 4];
    }

    /// Multi-line summary: total pulls then one line per rarity.
    pub fn summary_text(&self) -> String {
        let mut text = format!("Total Pulls: {}\n", self.total_pulls());
        for outcome in RarityOutcome::ALL {
            text.push_str(&format!("{}: {}\n", outcome.label(), self.count(outcome)));
        }
        text
    }
}
