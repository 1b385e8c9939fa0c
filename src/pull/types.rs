use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a single pull, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RarityOutcome {
    ThreeStar = 0,
    FourStar = 1,
    FiveStar = 2,
    FeaturedFiveStar = 3,
}

impl RarityOutcome {
    pub const ALL: [RarityOutcome; 4] = [
        RarityOutcome::ThreeStar,
        RarityOutcome::FourStar,
        RarityOutcome::FiveStar,
        RarityOutcome::FeaturedFiveStar,
    ];

    /// Display label shown to players.
    pub fn label(&self) -> &'static str {
        match self {
            RarityOutcome::ThreeStar => "3★",
            RarityOutcome::FourStar => "4★",
            RarityOutcome::FiveStar => "5★",
            RarityOutcome::FeaturedFiveStar => "up!5★",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_five_star(&self) -> bool {
        matches!(
            self,
            RarityOutcome::FiveStar | RarityOutcome::FeaturedFiveStar
        )
    }

    pub fn is_four_star_or_better(&self) -> bool {
        *self != RarityOutcome::ThreeStar
    }
}

impl fmt::Display for RarityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
