use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of a tier and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBand {
    pub min_score: u8,
    pub label: String,
}

impl TierBand {
    pub fn new(min_score: u8, label: impl Into<String>) -> Self {
        Self {
            min_score,
            label: label.into(),
        }
    }
}

/// Tunables for tiering and recommendation selection.
///
/// `tiers` must be ordered by ascending `min_score`; the first band is used for
/// any score below every threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub tiers: Vec<TierBand>,
    pub weakest_count: usize,
    pub recommendation_cap: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                TierBand::new(0, "High Automation Potential"),
                TierBand::new(40, "Big Wins Available"),
                TierBand::new(60, "Ready to Layer Automations"),
                TierBand::new(80, "Already Running Smoothly"),
            ],
            weakest_count: 3,
            recommendation_cap: 5,
        }
    }
}

impl ScoringConfig {
    pub fn tier_for(&self, overall_score: u8) -> &str {
        self.tiers
            .iter()
            .rev()
            .find(|band| overall_score >= band.min_score)
            .or_else(|| self.tiers.first())
            .map(|band| band.label.as_str())
            .unwrap_or_default()
    }

    /// Label of the highest band.
    pub fn top_tier(&self) -> &str {
        self.tiers
            .last()
            .map(|band| band.label.as_str())
            .unwrap_or_default()
    }
}
