mod config;
mod recommendations;

pub use config::{ScoringConfig, TierBand};
pub use recommendations::{templates_for, weakest_sections};

use super::catalog::Section;
use super::domain::{normalize_code, RawAnswers, ScoreReport, SectionScore};
use recommendations::{build_quick_wins, build_recommendations};
use serde::{Deserialize, Serialize};

/// Points and percentage for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTally {
    pub raw: u32,
    pub max: u32,
    pub score: u8,
}

/// Scores a section's codes. Each answer is worth `3 - code` points, so the
/// most manual answer carries the most automation opportunity.
pub fn compute_section_score(codes: &[u8]) -> SectionTally {
    let max = codes.len() as u32 * 3;
    let raw = codes
        .iter()
        .map(|code| 3 - u32::from(normalize_code(i64::from(*code))))
        .sum();

    SectionTally {
        raw,
        max,
        score: percentage(raw, max),
    }
}

/// `round(raw / max * 100)` with halves rounded up, computed on integers.
fn percentage(raw: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let raw = u64::from(raw.min(max));
    let max = u64::from(max);
    ((raw * 200 + max) / (max * 2)) as u8
}

/// Stateless scorer shared by every request.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, answers: &RawAnswers) -> ScoreReport {
        let mut total_raw = 0u32;
        let mut total_max = 0u32;
        let mut sections = Vec::with_capacity(answers.len());

        // Canonical sections first, then unrecognised keys in key order.
        let mut entries: Vec<(&str, &str, &[u8])> = Vec::with_capacity(answers.len());
        for section in Section::ALL {
            if let Some(codes) = answers.section(section.key()) {
                entries.push((section.key(), section.label(), codes));
            }
        }
        for (key, codes) in answers.iter() {
            if Section::from_key(key).is_none() {
                entries.push((key, key, codes));
            }
        }

        for (key, label, codes) in entries {
            let tally = compute_section_score(codes);
            total_raw += tally.raw;
            total_max += tally.max;
            sections.push(SectionScore {
                key: key.to_string(),
                label: label.to_string(),
                score: tally.score,
            });
        }

        let overall_score = percentage(total_raw, total_max);
        let tier = self.config.tier_for(overall_score).to_string();

        let weakest = weakest_sections(&sections, self.config.weakest_count);
        let recommendations = build_recommendations(&weakest, self.config.recommendation_cap);
        let quick_wins = build_quick_wins(&weakest);

        ScoreReport {
            overall_score,
            tier,
            sections,
            recommendations,
            quick_wins,
        }
    }
}
