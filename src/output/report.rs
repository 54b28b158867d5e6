//! Presentation helpers over a score report

use crate::processing::scorer::{ScoreReport, HIGH_SCORE_THRESHOLD, LOW_SCORE_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Coarse rating used to colour and label scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_SCORE_THRESHOLD {
            ScoreBand::High
        } else if score >= LOW_SCORE_THRESHOLD {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            ScoreBand::High => "Excellent! ATS Optimized",
            ScoreBand::Medium => "Good, needs improvement",
            ScoreBand::Low => "Needs optimization",
        }
    }
}

/// Sub-scores with their display labels, in display order
pub fn sub_scores(report: &ScoreReport) -> [(&'static str, u8); 5] {
    [
        ("Keyword Match", report.keyword_score),
        ("Skills Match", report.skill_score),
        ("Experience", report.experience_score),
        ("Format & Structure", report.format_score),
        ("Sections", report.section_score),
    ]
}

/// Contact signals with their display labels
pub fn contact_entries(report: &ScoreReport) -> [(&'static str, bool); 4] {
    let contact = &report.contact_info;
    [
        ("Email", contact.has_email),
        ("Phone", contact.has_phone),
        ("LinkedIn", contact.has_linkedin),
        ("GitHub", contact.has_github),
    ]
}

/// "summary" -> "Summary"
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
