//! Case-insensitive substring matching of profile terms

use aho_corasick::AhoCorasick;
use log::warn;

/// Result of matching one term list against a resume.
///
/// `found` and `missing` partition the input list and keep its order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatch {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl TermMatch {
    pub fn total(&self) -> usize {
        self.found.len() + self.missing.len()
    }

    /// Share of terms found, as a 0-100 integer. An empty list scores 0.
    pub fn percentage(&self) -> u8 {
        percentage(self.found.len(), self.total())
    }

    /// True when fewer than `numerator / denominator` of the terms were found.
    pub fn below_ratio(&self, numerator: usize, denominator: usize) -> bool {
        self.found.len() * denominator < self.total() * numerator
    }
}

/// `round(100 * part / whole)`, or 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round().clamp(0.0, 100.0) as u8
}

/// Match `terms` against text that has already been lower-cased.
///
/// A term counts as found if its lower-cased form occurs anywhere in the
/// text, including inside a longer word ("r" is found in "order").
pub fn match_terms(lower_text: &str, terms: &[&str]) -> TermMatch {
    let patterns: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
    let present = present_patterns(lower_text, &patterns);

    let mut found = Vec::new();
    let mut missing = Vec::new();
    for (idx, term) in terms.iter().enumerate() {
        if present[idx] {
            found.push(term.to_string());
        } else {
            missing.push(term.to_string());
        }
    }

    TermMatch { found, missing }
}

/// One flag per pattern, set when the pattern occurs in `haystack`.
fn present_patterns(haystack: &str, patterns: &[String]) -> Vec<bool> {
    let mut present = vec![false; patterns.len()];

    match AhoCorasick::new(patterns) {
        Ok(automaton) => {
            for mat in automaton.find_overlapping_iter(haystack) {
                present[mat.pattern().as_usize()] = true;
            }
        }
        Err(e) => {
            warn!("Falling back to per-term search: {}", e);
            for (idx, pattern) in patterns.iter().enumerate() {
                present[idx] = haystack.contains(pattern.as_str());
            }
        }
    }

    present
}
