//! Full analysis pipeline

use crate::{derive_remainder, find_repeating_patterns, unique_patterns, Extremes, PatternRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything derived from one digit string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Repeating patterns with counts, longest first
    pub patterns: Vec<PatternRecord>,
    /// Distinct pattern strings in the same order
    pub unique: Vec<String>,
    pub extremes: Extremes,
    /// Digits left after stripping every pattern and leading zeros
    pub remainder: String,
}

/// Scan, deduplicate, select extremes, derive remainder
pub fn analyze(digits: &str) -> AnalysisResult {
    let patterns = find_repeating_patterns(digits);
    let unique = unique_patterns(&patterns);
    let extremes = Extremes::select(&unique);
    let remainder = derive_remainder(digits, &unique);

    debug!(
        patterns = patterns.len(),
        unique = unique.len(),
        remainder_len = remainder.len(),
        "analysis complete"
    );

    AnalysisResult {
        patterns,
        unique,
        extremes,
        remainder,
    }
}
