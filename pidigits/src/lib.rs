//! pidigits - Pi approximation and digit pattern analysis

mod render;

pub use render::{OutputFormat, Renderer};

pub use pidigits_core::{ApproxError, DigitString, PidigitsError};
pub use pidigits_patterns::{analyze, AnalysisResult, Extremes, PatternRecord};
pub use pidigits_series::{calculate_pi, fractional_digits, MAX_FRACTION_DIGITS};

use pidigits_core::reference;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Precision used when none is given
pub const DEFAULT_PRECISION: i64 = 100;

/// Run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Fractional digits of Pi to compute and analyze
    pub precision: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }
}

/// Result of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternReport {
    pub precision: i64,
    /// Full approximation, `3.` followed by the digits
    pub pi: String,
    /// Fractional digits the analysis ran over
    pub digits: DigitString,
    /// Leading fractional digits that agree with Pi
    pub correct_digits: usize,
    pub analysis: AnalysisResult,
}

/// Main pidigits engine
pub struct PiPatterns {
    config: AnalysisConfig,
}

impl PiPatterns {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn with_precision(mut self, precision: i64) -> Self {
        self.config.precision = precision;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Approximate Pi, then analyze its fractional digits
    pub fn run(&self) -> Result<PatternReport, PidigitsError> {
        let precision = self.config.precision;
        let note = || format!("while approximating π to {} decimal places", precision);

        let pi = calculate_pi(precision).map_err(|e| PidigitsError::from(e).with_note(note()))?;
        let digits = fractional_digits(&pi).map_err(|e| PidigitsError::from(e).with_note(note()))?;

        let correct_digits = reference::matching_digits(digits.as_str());
        info!(precision, correct_digits, "π approximated");

        let analysis = analyze(digits.as_str());
        info!(
            patterns = analysis.patterns.len(),
            unique = analysis.unique.len(),
            "patterns analyzed"
        );

        Ok(PatternReport {
            precision,
            pi,
            digits,
            correct_digits,
            analysis,
        })
    }
}

impl Default for PiPatterns {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
