//! Report renderer
//!
//! Renders a finished report as text lines or JSON.

use crate::PatternReport;
use pidigits_core::PidigitsError;
use pidigits_patterns::PatternRecord;

/// Output format for a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per computed value
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Report renderer
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, report: &PatternReport, format: OutputFormat) -> Result<String, PidigitsError> {
        match format {
            OutputFormat::Text => Ok(self.lines(report).join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .map_err(|e| PidigitsError::internal(format!("Failed to serialize report: {}", e))),
        }
    }

    /// Report lines in output order
    pub fn lines(&self, report: &PatternReport) -> Vec<String> {
        let analysis = &report.analysis;
        let extremes = &analysis.extremes;
        vec![
            format!("Calculated π to {} decimal places: 3.{}", report.precision, report.digits),
            format!("Repeating patterns found: {}", self.render_patterns(&analysis.patterns)),
            format!("Smallest repeating pattern: {}", extremes.smallest),
            format!("Largest repeating pattern: {}", extremes.largest),
            format!(
                "Result of smallest ({}) * largest ({}): {}",
                extremes.smallest_value, extremes.largest_value, extremes.product
            ),
            format!("Non-repeating remainder of π: {}", analysis.remainder),
        ]
    }

    fn render_patterns(&self, patterns: &[PatternRecord]) -> String {
        let items: Vec<String> = patterns
            .iter()
            .map(|r| format!("[\"{}\", {}]", r.pattern, r.count))
            .collect();
        format!("[{}]", items.join(", "))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
