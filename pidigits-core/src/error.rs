//! Structured errors
//!
//! Low-level failures are `ApproxError` values; everything that reaches a
//! caller of the engine is a `PidigitsError` carrying a machine-readable code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NEGATIVE_PRECISION: &str = "NEGATIVE_PRECISION";
    pub const PRECISION_RANGE: &str = "PRECISION_RANGE";
    pub const NON_FINITE: &str = "NON_FINITE";
    pub const MISSING_FRACTION: &str = "MISSING_FRACTION";
    pub const INVALID_DIGIT: &str = "INVALID_DIGIT";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Error type for the approximation and digit-extraction steps
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApproxError {
    #[error("Fraction digits must not be negative, got {0}")]
    NegativePrecision(i64),

    #[error("Fraction digits must be between 0 and {max}, got {got}")]
    PrecisionOutOfRange { got: i64, max: usize },

    #[error("Series value is not finite")]
    NonFinite,

    #[error("No fractional digits in '{0}'")]
    MissingFraction(String),

    #[error("Invalid digit {ch:?} at index {index}")]
    InvalidDigit { ch: char, index: usize },
}

/// Structured error surfaced by the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PidigitsError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Propagation notes, innermost first
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

impl PidigitsError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            notes: Vec::new(),
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
    }
}

impl std::fmt::Display for PidigitsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }
        Ok(())
    }
}

impl std::error::Error for PidigitsError {}

impl From<ApproxError> for PidigitsError {
    fn from(err: ApproxError) -> Self {
        let message = err.to_string();
        match err {
            ApproxError::NegativePrecision(_) => Self::new(codes::NEGATIVE_PRECISION, message)
                .with_suggestion("Pass a precision of 1 or more"),
            ApproxError::PrecisionOutOfRange { max, .. } => Self::new(codes::PRECISION_RANGE, message)
                .with_suggestion(format!("Pass a precision of at most {}", max)),
            ApproxError::NonFinite => Self::new(codes::NON_FINITE, message),
            ApproxError::MissingFraction(_) => Self::new(codes::MISSING_FRACTION, message)
                .with_suggestion("Pass a precision of 1 or more"),
            ApproxError::InvalidDigit { .. } => Self::new(codes::INVALID_DIGIT, message),
        }
    }
}
