//! Decimal digit strings

use crate::ApproxError;
use serde::{Deserialize, Serialize};

/// Fractional digits of a Pi approximation
///
/// Holds ASCII decimal digits only, so byte offsets and character
/// offsets coincide for every consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigitString(String);

impl DigitString {
    /// Validate and wrap a digit string
    pub fn new(s: impl Into<String>) -> Result<Self, ApproxError> {
        let s = s.into();
        if let Some((index, ch)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ApproxError::InvalidDigit { ch, index });
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for DigitString {
    type Error = ApproxError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<DigitString> for String {
    fn from(digits: DigitString) -> Self {
        digits.0
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DigitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
