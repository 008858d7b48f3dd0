//! pidigits Core - Fundamental types
//!
//! This crate provides the core types used throughout pidigits:
//! - `DigitString`: validated fractional digits of a Pi approximation
//! - `ApproxError` / `PidigitsError`: low-level and structured errors
//! - `reference`: a literal expansion of Pi for accuracy checks

mod digits;
mod error;
pub mod reference;

pub use digits::DigitString;
pub use error::{codes, ApproxError, PidigitsError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{ApproxError, DigitString, PidigitsError};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod digit_tests {
        use super::*;

        #[test]
        fn test_accepts_digits() {
            let d = DigitString::new("0141592").unwrap();
            assert_eq!(d.as_str(), "0141592");
            assert_eq!(d.len(), 7);
        }

        #[test]
        fn test_accepts_empty() {
            let d = DigitString::new("").unwrap();
            assert!(d.is_empty());
        }

        #[test]
        fn test_rejects_non_digit() {
            let err = DigitString::new("14a5").unwrap_err();
            assert_eq!(err, ApproxError::InvalidDigit { ch: 'a', index: 2 });
        }

        #[test]
        fn test_rejects_decimal_point() {
            assert!(DigitString::new("3.14").is_err());
        }

        #[test]
        fn test_serde_is_plain_string() {
            let d = DigitString::new("2718").unwrap();
            let json = serde_json::to_string(&d).unwrap();
            assert_eq!(json, "\"2718\"");

            let back: DigitString = serde_json::from_str(&json).unwrap();
            assert_eq!(back, d);

            let bad: Result<DigitString, _> = serde_json::from_str("\"12x\"");
            assert!(bad.is_err());
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_from_approx_error_sets_code() {
            let err: PidigitsError = ApproxError::NegativePrecision(-3).into();
            assert_eq!(err.code, codes::NEGATIVE_PRECISION);
            assert!(err.message.contains("-3"));
            assert!(err.suggestion.is_some());
        }

        #[test]
        fn test_range_error_mentions_limit() {
            let err: PidigitsError = ApproxError::PrecisionOutOfRange { got: 250, max: 100 }.into();
            assert_eq!(err.code, codes::PRECISION_RANGE);
            assert_eq!(err.suggestion.as_deref(), Some("Pass a precision of at most 100"));
        }

        #[test]
        fn test_display_includes_notes() {
            let err = PidigitsError::internal("boom").with_note("while scanning");
            let text = err.to_string();
            assert!(text.starts_with("[INTERNAL] Internal error: boom"));
            assert!(text.contains("note: while scanning"));
        }

        #[test]
        fn test_serialize_skips_empty_fields() {
            let err = PidigitsError::new(codes::NON_FINITE, "Series value is not finite");
            let json = serde_json::to_value(&err).unwrap();
            assert_eq!(json["code"], "NON_FINITE");
            assert!(json.get("suggestion").is_none());
            assert!(json.get("notes").is_none());
        }
    }

    mod reference_tests {
        use super::*;

        #[test]
        fn test_fraction_length() {
            assert_eq!(reference::fraction().len(), 500);
            assert!(reference::fraction().starts_with("14159265358979"));
        }

        #[test]
        fn test_matching_digits() {
            assert_eq!(reference::matching_digits("14159265358979311"), 15);
            assert_eq!(reference::matching_digits("2"), 0);
            assert_eq!(reference::matching_digits(""), 0);
            assert_eq!(reference::matching_digits(reference::fraction()), 500);
        }
    }
}
