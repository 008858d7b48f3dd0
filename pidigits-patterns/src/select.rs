//! Deduplication and extreme selection

use crate::PatternRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Pattern strings with duplicates collapsed, first occurrence winning
pub fn unique_patterns(records: &[PatternRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.pattern.as_str()))
        .map(|r| r.pattern.clone())
        .collect()
}

/// Parse the longest leading decimal literal of `text`
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"012"`
/// is 12 and `"7x"` is 7. Returns `None` when no digits lead the text.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    let mut sign = 1.0;
    match bytes.first() {
        Some(b'-') => {
            sign = -1.0;
            end = 1;
        }
        Some(b'+') => end = 1,
        _ => {}
    }
    if s[end..].starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let int_digits = leading_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = leading_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Unique patterns whose numeric value is strictly positive
pub fn valid_patterns(unique: &[String]) -> Vec<&str> {
    unique
        .iter()
        .map(String::as_str)
        .filter(|p| parse_float_prefix(p).is_some_and(|v| v > 0.0))
        .collect()
}

/// Smallest and largest patterns, textual and numeric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extremes {
    /// Last unique pattern, `""` when there are none
    pub smallest: String,
    /// First unique pattern, `""` when there are none
    pub largest: String,
    /// Last positive-numeric pattern, or zero
    pub smallest_value: f64,
    /// First positive-numeric pattern, or zero
    pub largest_value: f64,
    pub product: f64,
}

impl Extremes {
    pub fn select(unique: &[String]) -> Self {
        let smallest = unique.last().cloned().unwrap_or_default();
        let largest = unique.first().cloned().unwrap_or_default();

        let valid = valid_patterns(unique);
        let value_of = |p: Option<&&str>| p.and_then(|p| parse_float_prefix(p)).unwrap_or(0.0);
        let smallest_value = value_of(valid.last());
        let largest_value = value_of(valid.first());

        Self {
            smallest,
            largest,
            smallest_value,
            largest_value,
            product: smallest_value * largest_value,
        }
    }
}
