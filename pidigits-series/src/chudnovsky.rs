//! Chudnovsky-style series for Pi
//!
//! Evaluated entirely in `f64`. The multiplier term is recomputed from `K`
//! every step rather than accumulated, and the power term overflows to
//! infinity after a couple of dozen steps; both are part of the expected
//! output and are kept as-is.

use crate::fixed::{check_fraction_digits, to_fixed};
use pidigits_core::{ApproxError, DigitString};
use tracing::debug;

const C_FACTOR: f64 = 426880.0;
const C_RADICAND: f64 = 10005.0;
const L_INITIAL: f64 = 13591409.0;
const L_STEP: f64 = 545140134.0;
const X_FACTOR: f64 = -262537412640768000.0;
const K_INITIAL: f64 = 6.0;
const K_STEP: f64 = 12.0;

/// Running terms of the series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesState {
    /// Multiplier term
    pub m: f64,
    /// Linear term
    pub l: f64,
    /// Alternating-sign power term
    pub x: f64,
    /// Step constant
    pub k: f64,
    /// Accumulated sum
    pub s: f64,
}

impl SeriesState {
    pub fn initial() -> Self {
        Self {
            m: 1.0,
            l: L_INITIAL,
            x: 1.0,
            k: K_INITIAL,
            s: L_INITIAL,
        }
    }

    /// Advance by iteration `i`
    pub fn step(self, i: i64) -> Self {
        let m = (self.k * self.k * self.k) / (i as f64 + 1.0);
        let l = self.l + L_STEP;
        let x = self.x * X_FACTOR;
        let s = self.s + (m * l) / x;
        Self {
            m,
            l,
            x,
            k: self.k + K_STEP,
            s,
        }
    }
}

/// Fold the series over iterations `1..precision`
///
/// `precision <= 1` runs no iterations.
pub fn series(precision: i64) -> SeriesState {
    (1..precision).fold(SeriesState::initial(), SeriesState::step)
}

/// `426880 * sqrt(10005)`
pub fn scale_constant() -> f64 {
    C_FACTOR * C_RADICAND.sqrt()
}

/// Raw `f64` approximation of Pi after `precision - 1` iterations
pub fn approximate(precision: i64) -> f64 {
    scale_constant() / series(precision).s
}

/// Pi formatted with exactly `precision` fractional digits
///
/// ```
/// let pi = pidigits_series::calculate_pi(5).unwrap();
/// assert_eq!(pi, "3.14159");
/// ```
pub fn calculate_pi(precision: i64) -> Result<String, ApproxError> {
    // Fail before iterating when the formatter would reject the count anyway
    check_fraction_digits(precision)?;
    let value = approximate(precision);
    debug!(precision, value, "series evaluated");
    to_fixed(value, precision)
}

/// Fractional digits of a formatted approximation
pub fn fractional_digits(pi_text: &str) -> Result<DigitString, ApproxError> {
    let (_, fraction) = pi_text
        .split_once('.')
        .ok_or_else(|| ApproxError::MissingFraction(pi_text.to_string()))?;
    DigitString::new(fraction)
}
