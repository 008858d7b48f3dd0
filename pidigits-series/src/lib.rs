//! pidigits Series
//!
//! Approximates Pi with a Chudnovsky-style series in native `f64` and
//! formats the result with a fixed number of fractional digits.

mod chudnovsky;
mod fixed;

pub use chudnovsky::{
    approximate, calculate_pi, fractional_digits, scale_constant, series, SeriesState,
};
pub use fixed::{check_fraction_digits, to_fixed, MAX_FRACTION_DIGITS};
