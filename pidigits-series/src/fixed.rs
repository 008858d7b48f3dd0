//! Fixed-point decimal formatting
//!
//! Renders an `f64` with an exact number of fractional digits, rounding
//! ties away from zero against the exact binary value.

use pidigits_core::ApproxError;

/// Largest fractional digit count accepted by [`to_fixed`]
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Enough fractional digits to print any finite `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Validate a requested fractional digit count
pub fn check_fraction_digits(digits: i64) -> Result<usize, ApproxError> {
    if digits < 0 {
        return Err(ApproxError::NegativePrecision(digits));
    }
    let out_of_range = ApproxError::PrecisionOutOfRange { got: digits, max: MAX_FRACTION_DIGITS };
    match usize::try_from(digits) {
        Ok(d) if d <= MAX_FRACTION_DIGITS => Ok(d),
        _ => Err(out_of_range),
    }
}

/// Format `value` with exactly `digits` fractional digits
///
/// `to_fixed(2.5, 0)` is `"3"`, `to_fixed(-0.125, 2)` is `"-0.13"`.
pub fn to_fixed(value: f64, digits: i64) -> Result<String, ApproxError> {
    let digits = check_fraction_digits(digits)?;
    if !value.is_finite() {
        return Err(ApproxError::NonFinite);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, frac) = exact
        .split_once('.')
        .ok_or_else(|| ApproxError::MissingFraction(exact.clone()))?;

    let mut kept: Vec<u8> = whole.bytes().chain(frac.bytes().take(digits)).collect();
    if frac.as_bytes().get(digits).is_some_and(|&b| b >= b'5') {
        round_up(&mut kept);
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|&b| b as char));
    }
    Ok(out)
}

/// Add one unit in the last place of an ASCII digit buffer
fn round_up(digits: &mut Vec<u8>) {
    for b in digits.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_with_zeros() {
        assert_eq!(to_fixed(1.5, 3).unwrap(), "1.500");
        assert_eq!(to_fixed(0.0, 2).unwrap(), "0.00");
    }

    #[test]
    fn test_zero_digits_has_no_point() {
        assert_eq!(to_fixed(3.14159, 0).unwrap(), "3");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        // Exactly representable halves
        assert_eq!(to_fixed(2.5, 0).unwrap(), "3");
        assert_eq!(to_fixed(0.125, 2).unwrap(), "0.13");
        assert_eq!(to_fixed(-0.125, 2).unwrap(), "-0.13");
    }

    #[test]
    fn test_rounds_against_exact_binary_value() {
        // 1.005 is stored slightly below 1.005
        assert_eq!(to_fixed(1.005, 2).unwrap(), "1.00");
        // 0.1 is stored slightly above 0.1
        assert_eq!(
            to_fixed(0.1, 20).unwrap(),
            "0.10000000000000000555"
        );
    }

    #[test]
    fn test_carry_grows_whole_part() {
        assert_eq!(to_fixed(9.99, 1).unwrap(), "10.0");
        assert_eq!(to_fixed(99.5, 0).unwrap(), "100");
    }

    #[test]
    fn test_exact_expansion_of_pi_double() {
        let text = to_fixed(std::f64::consts::PI, 50).unwrap();
        assert_eq!(text, "3.14159265358979311599796346854418516159057617187500");
    }

    #[test]
    fn test_rejects_negative_digits() {
        assert_eq!(to_fixed(1.0, -1), Err(ApproxError::NegativePrecision(-1)));
    }

    #[test]
    fn test_rejects_too_many_digits() {
        assert_eq!(
            to_fixed(1.0, 101),
            Err(ApproxError::PrecisionOutOfRange { got: 101, max: MAX_FRACTION_DIGITS })
        );
        assert!(to_fixed(1.0, 100).is_ok());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(to_fixed(f64::NAN, 2), Err(ApproxError::NonFinite));
        assert_eq!(to_fixed(f64::INFINITY, 2), Err(ApproxError::NonFinite));
    }
}
