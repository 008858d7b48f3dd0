//! Reference expansion of Pi

/// Pi to 500 fractional digits
pub const PI_STR: &str = "3.14159265358979323846264338327950288419716939937510582097494459230781640628620899862803482534211706798214808651328230664709384460955058223172535940812848111745028410270193852110555964462294895493038196442881097566593344612847564823378678316527120190914564856692346034861045432664821339360726024914127372458700660631558817488152092096282925409171536436789259036001133053054882046652138414695194151160943305727036575959195309218611738193261179310511854807446237996274956735188575272489122793818301194912";

/// Fractional digits of [`PI_STR`]
pub fn fraction() -> &'static str {
    &PI_STR[2..]
}

/// Number of leading fractional digits of `digits` that agree with Pi
///
/// Digits past the end of the reference never count as matching.
pub fn matching_digits(digits: &str) -> usize {
    digits
        .bytes()
        .zip(fraction().bytes())
        .take_while(|(a, b)| a == b)
        .count()
}
