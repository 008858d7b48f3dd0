//! Pattern stripping

/// Remove every occurrence of each pattern, in order, then strip leading zeros
///
/// Patterns are literal needles. Order matters: a longer pattern removed
/// first can consume characters a shorter one would also have matched.
pub fn derive_remainder(digits: &str, patterns: &[String]) -> String {
    let stripped = patterns
        .iter()
        .filter(|p| !p.is_empty())
        .fold(digits.to_string(), |acc, p| acc.replace(p.as_str(), ""));
    stripped.trim_start_matches('0').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_removes_all_occurrences() {
        assert_eq!(derive_remainder("5152535", &strings(&["5"])), "123");
    }

    #[test]
    fn test_order_dependence() {
        // "121" goes first and leaves a lone "2" between its two matches
        assert_eq!(derive_remainder("1212121", &strings(&["121"])), "2");
        assert_eq!(derive_remainder("1212121", &strings(&["12"])), "1");
        assert_eq!(
            derive_remainder("1212121", &strings(&["121", "212", "12", "21", "1", "2"])),
            ""
        );
    }

    #[test]
    fn test_strips_leading_zeros_only() {
        assert_eq!(derive_remainder("00340500", &strings(&["5"])), "3400");
    }

    #[test]
    fn test_all_zeros_collapse_to_empty() {
        assert_eq!(derive_remainder("000", &strings(&["0"])), "");
        assert_eq!(derive_remainder("0009", &strings(&["9"])), "");
    }

    #[test]
    fn test_needle_is_literal() {
        assert_eq!(derive_remainder("a.b.c", &strings(&["."])), "abc");
        assert_eq!(derive_remainder("x+y", &strings(&["x+"])), "y");
    }

    #[test]
    fn test_no_patterns() {
        assert_eq!(derive_remainder("0314", &[]), "314");
    }
}
