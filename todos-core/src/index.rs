/// Parse a positional index from a path segment.
///
/// Reads optional leading whitespace, an optional sign and then as many ASCII
/// digits as are present; anything after the digits is ignored and a segment
/// with no digits at all reads as `0`. So `"3"` and `"3abc"` both give `3` and
/// `"abc"` gives `0`.
///
/// Returns `None` for negative or overflowing values, which can never address
/// an element and are reported as out of range by the caller.
pub fn parse_index(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return Some(0);
    }

    let value: usize = digits.parse().ok()?;
    if negative && value != 0 {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
    }

    #[test]
    fn non_numeric_segment_reads_as_zero() {
        assert_eq!(parse_index("abc"), Some(0));
        assert_eq!(parse_index(""), Some(0));
        assert_eq!(parse_index("-"), Some(0));
    }

    #[test]
    fn ignores_trailing_garbage() {
        assert_eq!(parse_index("2x"), Some(2));
        assert_eq!(parse_index("7.5"), Some(7));
        assert_eq!(parse_index("  12 "), Some(12));
    }

    #[test]
    fn accepts_explicit_sign_and_negative_zero() {
        assert_eq!(parse_index("+3"), Some(3));
        assert_eq!(parse_index("-0"), Some(0));
    }

    #[test]
    fn rejects_negative_values() {
        assert_eq!(parse_index("-1"), None);
    }

    #[test]
    fn rejects_values_that_overflow() {
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }
}
