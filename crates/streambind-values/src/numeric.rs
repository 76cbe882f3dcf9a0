//! Lenient numeric parsing for stream tokens.
//!
//! Hardware rarely sends clean numbers: tokens arrive with trailing units,
//! stray characters or nothing numeric at all. These parsers take the
//! longest numeric prefix and fall back to zero, which the binding
//! heuristics rely on.

/// Parse the longest leading float prefix of `text`, or 0.0.
///
/// `"10"` → 10.0, `"1.5x"` → 1.5, `"-.5"` → -0.5, `"abc"` → 0.0.
pub fn parse_float_lenient(text: &str) -> f32 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0usize;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut p = frac_start;
        while p < bytes.len() && bytes[p].is_ascii_digit() {
            p += 1;
        }
        if p > frac_start {
            has_digits = true;
            end = p;
        } else if has_digits {
            // "1." is a valid prefix
            end = frac_start;
        }
    }

    if !has_digits {
        return 0.0;
    }

    // Optional exponent, only taken when at least one digit follows.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut p = end + 1;
        if p < bytes.len() && (bytes[p] == b'+' || bytes[p] == b'-') {
            p += 1;
        }
        let exp_start = p;
        while p < bytes.len() && bytes[p].is_ascii_digit() {
            p += 1;
        }
        if p > exp_start {
            end = p;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Parse the longest leading integer prefix of `text`, or 0.
pub fn parse_int_lenient(text: &str) -> i32 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0usize;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digit_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digit_start {
        return 0;
    }

    match s[..end].parse::<i64>() {
        Ok(v) => v as i32,
        Err(_) => 0,
    }
}

/// The auto-create heuristic for telling text apart from numbers: a token is
/// non-numeric when its lenient float parse yields zero and it contains no
/// `'0'` character (so `"0"`, `"0.0"` and `"10"` all stay numeric).
pub fn looks_non_numeric(token: &str) -> bool {
    parse_float_lenient(token) == 0.0 && !token.contains('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_prefixes() {
        assert_eq!(parse_float_lenient("10"), 10.0);
        assert_eq!(parse_float_lenient("1.5"), 1.5);
        assert_eq!(parse_float_lenient("-3.25"), -3.25);
        assert_eq!(parse_float_lenient("2.5e2"), 250.0);
        assert_eq!(parse_float_lenient("1.5x"), 1.5);
        assert_eq!(parse_float_lenient("  42"), 42.0);
        assert_eq!(parse_float_lenient(".5"), 0.5);
        assert_eq!(parse_float_lenient("1."), 1.0);
    }

    #[test]
    fn float_garbage_is_zero() {
        assert_eq!(parse_float_lenient(""), 0.0);
        assert_eq!(parse_float_lenient("abc"), 0.0);
        assert_eq!(parse_float_lenient("-"), 0.0);
        assert_eq!(parse_float_lenient("e5"), 0.0);
        assert_eq!(parse_float_lenient("."), 0.0);
    }

    #[test]
    fn exponent_without_digits_is_ignored() {
        assert_eq!(parse_float_lenient("2e"), 2.0);
        assert_eq!(parse_float_lenient("2e+"), 2.0);
    }

    #[test]
    fn int_prefixes() {
        assert_eq!(parse_int_lenient("42"), 42);
        assert_eq!(parse_int_lenient("-7px"), -7);
        assert_eq!(parse_int_lenient("3.9"), 3);
        assert_eq!(parse_int_lenient("x1"), 0);
    }

    #[test]
    fn non_numeric_heuristic() {
        assert!(looks_non_numeric("World"));
        assert!(looks_non_numeric(""));
        assert!(!looks_non_numeric("10"));
        assert!(!looks_non_numeric("0"));
        assert!(!looks_non_numeric("0.0"));
        assert!(!looks_non_numeric("3.5"));
        // A zero digit anywhere keeps the token numeric-looking.
        assert!(!looks_non_numeric("v0"));
    }
}
