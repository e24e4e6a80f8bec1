//! Numeric text conversion rules shared by the field accessors.
//!
//! Attribute text follows C library conventions the surrounding vector
//! formats were defined against: parsing reads the longest leading numeric
//! prefix and yields zero for anything else, and the general float form
//! uses six significant digits.

/// Parses the longest leading integer prefix of `s`.
///
/// Skips leading whitespace, accepts an optional sign, then consumes
/// decimal digits. Returns 0 when no digits are present. Values beyond the
/// `i64` range saturate.
pub fn parse_integer_prefix(s: &str) -> i64 {
    let bytes = s.trim_start().as_bytes();
    let mut i = 0;
    let mut negative = false;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        negative = bytes[0] == b'-';
        i = 1;
    }

    let mut value: i64 = 0;
    let mut any = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        any = true;
        let digit = (bytes[i] - b'0') as i64;
        value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
            Some(v) => v,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
        i += 1;
    }

    if !any {
        return 0;
    }
    if negative { -value } else { value }
}

/// Parses the longest leading floating-point prefix of `s`.
///
/// Recognises decimal forms only: optional sign, digits with an optional
/// point and fraction, and an optional exponent. An exponent marker with
/// no digits after it is not part of the prefix. Returns 0.0 when no
/// numeric prefix is present.
pub fn parse_real_prefix(s: &str) -> f64 {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    let mut end = i;
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exponent_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_start {
            end = j;
        }
    }

    t[..end].parse().unwrap_or(0.0)
}

/// Formats a double in the general six-significant-digit form.
///
/// Fixed notation while the decimal exponent lies in [-4, 6), scientific
/// notation (`d.dddddE±XX`, two-digit exponent minimum) otherwise, with
/// trailing zeros and a trailing point removed. The text is therefore not
/// round-trip exact for values needing more than six digits.
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // Notation is chosen from the exponent of the *rounded* six-digit form,
    // so a value that rounds up across a power of ten switches with it
    // (999999.95 prints as 1e+06, not 1000000).
    let scientific = format!("{:.5e}", value);
    let (mantissa, exponent) = split_exponent(&scientific);
    if (-4..6).contains(&exponent) {
        let precision = (5 - exponent) as usize;
        trim_trailing_zeros(&format!("{:.*}", precision, value))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_trailing_zeros(mantissa), sign, exponent.abs())
    }
}

fn split_exponent(scientific: &str) -> (&str, i32) {
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (scientific, 0),
    }
}

fn trim_trailing_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_integer_prefix() {
        assert_eq!(parse_integer_prefix("42"), 42);
        assert_eq!(parse_integer_prefix("  -17 wells"), -17);
        assert_eq!(parse_integer_prefix("+8"), 8);
        assert_eq!(parse_integer_prefix("3.5"), 3);
        assert_eq!(parse_integer_prefix("abc"), 0);
        assert_eq!(parse_integer_prefix(""), 0);
        assert_eq!(parse_integer_prefix("-"), 0);
        assert_eq!(parse_integer_prefix("+-3"), 0);
    }

    #[test]
    fn test_integer_prefix_saturates() {
        assert_eq!(parse_integer_prefix("99999999999999999999"), i64::MAX);
        assert_eq!(parse_integer_prefix("-99999999999999999999"), i64::MIN);
        assert_eq!(parse_integer_prefix("9223372036854775807"), i64::MAX);
        assert_eq!(parse_integer_prefix("-9223372036854775808"), i64::MIN);
    }

    #[test]
    fn test_real_prefix() {
        assert_eq!(parse_real_prefix("3.5"), 3.5);
        assert_eq!(parse_real_prefix("  -0.25deg"), -0.25);
        assert_eq!(parse_real_prefix(".5"), 0.5);
        assert_eq!(parse_real_prefix("1."), 1.0);
        assert_eq!(parse_real_prefix("1e3"), 1000.0);
        assert_eq!(parse_real_prefix("2.5E-2"), 0.025);
        assert_eq!(parse_real_prefix("abc"), 0.0);
        assert_eq!(parse_real_prefix("."), 0.0);
        assert_eq!(parse_real_prefix(""), 0.0);
    }

    #[test]
    fn test_real_prefix_dangling_exponent() {
        // The exponent marker is only consumed when digits follow it.
        assert_eq!(parse_real_prefix("1e"), 1.0);
        assert_eq!(parse_real_prefix("1e+"), 1.0);
        assert_eq!(parse_real_prefix("2.5e-x"), 2.5);
    }

    #[test]
    fn test_format_general_fixed() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(3.14159), "3.14159");
        assert_eq!(format_general(-2.5), "-2.5");
        assert_eq!(format_general(100.0), "100");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(123456.0), "123456");
        assert_eq!(format_general(181.25), "181.25");
    }

    #[test]
    fn test_format_general_rounds_to_six_digits() {
        assert_eq!(format_general(3.141592653589793), "3.14159");
        assert_eq!(format_general(2.718281828), "2.71828");
        assert_eq!(format_general(123456.7), "123457");
    }

    #[test]
    fn test_format_general_scientific() {
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(-4.2e12), "-4.2e+12");
        assert_eq!(format_general(6.62607e-34), "6.62607e-34");
    }

    #[test]
    fn test_format_general_rounding_crosses_notation() {
        // Rounding to six digits promotes the value into scientific range.
        assert_eq!(format_general(999999.95), "1e+06");
    }

    proptest! {
        #[test]
        fn integer_text_roundtrips(v in any::<i64>()) {
            prop_assert_eq!(parse_integer_prefix(&v.to_string()), v);
        }

        #[test]
        fn general_form_reparses_within_six_digits(
            v in proptest::num::f64::POSITIVE | proptest::num::f64::NEGATIVE | proptest::num::f64::NORMAL,
        ) {
            let text = format_general(v);
            let back = parse_real_prefix(&text);
            // Six significant digits bound the relative error.
            prop_assert!(((back - v) / v).abs() < 1e-5);
        }
    }
}
