//! Number formatting for the output display

/// Largest magnitude still printed as a plain integer
const MAX_PLAIN_INTEGER: f64 = 1e15;

/// Nonzero magnitudes below this print in exponent form, as in the browser
const MIN_PLAIN_FRACTION: f64 = 1e-6;

/// Formats a result the way the page shows it
///
/// Integral values print without a fraction, other values keep up to ten
/// decimals with trailing zeros trimmed. Values smaller than one millionth use
/// exponent form (`1e-11`) so they never collapse to `0`. Non-finite values use the browser
/// spellings so a division by zero reads the same as in JavaScript.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n.fract() == 0.0 && n.abs() < MAX_PLAIN_INTEGER {
        // -0.0 prints as "0" in the browser
        return format!("{:.0}", n + 0.0);
    }
    if n != 0.0 && n.abs() < MIN_PLAIN_FRACTION {
        return format!("{n:e}");
    }
    let s = format!("{:.10}", n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(12.0), "12");
    }

    #[test]
    fn test_format_number_decimal() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(-2.25), "-2.25");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_tiny_uses_exponent() {
        assert_eq!(format_number(1e-11), "1e-11");
        assert_eq!(format_number(-1e-12), "-1e-12");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_format_number_millionth_stays_plain() {
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(2.5e-5), "0.000025");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_number_repeating_fraction() {
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
    }

    #[test]
    fn test_format_number_large_integer() {
        assert_eq!(format_number(1e15), "1000000000000000");
    }
}
