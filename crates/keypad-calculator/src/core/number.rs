//! Conversions between display strings and numbers
//!
//! The display is text, the arithmetic is `f64`. Parsing is lenient (a
//! numeric prefix is enough, so `"5."` mid-entry reads as 5) and formatting
//! emits the shortest string that round-trips, switching to exponent
//! notation outside `1e-6 <= |x| < 1e21`.

/// Parses the numeric prefix of `text`
///
/// Leading whitespace is skipped and an optional sign is honoured.
/// `"Infinity"` parses as infinity so a non-finite result can be chained
/// into another operation. Text with no numeric prefix yields NaN.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let end = numeric_prefix_len(rest);
    if end == 0 {
        return f64::NAN;
    }

    rest[..end].parse::<f64>().map_or(f64::NAN, |value| sign * value)
}

/// Length of the longest `digits[.digits][e[+-]digits]` prefix
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = digits_from(0);
    let mut mantissa_digits = end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    end
}

/// Formats a number in its canonical display form
///
/// ```
/// use keypad_calculator::core::number::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(5.0 / 0.0), "Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` gives the shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let exp = n - 1;
        let exp_sign = if exp >= 0 { '+' } else { '-' };
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", exp.abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", exp.abs())
        }
    };

    format!("{sign}{body}")
}

/// True when `text` reads as NaN or an infinity
#[must_use]
pub fn is_non_finite(text: &str) -> bool {
    !parse_number(text).is_finite()
}
