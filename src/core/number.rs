//! Conversions between display numerals and `f64` values.
//!
//! The readout stores text, not numbers. These two functions define how that
//! text is read back into a value and how computed values are written out.
//! Both follow the conventions of browser calculators: reading accepts the
//! longest numeric prefix, writing never prints a redundant `.0`.

/// Read the numeric value of a numeral.
///
/// Parses the longest numeric prefix of `text` (after leading whitespace).
/// Text with no leading digits evaluates to NaN, so a partial entry such as
/// `"-"` is NaN while `"5."` is 5 and `"1e+"` is 1.
///
/// # Example
///
/// ```rust
/// use abacus::core::parse_numeral;
///
/// assert_eq!(parse_numeral("12.5"), 12.5);
/// assert_eq!(parse_numeral("0."), 0.0);
/// assert_eq!(parse_numeral("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_numeral("-").is_nan());
/// ```
pub fn parse_numeral(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Only consume an exponent that carries at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Write a value the way it should appear on the readout.
///
/// Integral values print without a fractional part, negative zero prints as
/// `0`, and non-finite values print as `NaN`, `Infinity` or `-Infinity`.
/// Magnitudes of at least 1e21, or below 1e-6, switch to exponent form with
/// an explicit exponent sign.
///
/// # Example
///
/// ```rust
/// use abacus::core::format_number;
///
/// assert_eq!(format_number(81.0), "81");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let scientific = format!("{:e}", value);
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => scientific,
        };
    }

    format!("{}", value)
}
