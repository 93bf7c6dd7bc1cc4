/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if and only if the conversion is exact.
///
/// The value must be finite, integral and no larger in magnitude than
/// [`MAX_SAFE_U64_INT`], so that converting back to `f64` yields the same
/// number.
///
/// ## Example
/// ```
/// use octane::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(4.0), Some(4));
/// assert_eq!(f64_to_i64_exact(1.25), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Converts an `i64` to `f64`.
///
/// Integers produced by the interpreter never exceed [`MAX_SAFE_U64_INT`],
/// so the conversion is lossless for every value the evaluators create.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Formats a number in canonical form, omitting the fractional part when the
/// value is integral.
///
/// ## Example
/// ```
/// use octane::util::num::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(1.25), "1.25");
/// assert_eq!(format_number(-3.0), "-3");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Formats a number as a decimal that always carries a decimal point.
///
/// This is the output form of the arithmetic evaluator.
///
/// ## Example
/// ```
/// use octane::util::num::format_decimal;
///
/// assert_eq!(format_decimal(2.0), "2.0");
/// assert_eq!(format_decimal(101.0), "101.0");
/// assert_eq!(format_decimal(0.25), "0.25");
/// ```
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Parses text that is exactly a plain numeral: an optional `-`, one or more
/// digits, and optionally a `.` followed by one or more digits.
///
/// Exponents, `inf`, `NaN`, leading `+` and surrounding whitespace are all
/// rejected, so arbitrary strings that merely look numeric to `f64::from_str`
/// are not reinterpreted as numbers. Numerals too large to be finite are
/// rejected as well.
///
/// ## Example
/// ```
/// use octane::util::num::parse_numeric_literal;
///
/// assert_eq!(parse_numeric_literal("42"), Some(42.0));
/// assert_eq!(parse_numeric_literal("-1.5"), Some(-1.5));
/// assert_eq!(parse_numeric_literal("1."), None);
/// assert_eq!(parse_numeric_literal("inf"), None);
/// assert_eq!(parse_numeric_literal("hello"), None);
/// assert_eq!(parse_numeric_literal(&"9".repeat(400)), None);
/// ```
#[must_use]
pub fn parse_numeric_literal(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || fraction.is_some_and(|part| !is_digits(part)) {
        return None;
    }

    text.parse().ok().filter(|n: &f64| n.is_finite())
}
