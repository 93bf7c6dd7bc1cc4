/// Numeric conversion and formatting helpers.
///
/// This module provides exact conversions between `f64` and `i64`, the
/// canonical display forms of numbers, and the strict numeral parser used when
/// an expression result is re-read as a number.
pub mod num;
