//! Display formatting for computed values.

/// Shown for a positive infinite result.
pub const POSITIVE_INFINITY: &str = "+∞";
/// Shown for a negative infinite result.
pub const NEGATIVE_INFINITY: &str = "-∞";
/// Shown for an undefined result such as `0 ÷ 0`.
pub const NOT_A_NUMBER: &str = "NaN";

/// Default number of fractional digits kept on screen.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 6;

/// Render a value with the fewest fractional digits needed, capped at
/// `max_fraction_digits`.
///
/// The value is rounded to the cap, then trailing zeros and a dangling
/// decimal point are dropped. No digit grouping is applied. Non-finite values
/// map to [`POSITIVE_INFINITY`], [`NEGATIVE_INFINITY`] or [`NOT_A_NUMBER`].
///
/// # Example
///
/// ```rust
/// use abacus::core::format_number;
///
/// assert_eq!(format_number(1.0 / 3.0, 6), "0.333333");
/// assert_eq!(format_number(4.0, 6), "4");
/// assert_eq!(format_number(f64::INFINITY, 6), "+∞");
/// ```
pub fn format_number(value: f64, max_fraction_digits: usize) -> String {
    if value.is_nan() {
        return NOT_A_NUMBER.to_string();
    }
    if value.is_infinite() {
        let symbol = if value.is_sign_positive() {
            POSITIVE_INFINITY
        } else {
            NEGATIVE_INFINITY
        };
        return symbol.to_string();
    }

    let fixed = format!("{:.*}", max_fraction_digits, value);
    if !fixed.contains('.') {
        return fixed;
    }
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Whether `text` is one of the symbols [`format_number`] emits for
/// non-finite values.
pub fn is_special_symbol(text: &str) -> bool {
    matches!(text, POSITIVE_INFINITY | NEGATIVE_INFINITY | NOT_A_NUMBER)
}
