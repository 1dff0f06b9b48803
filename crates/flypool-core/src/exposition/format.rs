//! Value formatting.

/// Render `value` with exactly `precision` fractional digits.
///
/// Never switches to exponent notation and never groups thousands.
pub fn decimal_string(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Render an integer without padding.
pub fn integer_string(value: i64) -> String {
    value.to_string()
}

/// Shift a base-unit digit string into a decimal amount.
///
/// The input is left-padded with `'0'` to at least `shift_digits` chars, then a
/// point is inserted so that the last `shift_digits - 1` chars become the
/// fraction. Note the fraction is one digit shorter than `shift_digits`:
/// `fixed_point_shift("1", 19)` is `"0.000000000000000001"`. Published
/// balances depend on this, keep it.
///
/// A `shift_digits` of 0 is treated as 1, which yields a trailing point.
pub fn fixed_point_shift(digits: &str, shift_digits: usize) -> String {
    let shift = shift_digits.max(1);
    let len = digits.chars().count();
    let total = len.max(shift);

    let mut padded = String::with_capacity(total + 1);
    padded.extend(std::iter::repeat('0').take(total - len));
    padded.push_str(digits);

    // chars kept left of the point
    let whole = total - shift + 1;
    let at = padded
        .char_indices()
        .nth(whole)
        .map(|(i, _)| i)
        .unwrap_or(padded.len());

    let (int_part, frac_part) = padded.split_at(at);
    format!("{int_part}.{frac_part}")
}

/// Join a metric name, label text and value into one newline-terminated line.
///
/// With empty `labels` the braces are omitted.
pub fn compose_line(metric: &str, labels: &str, value: &str) -> String {
    if labels.is_empty() {
        format!("{metric} {value}\n")
    } else {
        format!("{metric}{{{labels}}} {value}\n")
    }
}
