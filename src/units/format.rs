//! Fixed-point string formatting for decimal amounts.
//!
//! `BigDecimal`'s `Display` switches to exponent notation for very small
//! values, so every user-facing number goes through these helpers instead.

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::Sign;

/// Format a decimal with exactly `places` fraction digits
///
/// **Public** - used for prices and ether/gwei strings
///
/// # Arguments
/// * `value` - Amount to format
/// * `places` - Number of digits after the decimal point
/// * `mode` - Rounding applied at the last kept digit
pub fn to_fixed(value: &BigDecimal, places: i64, mode: RoundingMode) -> String {
    let places = places.max(0);
    let rounded = value.with_scale_round(places, mode);
    let (digits, _) = rounded.as_bigint_and_exponent();

    let mut body = digits.magnitude().to_string();
    if places > 0 {
        let width = places as usize;
        if body.len() <= width {
            body = format!("{}{}", "0".repeat(width + 1 - body.len()), body);
        }
        let split = body.len() - width;
        body = format!("{}.{}", &body[..split], &body[split..]);
    }

    if digits.sign() == Sign::Minus {
        format!("-{}", body)
    } else {
        body
    }
}

/// Insert thousands separators into the integer part of a fixed-point string
///
/// **Public** - "1234567.50" becomes "1,234,567.50"
pub fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Drop trailing zeros, then a dangling decimal point
pub fn strip_trailing_zeros(fixed: &str) -> String {
    if !fixed.contains('.') {
        return fixed.to_string();
    }
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
