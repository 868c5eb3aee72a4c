//! Decimal approximation of exact rationals, for display only.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow, Signed, Zero};


/// Formats `value` with exactly `digits` digits after the decimal point,
/// rounding half away from zero.
///
/// ```text
/// approximate(2/3, 4)  -> "0.6667"
/// approximate(-5/2, 0) -> "-3"
/// ```
pub fn approximate(value: &BigRational, digits: usize) -> String {
    let scale   = BigRational::from_integer(pow(BigInt::from(10u32), digits));
    let rounded = (value.abs() * scale).round().to_integer();

    let mut text = rounded.to_string();
    if digits > 0 {
        if text.len() <= digits {
            text = "0".repeat(digits + 1 - text.len()) + &text;
        }
        text.insert(text.len() - digits, '.');
    }

    // no "-0.00"
    if value.is_negative() && !rounded.is_zero() {
        text.insert(0, '-');
    }
    text
}
