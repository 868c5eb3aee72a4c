//! Rational literal parsing.
//!
//! Accepted forms, with optional leading sign and surrounding whitespace:
//! - integer     : `3`, `-12`
//! - ratio       : `5/2`, `-5/2` (unsigned denominator, non-zero)
//! - decimal     : `0.25`, `.5`, `2.`
//! - scientific  : `1e3`, `2.5E-2`, exponent magnitude at most [`MAX_EXPONENT`]
//!
//! Decimals are converted exactly, `0.1` is `1/10`.


use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow, Zero};

use crate::numeric::errors::NumericError;


/// Largest accepted `|exp|` in scientific notation, keeps `10^exp` buildable.
pub const MAX_EXPONENT: u64 = i16::MAX as u64;


/// Parses `token` into an exact rational.
///
/// # Errors
/// - [`NumericError::InvalidNumericLiteral`] for anything outside the
///   accepted forms, including a zero denominator.
/// - [`NumericError::ExponentOutOfRange`] for a well-formed exponent
///   larger than [`MAX_EXPONENT`] in magnitude.
pub fn parse_rational(token: &str) -> Result<BigRational, NumericError> {
    let invalid = || NumericError::InvalidNumericLiteral { token: token.to_string() };

    let s = token.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None       => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let value = match body.split_once('/') {
        Some((numer, denom)) => ratio(numer, denom),
        None                 => decimal(body, token)?,
    }
    .ok_or_else(invalid)?;

    Ok(if negative { -value } else { value })
}


#[inline]
fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[inline]
fn digits(s: &str) -> Option<BigInt> {
    if s.is_empty() || !all_digits(s) {
        return None;
    }
    s.parse().ok()
}


fn ratio(numer: &str, denom: &str) -> Option<BigRational> {
    let numer = digits(numer)?;
    let denom = digits(denom)?;
    if denom.is_zero() {
        return None;
    }
    Some(BigRational::new(numer, denom))
}


/// `Ok(None)` for malformed input, `Err` only for an oversized exponent.
fn decimal(body: &str, token: &str) -> Result<Option<BigRational>, NumericError> {
    let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&body[..i], Some(&body[i + 1..])),
        None    => (body, None),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // at least one digit on either side of the point
    if int_part.is_empty() && frac_part.is_empty() {
        return Ok(None);
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Ok(None);
    }

    let exp = match exponent.map(parse_exponent) {
        None                         => 0,
        Some(Exponent::Malformed)    => return Ok(None),
        Some(Exponent::OutOfRange)   => {
            return Err(NumericError::ExponentOutOfRange { token: token.to_string(), limit: MAX_EXPONENT });
        }
        Some(Exponent::Value(e))     => e,
    };

    Ok(scaled(int_part, frac_part, exp))
}


#[inline]
fn scaled(int_part: &str, frac_part: &str, exp: i64) -> Option<BigRational> {
    let numer: BigInt = format!("{int_part}{frac_part}").parse().ok()?;
    let value = BigRational::from_integer(numer);
    let shift = exp - i64::try_from(frac_part.len()).ok()?;
    let scale = BigRational::from_integer(pow(BigInt::from(10u32), usize::try_from(shift.unsigned_abs()).ok()?));

    Some(if shift >= 0 { value * scale } else { value / scale })
}


enum Exponent {
    Value(i64),
    Malformed,
    OutOfRange,
}

#[inline]
fn parse_exponent(e: &str) -> Exponent {
    let (negative, unsigned) = match e.strip_prefix('-') {
        Some(rest) => (true, rest),
        None       => (false, e.strip_prefix('+').unwrap_or(e)),
    };
    if unsigned.is_empty() || !all_digits(unsigned) {
        return Exponent::Malformed;
    }

    // digits too long for u64 are out of range as well
    match unsigned.parse::<u64>() {
        Ok(m) if m <= MAX_EXPONENT => {
            let m = m as i64;
            Exponent::Value(if negative { -m } else { m })
        }
        _ => Exponent::OutOfRange,
    }
}
