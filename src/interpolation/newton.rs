//! Newton (Incremental Divided-Difference) Update
//!
//! Maintains the coefficients of the
//! [Newton form](https://en.wikipedia.org/wiki/Newton_polynomial)
//!
//! ```text
//! P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})
//! ```
//!
//! without ever building the divided-difference table. A new point
//! `(x, y)` only needs the current polynomial evaluated at `x` and the
//! full product `(x - x0)...(x - x_{n-1})`; both come out of one pass.


use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::interpolation::errors::InterpolationError;


/// Output of a single Newton-form pass.
/// - `value`         : `P(x)` over the stored coefficients
/// - `x_differences` : `(x - x0)...(x - x_{n-1})` over *all* stored abscissae,
///                     zero iff `x` is one of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Evaluation {
    pub value        : BigRational,
    pub x_differences: BigRational,
}


/// Evaluates the Newton form at `x` in one pass.
///
/// The running product `total_sub_x` gains one factor per coefficient
/// so no basis term is rebuilt from scratch. After the loop it gets the
/// last factor `(x - x_{n-1})`, which `value` never needs.
pub(crate) fn evaluate(x_data: &[BigRational], c_data: &[BigRational], x: &BigRational) -> Evaluation {
    let mut value = c_data.first().cloned().unwrap_or_else(BigRational::zero);
    let mut total_sub_x = BigRational::one();

    for i in 1..c_data.len() {
        total_sub_x *= x - &x_data[i - 1];
        value += &c_data[i] * &total_sub_x;
    }

    if let Some(last) = x_data.last() {
        total_sub_x *= x - last;
    }

    Evaluation { value, x_differences: total_sub_x }
}


/// Computes the coefficient a new point `(x, y)` contributes.
///
/// `new_c = (y - P(x)) / (x - x0)...(x - x_{n-1})`, using only the
/// points stored so far. Nothing is mutated; the caller appends.
///
/// # Errors
/// - [`InterpolationError::DivisionByZero`] if the product vanishes.
pub(crate) fn next_coefficient(
    x_data: &[BigRational],
    c_data: &[BigRational],
    x     : &BigRational,
    y     : &BigRational,
) -> Result<BigRational, InterpolationError> {
    let Evaluation { value, x_differences } = evaluate(x_data, c_data, x);

    if x_differences.is_zero() {
        return Err(InterpolationError::DivisionByZero { x: x.clone() });
    }

    Ok((y - value) / x_differences)
}
