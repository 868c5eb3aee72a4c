//! Divided-Difference Table Update
//!
//! Keeps only the last diagonal of the classic triangular
//! [divided-difference table](https://en.wikipedia.org/wiki/Divided_differences)
//! instead of the full O(n²) table.
//!
//! After points `x0..x_{n-1}` the stored diagonal is
//!
//! ```text
//! d = [ f[x_{n-1}], f[x_{n-2}, x_{n-1}], ..., f[x0, ..., x_{n-1}] ]
//! ```
//!
//! and a new point `(x, y)` produces the next one in a single sweep:
//!
//! ```text
//! d'[0]   = y
//! d'[k+1] = (d'[k] - d[k]) / (x - x_{n-1-k})
//! ```
//!
//! The last entry `d'[n]` is the new Newton coefficient.


use num_rational::BigRational;
use num_traits::Zero;

use crate::interpolation::errors::InterpolationError;


/// Builds the next diagonal for a new point `(x, y)`.
///
/// Returns `(next_diagonal, new_coefficient)`. The old diagonal is left
/// untouched so a failed insertion commits nothing.
///
/// # Errors
/// - [`InterpolationError::DivisionByZero`] if some `x - x_j` vanishes.
pub(crate) fn next_diagonal(
    x_data  : &[BigRational],
    diagonal: &[BigRational],
    x       : &BigRational,
    y       : &BigRational,
) -> Result<(Vec<BigRational>, BigRational), InterpolationError> {
    let mut next = Vec::with_capacity(diagonal.len() + 1);
    let mut current_bottom = y.clone();
    next.push(current_bottom.clone());

    // walk abscissae newest first, paired with the previous diagonal
    for (old_x, old_d) in x_data.iter().rev().zip(diagonal) {
        let dx = x - old_x;
        if dx.is_zero() {
            return Err(InterpolationError::DivisionByZero { x: x.clone() });
        }
        current_bottom = (current_bottom - old_d) / dx;
        next.push(current_bottom.clone());
    }

    Ok((next, current_bottom))
}
