//! Canonical textual form of a Newton polynomial.
//!
//! Each non-zero coefficient `c[i]` becomes `c[i](x - x0)...(x - x_{i-1})`,
//! terms are joined with `" + "`, and the joined string is cleaned of
//! sign artifacts in one pass:
//!
//! ```text
//! " + -" -> " - "
//! " - -" -> " + "
//! ```
//!
//! The second rule also turns `(x - -1/2)` into `(x + 1/2)`.


use num_rational::BigRational;
use num_traits::Zero;


/// Renders the Newton form stored in `x_data`/`c_data`.
///
/// - no coefficients  : `""`
/// - all coefficients zero : `"0"`
pub(crate) fn render(x_data: &[BigRational], c_data: &[BigRational]) -> String {
    let terms: Vec<String> = c_data
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_zero())
        .map(|(i, c)| term(c, &x_data[..i]))
        .collect();

    if terms.is_empty() {
        return if c_data.is_empty() { String::new() } else { "0".to_string() };
    }

    canonicalize_signs(&terms.join(" + "))
}


#[inline]
fn term(coefficient: &BigRational, factors: &[BigRational]) -> String {
    let mut out = coefficient.to_string();
    for xj in factors {
        out.push_str(&format!("(x - {xj})"));
    }
    out
}


/// Order matters: `" + -"` first, then `" - -"`.
#[inline]
fn canonicalize_signs(joined: &str) -> String {
    joined.replace(" + -", " - ").replace(" - -", " + ")
}
