//! Defines the coefficient update variants
//!
//! Provides the [`Algorithm`] enum, selected once when an
//! [`Interpolator`](crate::interpolation::Interpolator) is constructed.

use std::str::FromStr;

use crate::interpolation::errors::InterpolationError;


/// Coefficient update variants.
/// - [`Algorithm::Newton`]            : re-evaluates the current Newton form at
///                                      the new abscissa, O(n) per insertion
/// - [`Algorithm::DividedDifference`] : keeps the last diagonal of the divided
///                                      difference table, O(n) per insertion
///                                      with O(n) extra memory
///
/// Both produce identical coefficients for the same insertion order.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    Newton,
    DividedDifference,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Newton            => "newton",
            Algorithm::DividedDifference => "divide",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

impl FromStr for Algorithm {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newton" => Ok(Algorithm::Newton),
            "divide" | "divided" | "divided-difference" => Ok(Algorithm::DividedDifference),
            _ => Err(InterpolationError::UnknownAlgorithm { got: s.to_string() }),
        }
    }
}
