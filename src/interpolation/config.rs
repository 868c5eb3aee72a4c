//! Sampling configuration for drawing an interpolant.
//!
//! Provides [`SampleCfg`] with default margin [`DEFAULT_MARGIN`] and step
//! [`DEFAULT_STEP`], both `1/10`. Used by
//! [`Interpolator::sample`](crate::interpolation::Interpolator::sample).
//!
//! [`SampleCfg`]
//! - `margin` : padding added on both sides of `[min, max]`
//! - `step`   : distance between consecutive sample abscissae
//! - `range`  : explicit `(lo, hi)`, overrides `margin` when set
//!
//! [`SampleCfg::new`] initializes configuration with the defaults.


use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::interpolation::errors::InterpolationError;


pub const DEFAULT_MARGIN: (i64, i64) = (1, 10);
pub const DEFAULT_STEP  : (i64, i64) = (1, 10);


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCfg {
    pub(crate) margin: BigRational,
    pub(crate) step  : BigRational,
    pub(crate) range : Option<(BigRational, BigRational)>,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleCfg {
    pub fn new() -> Self {
        Self {
            margin: ratio(DEFAULT_MARGIN),
            step  : ratio(DEFAULT_STEP),
            range : None,
        }
    }

    // getters
    pub fn margin(&self) -> &BigRational { &self.margin }
    pub fn step(&self)   -> &BigRational { &self.step }
    pub fn range(&self)  -> Option<(&BigRational, &BigRational)> {
        self.range.as_ref().map(|(lo, hi)| (lo, hi))
    }

    // setters
    pub fn set_margin(mut self, v: BigRational) -> Result<Self, InterpolationError> {
        if v.is_negative() {
            return Err(InterpolationError::InvalidMargin { got: v });
        }
        self.margin = v;
        Ok(self)
    }

    pub fn set_step(mut self, v: BigRational) -> Result<Self, InterpolationError> {
        if v.is_zero() || v.is_negative() {
            return Err(InterpolationError::InvalidStep { got: v });
        }
        self.step = v;
        Ok(self)
    }

    pub fn set_range(mut self, lo: BigRational, hi: BigRational) -> Result<Self, InterpolationError> {
        if lo > hi {
            return Err(InterpolationError::InvalidRange { lo, hi });
        }
        self.range = Some((lo, hi));
        Ok(self)
    }
}


#[inline]
fn ratio((numer, denom): (i64, i64)) -> BigRational {
    BigRational::new(numer.into(), denom.into())
}
