//! Point-list error types.
//!
//! ┌ [`PointsError::Io`]            : reading or writing the underlying stream
//! ├ [`PointsError::Numeric`]       : a literal could not be parsed
//! └ [`PointsError::Interpolation`] : the interpolator rejected a point
//!
//! Loading never fails on a bad line; only `Io` ends a load early. The
//! other variants surface from [`add_point`](crate::points::pairs::add_point).

use thiserror::Error;

use crate::interpolation::errors::InterpolationError;
use crate::numeric::errors::NumericError;


#[derive(Debug, Error)]
pub enum PointsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
