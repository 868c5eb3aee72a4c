//! Feeding textual `x y` pairs into an [`Interpolator`].
//!
//! Shared by the token-list and file loaders: every pair goes through
//! [`parse_rational`] then [`Interpolator::add`]. Malformed literals and
//! duplicate abscissae are recorded as skips, never fatal.


use num_rational::BigRational;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::Interpolator;
use crate::numeric::errors::NumericError;
use crate::numeric::parse_rational;
use crate::points::errors::PointsError;
use crate::points::report::{LoadReport, SkipReason};


/// Parses `x`/`y` and inserts the point.
///
/// # Errors
/// - [`PointsError::Numeric`] if either token is malformed.
/// - [`PointsError::Interpolation`] if the interpolator rejects the point.
pub fn add_point(
    interp: &mut Interpolator,
    x     : &str,
    y     : &str,
) -> Result<(BigRational, BigRational), PointsError> {
    let x = parse_rational(x)?;
    let y = parse_rational(y)?;
    interp.add(x.clone(), y.clone())?;
    Ok((x, y))
}


/// Inserts one pair, turning recoverable failures into skips.
pub(crate) fn ingest(
    interp: &mut Interpolator,
    report: &mut LoadReport,
    line  : usize,
    x     : &str,
    y     : &str,
) -> Result<(), PointsError> {
    match add_point(interp, x, y) {
        Ok(_) => {
            report.added += 1;
            Ok(())
        }
        Err(PointsError::Numeric(
            NumericError::InvalidNumericLiteral { token } | NumericError::ExponentOutOfRange { token, .. },
        )) => {
            report.skip(line, SkipReason::InvalidLiteral { token });
            Ok(())
        }
        Err(PointsError::Interpolation(InterpolationError::DuplicateAbscissa { x })) => {
            report.skip(line, SkipReason::DuplicateAbscissa { x });
            Ok(())
        }
        Err(e) => Err(e),
    }
}


/// Inserts `x0 y0 x1 y1 ...` in order.
///
/// A trailing token without a partner is skipped as
/// [`SkipReason::MissingY`]. Skips are numbered by 1-based pair index.
///
/// # Errors
/// - Only interpolator failures other than a duplicate abscissa.
pub fn add_pairs<S: AsRef<str>>(
    tokens: &[S],
    interp: &mut Interpolator,
) -> Result<LoadReport, PointsError> {
    let mut report = LoadReport::new();

    for (i, pair) in tokens.chunks(2).enumerate() {
        match pair {
            [x, y] => ingest(interp, &mut report, i + 1, x.as_ref(), y.as_ref())?,
            [x]    => {
                let x: &str = x.as_ref();
                report.skip(i + 1, SkipReason::MissingY { x: x.to_string() });
            }
            _      => {}
        }
    }

    Ok(report)
}
