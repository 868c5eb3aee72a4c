//! Incremental exact polynomial interpolation.
//!
//! [`Interpolator`] stores points in insertion order together with the
//! Newton coefficients derived from them:
//!
//! ```text
//! x_data = [x0, x1, ..., x_{n-1}]
//! y_data = [y0, y1, ..., y_{n-1}]
//! c_data = [c0, c1, ..., c_{n-1}]
//!
//! P(x) = c0 + c1(x - x0) + ... + c_{n-1}(x - x0)...(x - x_{n-2})
//! ```
//!
//! Every successful [`Interpolator::add`] appends exactly one entry to each
//! sequence in O(n). Nothing is ever removed; to start over, construct a
//! new [`Interpolator`].


use std::fmt;

use num_rational::BigRational;
use num_traits::Signed;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::SampleCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::SampleReport;
use crate::interpolation::traits::Interpolant;
use crate::interpolation::{divided, newton, render};


/// Per-algorithm update state.
#[derive(Debug, Clone)]
enum CoefficientUpdate {
    Newton,
    DividedDifference { diagonal: Vec<BigRational> },
}

impl CoefficientUpdate {
    fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Newton            => CoefficientUpdate::Newton,
            Algorithm::DividedDifference => CoefficientUpdate::DividedDifference { diagonal: Vec::new() },
        }
    }

    fn algorithm(&self) -> Algorithm {
        match self {
            CoefficientUpdate::Newton                    => Algorithm::Newton,
            CoefficientUpdate::DividedDifference { .. } => Algorithm::DividedDifference,
        }
    }
}


/// Exact interpolating polynomial built one point at a time.
///
/// # Construction
/// - [`Interpolator::new`] uses [`Algorithm::Newton`].
/// - [`Interpolator::with_algorithm`] selects the update rule.
///
/// # Invariants
/// - `x_data`, `y_data`, `c_data` always have equal length.
/// - all stored abscissae are distinct.
/// - `compute(x_data[i]) == y_data[i]` exactly for every `i`.
#[derive(Debug, Clone)]
pub struct Interpolator {
    x_data: Vec<BigRational>,
    y_data: Vec<BigRational>,
    c_data: Vec<BigRational>,
    update: CoefficientUpdate,
    bounds: Option<(BigRational, BigRational)>,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpolator {
    pub fn new() -> Self {
        Self::with_algorithm(Algorithm::Newton)
    }

    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self {
            x_data: Vec::new(),
            y_data: Vec::new(),
            c_data: Vec::new(),
            update: CoefficientUpdate::for_algorithm(algorithm),
            bounds: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm { self.update.algorithm() }

    /// Number of stored points.
    pub fn size(&self) -> usize { self.x_data.len() }

    pub fn is_empty(&self) -> bool { self.x_data.is_empty() }

    /// Upper bound on the polynomial degree, `size - 1`.
    pub fn degree(&self) -> Option<usize> { self.size().checked_sub(1) }

    // getters
    pub fn x_data(&self) -> &[BigRational] { &self.x_data }
    pub fn y_data(&self) -> &[BigRational] { &self.y_data }
    pub fn c_data(&self) -> &[BigRational] { &self.c_data }

    pub fn min(&self) -> Option<&BigRational> { self.bounds.as_ref().map(|(lo, _)| lo) }
    pub fn max(&self) -> Option<&BigRational> { self.bounds.as_ref().map(|(_, hi)| hi) }

    /// Stored `(x, y)` pairs in insertion order.
    pub fn points(&self) -> impl Iterator<Item = (&BigRational, &BigRational)> + '_ {
        self.x_data.iter().zip(self.y_data.iter())
    }


    /// Inserts the point `(x, y)`.
    ///
    /// # Behavior
    /// - Rejects `x` if it is already stored, before any coefficient work.
    /// - Computes the new coefficient from the *pre-insertion* points only,
    ///   then appends the coefficient, `x` and `y`.
    /// - Updates `min`/`max`.
    ///
    /// # Errors
    /// - [`InterpolationError::DuplicateAbscissa`] if `x` is already stored.
    /// - [`InterpolationError::DivisionByZero`] if a coefficient divisor
    ///   vanishes for any other reason.
    ///
    /// On error nothing is mutated.
    pub fn add(&mut self, x: BigRational, y: BigRational) -> Result<(), InterpolationError> {
        if self.x_data.contains(&x) {
            return Err(InterpolationError::DuplicateAbscissa { x });
        }

        match &mut self.update {
            CoefficientUpdate::Newton => {
                let c = newton::next_coefficient(&self.x_data, &self.c_data, &x, &y)?;
                self.c_data.push(c);
            }
            CoefficientUpdate::DividedDifference { diagonal } => {
                let (next, c) = divided::next_diagonal(&self.x_data, diagonal, &x, &y)?;
                *diagonal = next;
                self.c_data.push(c);
            }
        }

        self.bounds = match self.bounds.take() {
            None => Some((x.clone(), x.clone())),
            Some((lo, hi)) => {
                let lo = if x < lo { x.clone() } else { lo };
                let hi = if x > hi { x.clone() } else { hi };
                Some((lo, hi))
            }
        };

        self.x_data.push(x);
        self.y_data.push(y);
        Ok(())
    }

    /// Inserts `(xs[i], ys[i])` in order.
    ///
    /// # Errors
    /// - [`InterpolationError::UnequalLength`] before inserting anything.
    /// - The first [`Interpolator::add`] error; earlier points stay inserted.
    pub fn extend(&mut self, xs: &[BigRational], ys: &[BigRational]) -> Result<(), InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::UnequalLength { x_len: xs.len(), y_len: ys.len() });
        }
        for (x, y) in xs.iter().zip(ys) {
            self.add(x.clone(), y.clone())?;
        }
        Ok(())
    }

    /// Evaluates the polynomial at `x`. `0` while empty.
    ///
    /// The call to use on a concrete [`Interpolator`]; [`Interpolant::compute`]
    /// forwards here for code generic over interpolants.
    pub fn compute(&self, x: &BigRational) -> BigRational {
        newton::evaluate(&self.x_data, &self.c_data, x).value
    }

    /// Canonical expanded Newton form.
    ///
    /// Zero terms are dropped and sign artifacts cleaned up, so
    /// `[3, -2]` over `x0 = -1` renders as `3 - 2(x + 1)`.
    pub fn render(&self) -> String {
        render::render(&self.x_data, &self.c_data)
    }


    /// Abscissa at a fractional position along the stored x values.
    ///
    /// For `0 <= location <= size - 1` returns
    /// `x[floor] + (x[ceil] - x[floor]) * (location - floor)`;
    /// integral locations hit stored abscissae exactly. `None` elsewhere.
    pub fn locate(&self, location: &BigRational) -> Option<BigRational> {
        if location.is_negative() || *location >= BigRational::from_integer(self.size().into()) {
            return None;
        }

        let floor = location.floor();
        let ceil  = location.ceil();
        let lo = self.x_data.get(index(&floor)?)?;
        let hi = self.x_data.get(index(&ceil)?)?;

        Some(lo + (hi - lo) * (location - floor))
    }


    /// Samples the polynomial on a regular grid for plotting.
    ///
    /// # Behavior
    /// - Range is `cfg.range` if set, else `[min - margin, max + margin]`.
    /// - Abscissae are `lo, lo + step, ...` strictly below `hi`; a
    ///   degenerate range `lo == hi` yields the single abscissa `lo`.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if no points are stored.
    pub fn sample(&self, cfg: &SampleCfg) -> Result<SampleReport, InterpolationError> {
        let (lo, hi) = match (&cfg.range, &self.bounds) {
            (_, None) => return Err(InterpolationError::EmptyInput),
            (Some((lo, hi)), _) => (lo.clone(), hi.clone()),
            (None, Some((min, max))) => (min - &cfg.margin, max + &cfg.margin),
        };

        let mut report = SampleReport::new(self.algorithm(), self.size());

        if lo == hi {
            let y = self.compute(&lo);
            report.push(lo, y);
            return Ok(report);
        }

        let mut xq = lo;
        while xq < hi {
            let y = self.compute(&xq);
            let next = &xq + &cfg.step;
            report.push(xq, y);
            xq = next;
        }

        Ok(report)
    }
}


#[inline]
fn index(v: &BigRational) -> Option<usize> {
    if !v.is_integer() || v.is_negative() {
        return None;
    }
    usize::try_from(v.to_integer()).ok()
}


impl Interpolant for Interpolator {
    /// Forwards to [`Interpolator::compute`].
    fn compute(&self, x: &BigRational) -> BigRational {
        Interpolator::compute(self, x)
    }
}

impl fmt::Display for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
