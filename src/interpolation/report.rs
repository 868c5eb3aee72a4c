//! Defines the struct returned by [`Interpolator::sample`].
//!
//! The report summarizes which update algorithm built the polynomial,
//! how many points it was built from, and the sampled curve itself.
//!
//! [`Interpolator::sample`]: crate::interpolation::Interpolator::sample

use num_rational::BigRational;

use crate::interpolation::algorithms::Algorithm;

/// Summary of a sampling run.
///
/// [`SampleReport`]
/// - `algorithm_name` : name of the update algorithm (e.g. `"newton"`)
/// - `n_provided`     : number of stored data points `(x, y)`
/// - `n_evaluated`    : number of sampled abscissae
/// - `x_eval`         : sampled abscissae, increasing
/// - `evaluated`      : interpolant value at each sampled abscissa
#[derive(Debug, Clone)]
pub struct SampleReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub x_eval: Vec<BigRational>,
    pub evaluated: Vec<BigRational>,
}

impl SampleReport {
    pub fn new(algorithm: Algorithm, n_provided: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated: 0,
            x_eval: Vec::new(),
            evaluated: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, x: BigRational, y: BigRational) {
        self.x_eval.push(x);
        self.evaluated.push(y);
        self.n_evaluated += 1;
    }
}
