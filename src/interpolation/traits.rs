use num_rational::BigRational;

pub trait Interpolant {
    /// evaluates single point
    /// same as the inherent [`Interpolator::compute`](crate::interpolation::Interpolator::compute),
    /// use this one when generic over interpolants
    fn compute(&self, x: &BigRational) -> BigRational;

    /// evaluates many points
    #[inline]
    fn compute_many(&self, xs: &[BigRational]) -> Vec<BigRational> {
        xs.iter().map(|xq| self.compute(xq)).collect()
    }
}
