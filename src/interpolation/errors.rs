use num_rational::BigRational;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    #[error("duplicate abscissa: x={x} already exists")]
    DuplicateAbscissa { x: BigRational },

    #[error("zero divisor while updating coefficients at x={x}")]
    DivisionByZero { x: BigRational },

    #[error("unknown algorithm {got:?}, expected `newton` or `divide`")]
    UnknownAlgorithm { got: String },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("empty interpolator: no points inserted")]
    EmptyInput,

    #[error("invalid sample step {got}: must be > 0")]
    InvalidStep { got: BigRational },

    #[error("invalid sample margin {got}: must be >= 0")]
    InvalidMargin { got: BigRational },

    #[error("invalid sample range: lo={lo} is greater than hi={hi}")]
    InvalidRange { lo: BigRational, hi: BigRational },
}
