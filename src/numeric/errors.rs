use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("invalid numeric literal {token:?}: expected an integer, a ratio `a/b` or a decimal")]
    InvalidNumericLiteral { token: String },

    #[error("exponent out of range in {token:?}: magnitude must be <= {limit}")]
    ExponentOutOfRange { token: String, limit: u64 },
}
