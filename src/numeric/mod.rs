pub mod errors;
pub mod parse;
pub mod decimal;
pub use decimal::approximate;
pub use parse::parse_rational;
