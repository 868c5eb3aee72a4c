pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub use algorithms::Algorithm;
pub use interpolator::Interpolator;
pub use traits::Interpolant;

pub mod interpolator;
pub(crate) mod divided;
pub(crate) mod newton;
pub(crate) mod render;
