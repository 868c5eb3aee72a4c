//! Exact incremental polynomial interpolation.
//!
//! - [`interpolation`] : the [`Interpolator`](interpolation::Interpolator) core
//! - [`numeric`]       : rational literal parsing and decimal approximation
//! - [`points`]        : `x y` point lists to and from files

pub mod interpolation;
pub mod numeric;
pub mod points;
