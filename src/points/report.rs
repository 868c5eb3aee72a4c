//! Defines the [`LoadReport`] returned when feeding point lists into an
//! [`Interpolator`](crate::interpolation::Interpolator).

use num_rational::BigRational;


/// Why an input line (or trailing token) was not inserted.
/// - [`SkipReason::MissingY`]          : an `x` with no `y` after it
/// - [`SkipReason::InvalidLiteral`]    : a token is not a rational literal, or its
///                                       exponent is out of range
/// - [`SkipReason::DuplicateAbscissa`] : `x` is already stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingY          { x: String },
    InvalidLiteral    { token: String },
    DuplicateAbscissa { x: BigRational },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingY { x }          => write!(f, "no y value for x = {x}"),
            SkipReason::InvalidLiteral { token } => write!(f, "invalid numeric literal {token:?}"),
            SkipReason::DuplicateAbscissa { x } => write!(f, "x = {x} already exists"),
        }
    }
}


/// A skipped entry.
/// - `line`   : 1-based line number for files, 1-based pair index for token lists
/// - `reason` : [`SkipReason`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line  : usize,
    pub reason: SkipReason,
}


/// Summary of a load.
///
/// [`LoadReport`]
/// - `added`   : number of points inserted
/// - `skipped` : entries that were not inserted, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub added  : usize,
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub(crate) fn skip(&mut self, line: usize, reason: SkipReason) {
        log::warn!("skipping entry {line}: {reason}");
        self.skipped.push(SkippedLine { line, reason });
    }
}
