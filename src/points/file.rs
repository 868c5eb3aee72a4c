//! Point files.
//!
//! One point per line, two whitespace-separated tokens:
//!
//! ```text
//! 1 3
//! 1/2 -10
//! 0.25 7
//! ```
//!
//! On load, blank lines are ignored and tokens past the second are
//! dropped. Lines with a single token, malformed literals and duplicate
//! abscissae are skipped and logged. Saving writes `x y` per stored
//! point in insertion order, which loads back into the same polynomial.


use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::interpolation::Interpolator;
use crate::points::errors::PointsError;
use crate::points::pairs::ingest;
use crate::points::report::{LoadReport, SkipReason};


/// Reads `x y` lines from `reader` into `interp`.
///
/// # Errors
/// - [`PointsError::Io`] if reading fails; points read so far stay inserted.
pub fn load_points<R: BufRead>(reader: R, interp: &mut Interpolator) -> Result<LoadReport, PointsError> {
    let mut report = LoadReport::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();

        match (tokens.next(), tokens.next()) {
            (Some(x), Some(y)) => ingest(interp, &mut report, idx + 1, x, y)?,
            (Some(x), None)    => report.skip(idx + 1, SkipReason::MissingY { x: x.to_string() }),
            // blank
            (None, _)          => {}
        }
    }

    Ok(report)
}


pub fn load_points_from_path<P: AsRef<Path>>(
    path  : P,
    interp: &mut Interpolator,
) -> Result<LoadReport, PointsError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let report = load_points(BufReader::new(file), interp)?;

    log::debug!(
        "loaded {} points from {} ({} skipped)",
        report.added,
        path.display(),
        report.skipped.len()
    );
    Ok(report)
}


/// Writes every stored point as `x y\n`, returns the number written.
pub fn save_points<W: Write>(mut writer: W, interp: &Interpolator) -> Result<usize, PointsError> {
    let mut written = 0;
    for (x, y) in interp.points() {
        writeln!(writer, "{x} {y}")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}


pub fn save_points_to_path<P: AsRef<Path>>(path: P, interp: &Interpolator) -> Result<usize, PointsError> {
    let path = path.as_ref();
    let written = save_points(BufWriter::new(File::create(path)?), interp)?;

    log::debug!("saved {written} points to {}", path.display());
    Ok(written)
}
