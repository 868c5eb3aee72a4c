use std::io::{Cursor, Write};

use interpolant::interpolation::{Algorithm, Interpolator};
use interpolant::points::errors::PointsError;
use interpolant::points::report::SkipReason;
use interpolant::points::{load_points, load_points_from_path, save_points, save_points_to_path};
use num_rational::BigRational;
use tempfile::NamedTempFile;

type TestResult = Result<(), PointsError>;

#[inline]
fn q(n: i64, d: i64) -> BigRational {
    BigRational::new(n.into(), d.into())
}

const SCENARIO: &str = "1 3\n1/2 -10\n3 2\n5 3/2\n7 1\n";

#[test]
fn load_from_reader() -> TestResult {
    let mut interp = Interpolator::new();
    let report = load_points(Cursor::new(SCENARIO), &mut interp)?;

    assert_eq!(report.added, 5);
    assert!(report.is_clean());
    assert_eq!(interp.size(), 5);
    assert_eq!(interp.compute(&q(5, 1)), q(3, 2));
    Ok(())
}

#[test]
fn blank_lines_and_extra_tokens() -> TestResult {
    let input = "\n  1   3  extra tokens\n\n\t2\t5\n   \n";
    let mut interp = Interpolator::new();
    let report = load_points(Cursor::new(input), &mut interp)?;

    assert_eq!(report.added, 2);
    assert!(report.is_clean());
    assert_eq!(interp.render(), "3 + 2(x - 1)");
    Ok(())
}

#[test]
fn malformed_lines_are_skipped_with_line_numbers() -> TestResult {
    let input = "1 3\n4\n1 8\nfoo 2\n2 5\n";
    let mut interp = Interpolator::new();
    let report = load_points(Cursor::new(input), &mut interp)?;

    assert_eq!(report.added, 2);
    let skipped: Vec<_> = report.skipped.iter().map(|s| (s.line, s.reason.clone())).collect();
    assert_eq!(
        skipped,
        vec![
            (2, SkipReason::MissingY { x: "4".to_string() }),
            (3, SkipReason::DuplicateAbscissa { x: q(1, 1) }),
            (4, SkipReason::InvalidLiteral { token: "foo".to_string() }),
        ]
    );
    assert_eq!(interp.compute(&q(0, 1)), q(1, 1));
    Ok(())
}

#[test]
fn save_writes_insertion_order() -> TestResult {
    let mut interp = Interpolator::new();
    load_points(Cursor::new(SCENARIO), &mut interp)?;

    let mut out = Vec::new();
    let written = save_points(&mut out, &interp)?;
    assert_eq!(written, 5);
    assert_eq!(String::from_utf8(out).unwrap(), SCENARIO);
    Ok(())
}

#[test]
fn save_empty_writes_nothing() -> TestResult {
    let mut out = Vec::new();
    assert_eq!(save_points(&mut out, &Interpolator::new())?, 0);
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn file_round_trip() -> TestResult {
    let mut original = Interpolator::with_algorithm(Algorithm::DividedDifference);
    load_points(Cursor::new(SCENARIO), &mut original)?;

    let file = NamedTempFile::new()?;
    assert_eq!(save_points_to_path(file.path(), &original)?, 5);

    let mut reloaded = Interpolator::new();
    let report = load_points_from_path(file.path(), &mut reloaded)?;

    assert_eq!(report.added, 5);
    assert_eq!(reloaded.x_data(), original.x_data());
    assert_eq!(reloaded.y_data(), original.y_data());
    assert_eq!(reloaded.render(), original.render());
    Ok(())
}

#[test]
fn load_from_written_file() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(file, "0 0\n1 1\n2 4\n")?;
    file.flush()?;

    let mut interp = Interpolator::new();
    load_points_from_path(file.path(), &mut interp)?;
    assert_eq!(interp.compute(&q(3, 1)), q(9, 1));
    Ok(())
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut interp = Interpolator::new();
    let err = load_points_from_path(dir.path().join("missing.txt"), &mut interp).unwrap_err();
    assert!(matches!(err, PointsError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    assert_eq!(interp.size(), 0);
}
