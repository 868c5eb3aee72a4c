use interpolant::interpolation::errors::InterpolationError;
use interpolant::interpolation::{Algorithm, Interpolator};
use num_rational::BigRational;

type TestResult = Result<(), InterpolationError>;

#[inline]
fn q(n: i64, d: i64) -> BigRational {
    BigRational::new(n.into(), d.into())
}

#[inline]
fn int(n: i64) -> BigRational {
    BigRational::from_integer(n.into())
}

fn scenario_points() -> Vec<(BigRational, BigRational)> {
    vec![
        (int(1),   int(3)),
        (q(1, 2),  int(-10)),
        (int(3),   int(2)),
        (int(5),   q(3, 2)),
        (int(7),   int(1)),
    ]
}

fn build(algorithm: Algorithm, points: &[(BigRational, BigRational)]) -> Result<Interpolator, InterpolationError> {
    let mut interp = Interpolator::with_algorithm(algorithm);
    for (x, y) in points {
        interp.add(x.clone(), y.clone())?;
    }
    Ok(interp)
}

#[test]
fn algorithm_selected_at_construction() {
    let interp = Interpolator::with_algorithm(Algorithm::DividedDifference);
    assert_eq!(interp.algorithm(), Algorithm::DividedDifference);
    assert_eq!(interp.algorithm().algorithm_name(), "divide");
    assert_eq!(Algorithm::default(), Algorithm::Newton);
}

#[test]
fn algorithm_from_str() -> TestResult {
    assert_eq!("newton".parse::<Algorithm>()?, Algorithm::Newton);
    assert_eq!(" Divide ".parse::<Algorithm>()?, Algorithm::DividedDifference);
    assert_eq!("divided-difference".parse::<Algorithm>()?, Algorithm::DividedDifference);
    assert_eq!(Algorithm::DividedDifference.to_string(), "divide");

    let err = "lagrange".parse::<Algorithm>().unwrap_err();
    assert!(matches!(err, InterpolationError::UnknownAlgorithm { ref got } if got == "lagrange"));
    Ok(())
}

#[test]
fn first_point_is_constant_term() -> TestResult {
    let interp = build(Algorithm::DividedDifference, &[(int(4), q(7, 3))])?;
    assert_eq!(interp.c_data(), &[q(7, 3)]);
    assert_eq!(interp.compute(&int(0)), q(7, 3));
    Ok(())
}

#[test]
fn five_points_exact_hits() -> TestResult {
    let points = scenario_points();
    let interp = build(Algorithm::DividedDifference, &points)?;

    assert_eq!(interp.size(), 5);
    for (x, y) in &points {
        assert_eq!(&interp.compute(x), y, "mismatch at x={x}");
    }
    Ok(())
}

#[test]
fn same_coefficients_as_newton() -> TestResult {
    let points = scenario_points();
    let newton  = build(Algorithm::Newton, &points)?;
    let divided = build(Algorithm::DividedDifference, &points)?;

    assert_eq!(newton.c_data(), divided.c_data());
    assert_eq!(newton.render(), divided.render());
    Ok(())
}

#[test]
fn duplicate_abscissa_leaves_state_unchanged() -> TestResult {
    let mut interp = build(Algorithm::DividedDifference, &scenario_points())?;
    let before = interp.clone();

    let err = interp.add(int(3), int(100)).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateAbscissa { ref x } if *x == int(3)));
    assert_eq!(interp.c_data(), before.c_data());
    assert_eq!(interp.x_data(), before.x_data());

    // the kept diagonal still extends correctly
    interp.add(int(-2), int(4))?;
    let newton = {
        let mut pts = scenario_points();
        pts.push((int(-2), int(4)));
        build(Algorithm::Newton, &pts)?
    };
    assert_eq!(interp.c_data(), newton.c_data());
    Ok(())
}
