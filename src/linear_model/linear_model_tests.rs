pub(crate) use super::*;

#[test]
fn test_fit_simple_line() {
    // y = 2x + 1
    let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).expect("4x1 data");
    let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).expect("well-posed system");

    assert!(model.is_fitted());
    assert!((model.intercept() - 1.0).abs() < 1e-8);
    assert!((model.coefficients()[0] - 2.0).abs() < 1e-8);
    assert!(model.score(&x, &y) > 0.9999);
}

#[test]
fn test_fit_without_intercept() {
    // y = 3x through the origin.
    let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("3x1 data");
    let y = Vector::from_slice(&[3.0, 6.0, 9.0]);

    let mut model = LinearRegression::new().with_intercept(false);
    model.fit(&x, &y).expect("well-posed system");

    assert_eq!(model.intercept(), 0.0);
    assert!((model.coefficients()[0] - 3.0).abs() < 1e-8);
}

#[test]
fn test_fit_two_features() {
    // y = 1 + 2*x1 + 3*x2
    let x = Matrix::from_vec(
        4,
        2,
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
    )
    .expect("4x2 data");
    let y = Vector::from_slice(&[1.0, 3.0, 4.0, 6.0]);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).expect("well-posed system");

    assert!((model.intercept() - 1.0).abs() < 1e-8);
    assert!((model.coefficients()[0] - 2.0).abs() < 1e-8);
    assert!((model.coefficients()[1] - 3.0).abs() < 1e-8);
}

#[test]
fn test_predict() {
    let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).expect("4x1 data");
    let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).expect("well-posed system");

    let x_new = Matrix::from_vec(2, 1, vec![5.0, 6.0]).expect("2x1 data");
    let predictions = model.predict(&x_new);
    assert!((predictions[0] - 11.0).abs() < 1e-8);
    assert!((predictions[1] - 13.0).abs() < 1e-8);
}

#[test]
fn test_sample_target_mismatch() {
    let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("3x1 data");
    let y = Vector::from_slice(&[1.0, 2.0]);
    let mut model = LinearRegression::new();
    let err = model.fit(&x, &y).unwrap_err();
    assert!(matches!(err, MatrizError::DimensionMismatch { .. }));
}

#[test]
fn test_zero_samples() {
    let x = Matrix::<f64>::zeros(0, 1);
    let y = Vector::<f64>::zeros(0);
    let mut model = LinearRegression::new();
    assert!(model.fit(&x, &y).is_err());
}

#[test]
fn test_underdetermined_system() {
    // 2 samples, 2 features, intercept on: needs 3 samples.
    let x = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2 data");
    let y = Vector::from_slice(&[1.0, 2.0]);
    let mut model = LinearRegression::new();
    assert!(model.fit(&x, &y).is_err());
}

#[test]
fn test_collinear_features_singular() {
    // Second feature is a multiple of the first.
    let x = Matrix::from_vec(
        4,
        2,
        vec![1.0, 2.0, 2.0, 4.0, 3.0, 6.0, 4.0, 8.0],
    )
    .expect("4x2 data");
    let y = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    let mut model = LinearRegression::new();
    let err = model.fit(&x, &y).unwrap_err();
    assert!(matches!(err, MatrizError::SingularMatrix { .. }));
}

#[test]
fn test_not_fitted() {
    let model = LinearRegression::new();
    assert!(!model.is_fitted());
}

#[test]
#[should_panic(expected = "Model not fitted")]
fn test_predict_before_fit_panics() {
    let model = LinearRegression::new();
    let x = Matrix::from_vec(1, 1, vec![1.0]).expect("1x1 data");
    let _ = model.predict(&x);
}

#[test]
fn test_default_matches_new() {
    let a = LinearRegression::default();
    let b = LinearRegression::new();
    assert_eq!(a.is_fitted(), b.is_fitted());
    assert_eq!(a.intercept(), b.intercept());
}
