pub(crate) use super::*;

#[test]
fn test_solve_square_system() {
    let a = Matrix::from_vec(2, 2, vec![2.0, 1.0, 5.0, 3.0]).expect("2x2 data");
    let qr = Qr::new(&a).expect("rows >= cols");
    let b = Vector::from_slice(&[4.0, 11.0]);
    let x = qr.solve(&b).expect("full rank");
    assert!((x[0] - 1.0).abs() < 1e-12);
    assert!((x[1] - 2.0).abs() < 1e-12);
}

#[test]
fn test_least_squares_line_fit() {
    // Fit y = c0 + c1*x through (0,1), (1,3), (2,5): exact line 1 + 2x.
    let a = Matrix::from_vec(3, 2, vec![1.0, 0.0, 1.0, 1.0, 1.0, 2.0]).expect("3x2 data");
    let b = Vector::from_slice(&[1.0, 3.0, 5.0]);
    let x = Qr::new(&a)
        .expect("rows >= cols")
        .solve(&b)
        .expect("full rank");
    assert_eq!(x.len(), 2);
    assert!((x[0] - 1.0).abs() < 1e-10);
    assert!((x[1] - 2.0).abs() < 1e-10);
}

#[test]
fn test_least_squares_minimizes_residual() {
    // Inconsistent system: residual is nonzero but minimal.
    // Points (0,0), (1,1), (2,1) with model y = c0 + c1*x.
    let a = Matrix::from_vec(3, 2, vec![1.0, 0.0, 1.0, 1.0, 1.0, 2.0]).expect("3x2 data");
    let b = Vector::from_slice(&[0.0, 1.0, 1.0]);
    let x = Qr::new(&a)
        .expect("rows >= cols")
        .solve(&b)
        .expect("full rank");
    // Closed form: c0 = 1/6, c1 = 1/2.
    assert!((x[0] - 1.0 / 6.0).abs() < 1e-10);
    assert!((x[1] - 0.5).abs() < 1e-10);
}

#[test]
fn test_underdetermined_rejected() {
    let a = Matrix::<f64>::zeros(2, 3);
    let err = Qr::new(&a).unwrap_err();
    assert!(matches!(err, MatrizError::DimensionMismatch { .. }));
}

#[test]
fn test_rank_deficient_is_singular() {
    // Second column is a multiple of the first.
    let a = Matrix::from_vec(4, 2, vec![1.0, 3.0, 1.0, 3.0, 1.0, 3.0, 1.0, 3.0])
        .expect("4x2 data");
    let qr = Qr::new(&a).expect("rows >= cols");
    assert!(!qr.is_full_rank());
    let err = qr
        .solve(&Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]))
        .unwrap_err();
    assert!(matches!(err, MatrizError::SingularMatrix { .. }));
}

#[test]
fn test_solve_rhs_length_mismatch() {
    let a = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("3x1 data");
    let qr = Qr::new(&a).expect("rows >= cols");
    assert!(qr.solve(&Vector::from_slice(&[1.0, 2.0])).is_err());
}

#[test]
fn test_solve_matrix_multiple_rhs() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 1.0, 0.0, 1.0]).expect("2x2 data");
    let rhs = Matrix::from_vec(2, 2, vec![3.0, 1.0, 2.0, 1.0]).expect("2x2 data");
    let x = Qr::new(&a)
        .expect("rows >= cols")
        .solve_matrix(&rhs)
        .expect("full rank");
    // A·X = rhs with A = [[1,1],[0,1]]: X = [[1,0],[2,1]].
    assert!((x.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((x.get(0, 1) - 0.0).abs() < 1e-12);
    assert!((x.get(1, 0) - 2.0).abs() < 1e-12);
    assert!((x.get(1, 1) - 1.0).abs() < 1e-12);
}

#[test]
fn test_f32_mirror() {
    let a = Matrix::from_vec(3, 1, vec![1.0_f32, 2.0, 3.0]).expect("3x1 data");
    let b = Vector::from_slice(&[2.0_f32, 4.0, 6.0]);
    let x = Qr::new(&a)
        .expect("rows >= cols")
        .solve(&b)
        .expect("full rank");
    assert!((x[0] - 2.0).abs() < 1e-5);
}
