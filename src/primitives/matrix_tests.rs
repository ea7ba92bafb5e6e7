pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-6);
}

#[test]
fn test_from_vec_length_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0]);
    assert!(matches!(result, Err(MatrizError::ShapeMismatch { .. })));
}

#[test]
fn test_from_vec_zero_dimension() {
    let result = Matrix::from_vec(0, 3, Vec::<f64>::new());
    assert!(matches!(result, Err(MatrizError::ZeroDimension { .. })));
    let result = Matrix::from_vec(3, 0, Vec::<f64>::new());
    assert!(matches!(result, Err(MatrizError::ZeroDimension { .. })));
}

#[test]
fn test_from_rows() {
    let m = Matrix::from_rows(vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]])
        .expect("rows are rectangular");
    assert_eq!(m.shape(), (2, 4));
    assert_eq!(m.get(0, 0), 1);
    assert_eq!(m.get(1, 3), 8);
}

#[test]
fn test_from_rows_mixed_magnitudes() {
    let m: Matrix<f64> = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0, 4.7],
        vec![5.0, 16.1, 7.0, 8.0],
        vec![10.0, 11.0, 12.0, 13.0],
    ])
    .expect("rows are rectangular");
    assert_eq!(m.shape(), (3, 4));
    assert!((m.get(1, 1) - 16.1).abs() < 1e-12);
}

#[test]
fn test_from_rows_ragged() {
    let result = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5]]);
    match result {
        Err(MatrizError::RaggedRows {
            row,
            expected,
            actual,
        }) => {
            assert_eq!(row, 1);
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("expected RaggedRows, got {other:?}"),
    }
}

#[test]
fn test_from_rows_empty() {
    let result = Matrix::<f64>::from_rows(vec![]);
    assert!(matches!(result, Err(MatrizError::ZeroDimension { .. })));
    let result = Matrix::<f64>::from_rows(vec![vec![]]);
    assert!(matches!(result, Err(MatrizError::ZeroDimension { .. })));
}

#[test]
fn test_zeros() {
    let m = Matrix::<f32>::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_ones() {
    let m = Matrix::<i32>::ones(3, 2);
    assert!(m.as_slice().iter().all(|&x| x == 1));
}

#[test]
fn test_eye() {
    let m = Matrix::<f32>::eye(3);
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((m.get(i, j) - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn test_like() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64; 6]).expect("2*3=6 elements");
    let fresh = Matrix::like(&m);
    assert_eq!(fresh.shape(), (2, 3));
    assert!(fresh.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
#[should_panic(expected = "positive")]
fn test_zeros_zero_dimension_panics() {
    let _ = Matrix::<f64>::zeros(0, 4);
}

#[test]
fn test_set() {
    let mut m = Matrix::<f32>::zeros(2, 2);
    m.set(0, 1, 5.0);
    assert!((m.get(0, 1) - 5.0).abs() < 1e-6);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_out_of_bounds_panics() {
    let m = Matrix::<i32>::zeros(2, 2);
    let _ = m.get(0, 2);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("2*3=6 elements");
    assert_eq!(m.row(1), &[4, 5, 6]);
}

#[test]
fn test_column() {
    let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("2*3=6 elements");
    assert_eq!(m.column(1), vec![2, 5]);
}

#[test]
fn test_clone_does_not_alias() {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).expect("2*2=4 elements");
    let mut copy = m.clone();
    copy.set(0, 0, 99);
    assert_eq!(m.get(0, 0), 1);
    assert_eq!(copy.get(0, 0), 99);
}

#[test]
fn test_equality_shape_sensitive() {
    let a = Matrix::from_vec(2, 3, vec![1; 6]).expect("2*3=6 elements");
    let b = Matrix::from_vec(3, 2, vec![1; 6]).expect("3*2=6 elements");
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

#[test]
fn test_serde_round_trip() {
    let m = Matrix::from_vec(2, 2, vec![1.5_f64, -2.0, 0.0, 4.25]).expect("2*2=4 elements");
    let json = serde_json::to_string(&m).expect("matrix serializes");
    let back: Matrix<f64> = serde_json::from_str(&json).expect("matrix deserializes");
    assert_eq!(m, back);
}
