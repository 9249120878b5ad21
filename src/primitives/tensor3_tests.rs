pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let t = Tensor3::from_vec(2, 2, 2, vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0])
        .expect("test data has correct dimensions: 2*2*2=8 elements");
    assert_eq!(t.shape(), (2, 2, 2));
    assert!((t.get(0, 0, 0) - 1.0).abs() < 1e-12);
    assert!((t.get(1, 1, 1) - 8.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let result = Tensor3::from_vec(2, 2, 2, vec![1.0f64, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_zeros() {
    let t = Tensor3::<f64>::zeros(3, 4, 5);
    assert_eq!(t.shape(), (3, 4, 5));
    assert_eq!(t.as_slice().len(), 60);
    assert!(t.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_get_set() {
    let mut t = Tensor3::<f64>::zeros(2, 3, 4);
    t.set(1, 2, 3, 0.5);
    t.set(0, 0, 0, 0.25);
    assert!((t.get(1, 2, 3) - 0.5).abs() < 1e-12);
    assert!((t.get(0, 0, 0) - 0.25).abs() < 1e-12);
    assert!((t.get(0, 1, 2) - 0.0).abs() < 1e-12);
}

#[test]
fn test_row_layout() {
    // Innermost axis is contiguous: row (i, j) starts at (i*dim1 + j)*dim2.
    let t = Tensor3::from_vec(2, 2, 3, (0..12).map(f64::from).collect())
        .expect("test data has correct dimensions: 2*2*3=12 elements");
    assert_eq!(t.row(0, 0), &[0.0, 1.0, 2.0]);
    assert_eq!(t.row(0, 1), &[3.0, 4.0, 5.0]);
    assert_eq!(t.row(1, 0), &[6.0, 7.0, 8.0]);
    assert_eq!(t.row(1, 1), &[9.0, 10.0, 11.0]);
}

#[test]
fn test_row_mut() {
    let mut t = Tensor3::<f64>::zeros(2, 2, 3);
    for v in t.row_mut(1, 0).iter_mut() {
        *v = 7.0;
    }
    assert_eq!(t.row(1, 0), &[7.0, 7.0, 7.0]);
    assert_eq!(t.row(1, 1), &[0.0, 0.0, 0.0]);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_get_out_of_bounds() {
    let t = Tensor3::<f64>::zeros(2, 2, 2);
    let _ = t.get(2, 0, 0);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_set_out_of_bounds_inner() {
    let mut t = Tensor3::<f64>::zeros(2, 2, 2);
    t.set(0, 0, 2, 1.0);
}
