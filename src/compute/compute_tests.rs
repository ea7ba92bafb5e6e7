pub(crate) use super::*;

fn norm_reference_f32(v: &[f32]) -> f32 {
    v.iter().map(|&x| x * x).sum::<f32>().sqrt()
}

fn norm_reference_f64(v: &[f64]) -> f64 {
    v.iter().map(|&x| x * x).sum::<f64>().sqrt()
}

#[test]
fn test_detect_is_consistent() {
    let cap = SimdCapability::detect();
    let cap2 = SimdCapability::detect();
    assert_eq!(cap, cap2);
}

#[test]
fn test_norm2_f32_matches_reference() {
    // 19 elements: two full 8-lane blocks plus a 3-element tail
    let v: Vec<f32> = (0..19).map(|i| (i as f32) * 0.25 - 2.0).collect();
    let fast = norm2_f32(&v);
    let reference = norm_reference_f32(&v);
    assert!((fast - reference).abs() < 1e-4);
}

#[test]
fn test_norm2_f64_matches_reference() {
    // 11 elements: two full 4-lane blocks plus a 3-element tail
    let v: Vec<f64> = (0..11).map(|i| f64::from(i) * 0.5 - 2.0).collect();
    let fast = norm2_f64(&v);
    let reference = norm_reference_f64(&v);
    assert!((fast - reference).abs() < 1e-10);
}

#[test]
fn test_norm2_small_buffers() {
    assert!((norm2_f32(&[3.0, 4.0]) - 5.0).abs() < 1e-6);
    assert!((norm2_f64(&[3.0, 4.0]) - 5.0).abs() < 1e-12);
}

#[test]
fn test_scale_f32() {
    let mut v: Vec<f32> = (0..19).map(|i| i as f32).collect();
    scale_f32(&mut v, 2.0);
    for (i, &x) in v.iter().enumerate() {
        assert!((x - 2.0 * i as f32).abs() < 1e-6);
    }
}

#[test]
fn test_scale_f64() {
    let mut v: Vec<f64> = (0..11).map(f64::from).collect();
    scale_f64(&mut v, -0.5);
    for (i, &x) in v.iter().enumerate() {
        assert!((x + 0.5 * (i as f64)).abs() < 1e-12);
    }
}

#[test]
fn test_swap_f32() {
    let mut a: Vec<f32> = (0..19).map(|i| i as f32).collect();
    let mut b: Vec<f32> = (0..19).map(|i| -(i as f32)).collect();
    let a0 = a.clone();
    let b0 = b.clone();
    swap_f32(&mut a, &mut b);
    assert_eq!(a, b0);
    assert_eq!(b, a0);
}

#[test]
fn test_swap_f64() {
    let mut a: Vec<f64> = (0..11).map(f64::from).collect();
    let mut b: Vec<f64> = (0..11).map(|i| f64::from(i) * 10.0).collect();
    let a0 = a.clone();
    let b0 = b.clone();
    swap_f64(&mut a, &mut b);
    assert_eq!(a, b0);
    assert_eq!(b, a0);
}

#[test]
#[should_panic(expected = "same length")]
fn test_swap_length_mismatch_panics() {
    let mut a = vec![1.0f32; 4];
    let mut b = vec![1.0f32; 5];
    swap_f32(&mut a, &mut b);
}

#[test]
fn test_transpose_f64_matches_naive() {
    // 37x41 exercises partial tiles on both edges
    let rows = 37;
    let cols = 41;
    let src: Vec<f64> = (0..rows * cols).map(|i| f64::from(i as u32)).collect();
    let mut dst = vec![0.0f64; rows * cols];
    transpose_f64(&src, rows, cols, &mut dst);
    for i in 0..rows {
        for j in 0..cols {
            assert_eq!(dst[j * rows + i], src[i * cols + j]);
        }
    }
}

#[test]
fn test_transpose_f32_involution() {
    let rows = 5;
    let cols = 3;
    let src: Vec<f32> = (0..rows * cols).map(|i| i as f32).collect();
    let mut once = vec![0.0f32; rows * cols];
    let mut twice = vec![0.0f32; rows * cols];
    transpose_f32(&src, rows, cols, &mut once);
    transpose_f32(&once, cols, rows, &mut twice);
    assert_eq!(src, twice);
}

#[test]
fn test_exp_maps() {
    let src = [0.0f64, 1.0, 2.0];
    let mut dst = [0.0f64; 3];

    exp_f64(&src, &mut dst);
    assert!((dst[0] - 1.0).abs() < 1e-12);
    assert!((dst[1] - std::f64::consts::E).abs() < 1e-12);

    exp2_f64(&src, &mut dst);
    assert_eq!(dst, [1.0, 2.0, 4.0]);

    expm1_f64(&src, &mut dst);
    assert!(dst[0].abs() < 1e-12);
    assert!((dst[1] - std::f64::consts::E + 1.0).abs() < 1e-12);
}

#[test]
fn test_exp_maps_f32() {
    let src = [0.0f32, 1.0, 3.0];
    let mut dst = [0.0f32; 3];

    exp2_f32(&src, &mut dst);
    assert_eq!(dst, [1.0, 2.0, 8.0]);

    exp_f32(&src, &mut dst);
    assert!((dst[1] - std::f32::consts::E).abs() < 1e-6);

    expm1_f32(&src, &mut dst);
    assert!(dst[0].abs() < 1e-6);
}
