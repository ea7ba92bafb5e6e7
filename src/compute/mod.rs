//! Vectorized compute backend for float matrices.
//!
//! Buffer-level kernels behind the float `Algebra`/`Exponential` impls:
//! squared-norm, in-place scaling, and full-buffer exchange use AVX2 inner
//! loops on `x86_64` when the CPU supports them, with scalar tails and a
//! portable fallback everywhere else. Transpose uses a cache-blocked kernel.
//! The elementwise exponential maps are straight loops over the buffer.
//!
//! Capabilities are detected once at runtime and cached; the per-scalar
//! strategy choice itself is made at compile time by the trait impls that
//! call into this module.

use std::sync::OnceLock;

/// SIMD capabilities detected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimdCapability {
    pub avx2: bool,
    pub fma: bool,
}

static DETECTED: OnceLock<SimdCapability> = OnceLock::new();

impl SimdCapability {
    /// Detect SIMD capabilities for the current CPU.
    pub fn detect() -> &'static SimdCapability {
        DETECTED.get_or_init(|| {
            #[cfg(target_arch = "x86_64")]
            {
                SimdCapability {
                    avx2: is_x86_feature_detected!("avx2"),
                    fma: is_x86_feature_detected!("fma"),
                }
            }

            #[cfg(not(target_arch = "x86_64"))]
            {
                SimdCapability {
                    avx2: false,
                    fma: false,
                }
            }
        })
    }

    /// Whether the AVX2 kernels can run.
    pub fn has_simd(&self) -> bool {
        self.avx2
    }
}

/// Euclidean norm of the full buffer.
pub fn norm2_f32(v: &[f32]) -> f32 {
    #[cfg(target_arch = "x86_64")]
    {
        let cap = SimdCapability::detect();
        if cap.avx2 && cap.fma {
            // Safety: AVX2 and FMA availability checked above.
            return unsafe { sum_squares_avx2_f32(v) }.sqrt();
        }
    }
    v.iter().map(|&x| x * x).sum::<f32>().sqrt()
}

/// Euclidean norm of the full buffer.
pub fn norm2_f64(v: &[f64]) -> f64 {
    #[cfg(target_arch = "x86_64")]
    {
        let cap = SimdCapability::detect();
        if cap.avx2 && cap.fma {
            // Safety: AVX2 and FMA availability checked above.
            return unsafe { sum_squares_avx2_f64(v) }.sqrt();
        }
    }
    v.iter().map(|&x| x * x).sum::<f64>().sqrt()
}

/// In-place multiply-by-scalar over the full buffer.
pub fn scale_f32(v: &mut [f32], k: f32) {
    #[cfg(target_arch = "x86_64")]
    {
        if SimdCapability::detect().avx2 {
            // Safety: AVX2 availability checked above.
            unsafe { scale_avx2_f32(v, k) };
            return;
        }
    }
    for x in v {
        *x *= k;
    }
}

/// In-place multiply-by-scalar over the full buffer.
pub fn scale_f64(v: &mut [f64], k: f64) {
    #[cfg(target_arch = "x86_64")]
    {
        if SimdCapability::detect().avx2 {
            // Safety: AVX2 availability checked above.
            unsafe { scale_avx2_f64(v, k) };
            return;
        }
    }
    for x in v {
        *x *= k;
    }
}

/// Exchange the contents of two equally sized buffers.
///
/// # Panics
///
/// Panics if the buffers differ in length.
pub fn swap_f32(a: &mut [f32], b: &mut [f32]) {
    assert_eq!(a.len(), b.len(), "buffers must have the same length");
    #[cfg(target_arch = "x86_64")]
    {
        if SimdCapability::detect().avx2 {
            // Safety: AVX2 availability checked above; lengths match.
            unsafe { swap_avx2_f32(a, b) };
            return;
        }
    }
    a.swap_with_slice(b);
}

/// Exchange the contents of two equally sized buffers.
///
/// # Panics
///
/// Panics if the buffers differ in length.
pub fn swap_f64(a: &mut [f64], b: &mut [f64]) {
    assert_eq!(a.len(), b.len(), "buffers must have the same length");
    #[cfg(target_arch = "x86_64")]
    {
        if SimdCapability::detect().avx2 {
            // Safety: AVX2 availability checked above; lengths match.
            unsafe { swap_avx2_f64(a, b) };
            return;
        }
    }
    a.swap_with_slice(b);
}

/// Tile edge for the blocked transpose. 32x32 f64 tiles stay within L1.
const TILE: usize = 32;

macro_rules! transpose_impl {
    ($name:ident, $t:ty) => {
        /// Transpose a `rows x cols` row-major buffer into a `cols x rows`
        /// destination, visiting tiles to keep both sides cache-resident.
        pub fn $name(src: &[$t], rows: usize, cols: usize, dst: &mut [$t]) {
            debug_assert_eq!(src.len(), rows * cols);
            debug_assert_eq!(dst.len(), rows * cols);
            for i0 in (0..rows).step_by(TILE) {
                let i_end = (i0 + TILE).min(rows);
                for j0 in (0..cols).step_by(TILE) {
                    let j_end = (j0 + TILE).min(cols);
                    for i in i0..i_end {
                        for j in j0..j_end {
                            dst[j * rows + i] = src[i * cols + j];
                        }
                    }
                }
            }
        }
    };
}

transpose_impl!(transpose_f32, f32);
transpose_impl!(transpose_f64, f64);

macro_rules! unary_map_impl {
    ($($name:ident, $t:ty, $method:ident;)*) => {
        $(
            /// Elementwise map over the full buffer into `dst`.
            pub fn $name(src: &[$t], dst: &mut [$t]) {
                debug_assert_eq!(src.len(), dst.len());
                for (d, s) in dst.iter_mut().zip(src) {
                    *d = s.$method();
                }
            }
        )*
    };
}

unary_map_impl! {
    exp_f32, f32, exp;
    exp2_f32, f32, exp2;
    expm1_f32, f32, exp_m1;
    exp_f64, f64, exp;
    exp2_f64, f64, exp2;
    expm1_f64, f64, exp_m1;
}

/// Sum of squares, 8 lanes at a time with a scalar tail.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
unsafe fn sum_squares_avx2_f32(v: &[f32]) -> f32 {
    use std::arch::x86_64::*;

    let mut acc = _mm256_setzero_ps();
    let mut i = 0;
    while i + 8 <= v.len() {
        let x = _mm256_loadu_ps(v.as_ptr().add(i));
        acc = _mm256_fmadd_ps(x, x, acc);
        i += 8;
    }
    let mut lanes = [0.0f32; 8];
    _mm256_storeu_ps(lanes.as_mut_ptr(), acc);
    let mut total: f32 = lanes.iter().sum();
    while i < v.len() {
        total += v[i] * v[i];
        i += 1;
    }
    total
}

/// Sum of squares, 4 lanes at a time with a scalar tail.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
unsafe fn sum_squares_avx2_f64(v: &[f64]) -> f64 {
    use std::arch::x86_64::*;

    let mut acc = _mm256_setzero_pd();
    let mut i = 0;
    while i + 4 <= v.len() {
        let x = _mm256_loadu_pd(v.as_ptr().add(i));
        acc = _mm256_fmadd_pd(x, x, acc);
        i += 4;
    }
    let mut lanes = [0.0f64; 4];
    _mm256_storeu_pd(lanes.as_mut_ptr(), acc);
    let mut total: f64 = lanes.iter().sum();
    while i < v.len() {
        total += v[i] * v[i];
        i += 1;
    }
    total
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn scale_avx2_f32(v: &mut [f32], k: f32) {
    use std::arch::x86_64::*;

    let kv = _mm256_set1_ps(k);
    let mut i = 0;
    while i + 8 <= v.len() {
        let p = v.as_mut_ptr().add(i);
        _mm256_storeu_ps(p, _mm256_mul_ps(_mm256_loadu_ps(p), kv));
        i += 8;
    }
    while i < v.len() {
        v[i] *= k;
        i += 1;
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn scale_avx2_f64(v: &mut [f64], k: f64) {
    use std::arch::x86_64::*;

    let kv = _mm256_set1_pd(k);
    let mut i = 0;
    while i + 4 <= v.len() {
        let p = v.as_mut_ptr().add(i);
        _mm256_storeu_pd(p, _mm256_mul_pd(_mm256_loadu_pd(p), kv));
        i += 4;
    }
    while i < v.len() {
        v[i] *= k;
        i += 1;
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn swap_avx2_f32(a: &mut [f32], b: &mut [f32]) {
    use std::arch::x86_64::*;

    let mut i = 0;
    while i + 8 <= a.len() {
        let pa = a.as_mut_ptr().add(i);
        let pb = b.as_mut_ptr().add(i);
        let va = _mm256_loadu_ps(pa);
        let vb = _mm256_loadu_ps(pb);
        _mm256_storeu_ps(pa, vb);
        _mm256_storeu_ps(pb, va);
        i += 8;
    }
    while i < a.len() {
        let t = a[i];
        a[i] = b[i];
        b[i] = t;
        i += 1;
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn swap_avx2_f64(a: &mut [f64], b: &mut [f64]) {
    use std::arch::x86_64::*;

    let mut i = 0;
    while i + 4 <= a.len() {
        let pa = a.as_mut_ptr().add(i);
        let pb = b.as_mut_ptr().add(i);
        let va = _mm256_loadu_pd(pa);
        let vb = _mm256_loadu_pd(pb);
        _mm256_storeu_pd(pa, vb);
        _mm256_storeu_pd(pb, va);
        i += 4;
    }
    while i < a.len() {
        let t = a[i];
        a[i] = b[i];
        b[i] = t;
        i += 1;
    }
}

#[cfg(test)]
#[path = "compute_tests.rs"]
mod tests;
