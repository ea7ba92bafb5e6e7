//! Linear-algebra kernels bound per scalar type.
//!
//! One `Algebra` impl binds to each supported element type at compile time.
//! Integer matrices run portable loops; float matrices delegate to the
//! vectorized [`compute`](crate::compute) backend. Operator-level code stays
//! element-type-agnostic through the trait.

use crate::compute;
use crate::primitives::{Matrix, Scalar};

/// Per-scalar strategy for norm, scaling, transposition, and value exchange.
///
/// Monomorphized at compile time: there is no runtime type switch, and a
/// matrix over an unsupported element type does not instantiate.
pub trait Algebra: Scalar {
    /// The Euclidean norm of the matrix.
    fn norm(a: &Matrix<Self>) -> Self;
    /// Multiply each value in the matrix by a constant, in place.
    fn scale(a: &mut Matrix<Self>, k: Self);
    /// Transpose the matrix into a fresh `cols x rows` result.
    fn transpose(a: &Matrix<Self>) -> Matrix<Self>;
    /// Exchange the contents of two equally shaped matrices.
    fn swap_values(a: &mut Matrix<Self>, b: &mut Matrix<Self>);
}

macro_rules! impl_algebra_int {
    ($($t:ty),*) => {
        $(
            impl Algebra for $t {
                /// Wrapping sum of squares with the square root taken in
                /// `f32` and truncated back. Lossy for large values and
                /// silent on overflow; this matches the portable integer
                /// strategy's documented behavior.
                fn norm(a: &Matrix<$t>) -> $t {
                    let mut sum_of_squares: $t = 0;
                    for &v in a.as_slice() {
                        sum_of_squares = sum_of_squares.wrapping_add(v.wrapping_mul(v));
                    }
                    (sum_of_squares as f32).sqrt() as $t
                }

                fn scale(a: &mut Matrix<$t>, k: $t) {
                    *a = &*a * k;
                }

                fn transpose(a: &Matrix<$t>) -> Matrix<$t> {
                    let mut transposed = Matrix::zeros(a.n_cols(), a.n_rows());
                    for i in 0..a.n_rows() {
                        for j in 0..a.n_cols() {
                            transposed.set(j, i, a.get(i, j));
                        }
                    }
                    transposed
                }

                fn swap_values(a: &mut Matrix<$t>, b: &mut Matrix<$t>) {
                    assert_eq!(
                        a.shape(),
                        b.shape(),
                        "matrices must have the same shape"
                    );
                    std::mem::swap(a.data_mut(), b.data_mut());
                }
            }
        )*
    };
}

impl_algebra_int!(i32, i64);

macro_rules! impl_algebra_float {
    ($t:ty, $norm:path, $scale:path, $swap:path, $transpose:path) => {
        impl Algebra for $t {
            fn norm(a: &Matrix<$t>) -> $t {
                $norm(a.as_slice())
            }

            fn scale(a: &mut Matrix<$t>, k: $t) {
                $scale(a.as_mut_slice(), k);
            }

            fn transpose(a: &Matrix<$t>) -> Matrix<$t> {
                let (rows, cols) = a.shape();
                let mut transposed = Matrix::zeros(cols, rows);
                $transpose(a.as_slice(), rows, cols, transposed.as_mut_slice());
                transposed
            }

            fn swap_values(a: &mut Matrix<$t>, b: &mut Matrix<$t>) {
                assert_eq!(a.shape(), b.shape(), "matrices must have the same shape");
                $swap(a.as_mut_slice(), b.as_mut_slice());
            }
        }
    };
}

impl_algebra_float!(
    f32,
    compute::norm2_f32,
    compute::scale_f32,
    compute::swap_f32,
    compute::transpose_f32
);
impl_algebra_float!(
    f64,
    compute::norm2_f64,
    compute::scale_f64,
    compute::swap_f64,
    compute::transpose_f64
);

impl<T: Algebra> Matrix<T> {
    /// The Euclidean norm of the matrix. Also known as the 2-norm.
    ///
    /// For integer matrices the sum of squares accumulates with wrapping
    /// arithmetic and the root is truncated back to the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::prelude::*;
    ///
    /// let m = Matrix::from_rows(vec![vec![3.0_f64, 4.0]]).unwrap();
    /// assert_eq!(m.norm(), 5.0);
    /// ```
    #[must_use]
    pub fn norm(&self) -> T {
        T::norm(self)
    }

    /// Multiply each value in the matrix by a constant, in place.
    ///
    /// Integer matrices go through the elementwise multiply operator; float
    /// matrices scale their buffer through the vectorized backend.
    pub fn scale(&mut self, k: T) {
        T::scale(self, k);
    }

    /// Transpose the matrix and return the result.
    #[must_use]
    pub fn transpose(&self) -> Self {
        T::transpose(self)
    }
}

/// Exchange the values of two equally shaped matrices.
///
/// Both matrices end up fully updated or the call panics before either is
/// touched.
///
/// ```
/// use matriz::prelude::*;
///
/// let mut a = Matrix::from_rows(vec![vec![2.0_f32, 3.0, 4.0], vec![5.0, 6.0, 7.0]]).unwrap();
/// let mut b = Matrix::from_rows(vec![vec![9.0_f32, 8.0, 7.0], vec![10.0, 12.0, 13.0]]).unwrap();
/// swap_values(&mut a, &mut b);
/// assert_eq!(a.get(0, 0), 9.0);
/// assert_eq!(b.get(0, 0), 2.0);
/// ```
///
/// # Panics
///
/// Panics if the shapes differ.
pub fn swap_values<T: Algebra>(a: &mut Matrix<T>, b: &mut Matrix<T>) {
    T::swap_values(a, b);
}

#[cfg(test)]
#[path = "algebra_tests.rs"]
mod tests;
