//! Exponential-family elementwise maps for float matrices.
//!
//! Only the float element types implement [`Exponential`]; calling `exp` on
//! an integer matrix is rejected at compile time.

use crate::compute;
use crate::primitives::{Matrix, Scalar};

/// Elementwise exponential maps, bound per float type at compile time.
pub trait Exponential: Scalar {
    /// e raised to each element.
    fn exp(a: &Matrix<Self>) -> Matrix<Self>;
    /// 2 raised to each element.
    fn exp2(a: &Matrix<Self>) -> Matrix<Self>;
    /// e raised to each element, minus one.
    fn expm1(a: &Matrix<Self>) -> Matrix<Self>;
}

macro_rules! impl_exponential {
    ($t:ty, $exp:path, $exp2:path, $expm1:path) => {
        impl Exponential for $t {
            fn exp(a: &Matrix<$t>) -> Matrix<$t> {
                let mut out = Matrix::like(a);
                $exp(a.as_slice(), out.as_mut_slice());
                out
            }

            fn exp2(a: &Matrix<$t>) -> Matrix<$t> {
                let mut out = Matrix::like(a);
                $exp2(a.as_slice(), out.as_mut_slice());
                out
            }

            fn expm1(a: &Matrix<$t>) -> Matrix<$t> {
                let mut out = Matrix::like(a);
                $expm1(a.as_slice(), out.as_mut_slice());
                out
            }
        }
    };
}

impl_exponential!(f32, compute::exp_f32, compute::exp2_f32, compute::expm1_f32);
impl_exponential!(f64, compute::exp_f64, compute::exp2_f64, compute::expm1_f64);

impl<T: Exponential> Matrix<T> {
    /// Calculate the exponential of each matrix element.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::prelude::*;
    ///
    /// let m = Matrix::<f64>::zeros(2, 2);
    /// assert_eq!(m.exp(), Matrix::ones(2, 2));
    /// ```
    #[must_use]
    pub fn exp(&self) -> Self {
        T::exp(self)
    }

    /// Calculate 2 raised to the power of each matrix element.
    #[must_use]
    pub fn exp2(&self) -> Self {
        T::exp2(self)
    }

    /// Calculate the exponential minus one of each matrix element.
    #[must_use]
    pub fn expm1(&self) -> Self {
        T::expm1(self)
    }
}

#[cfg(test)]
#[path = "exponential_tests.rs"]
mod tests;
