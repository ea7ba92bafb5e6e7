//! Tolerance-based matrix comparison.
//!
//! Exact equality is the derived `PartialEq` (equal shape and all elements
//! equal; a shape mismatch is simply unequal). The methods here compare
//! float matrices within absolute and relative tolerances instead.

use crate::primitives::Matrix;

macro_rules! impl_approx {
    ($t:ty) => {
        impl Matrix<$t> {
            /// Compare within the default tolerances: an absolute tolerance
            /// of the square root of machine epsilon and a relative
            /// tolerance of zero.
            ///
            /// # Examples
            ///
            /// ```
            /// use matriz::prelude::*;
            ///
            /// let a = Matrix::from_rows(vec![vec![1.0_f64, 2.0]]).unwrap();
            /// let b = Matrix::from_rows(vec![vec![1.0_f64, 2.0 + 1e-12]]).unwrap();
            /// assert!(a != b);
            /// assert!(a.approx_eq(&b));
            /// ```
            #[must_use]
            pub fn approx_eq(&self, other: &Self) -> bool {
                self.approx_eq_with(other, <$t>::EPSILON.sqrt(), 0.0)
            }

            /// Compare within explicit tolerances.
            ///
            /// Matrices of different shapes are never approximately equal.
            /// Each element pair must satisfy
            /// `|a - b| <= max(abs_tol, rel_tol * max(|a|, |b|))`.
            #[must_use]
            pub fn approx_eq_with(&self, other: &Self, abs_tol: $t, rel_tol: $t) -> bool {
                if self.shape() != other.shape() {
                    return false;
                }
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(&a, &b)| {
                        let diff = (a - b).abs();
                        diff <= abs_tol.max(rel_tol * a.abs().max(b.abs()))
                    })
            }
        }
    };
}

impl_approx!(f32);
impl_approx!(f64);

#[cfg(test)]
#[path = "approx_tests.rs"]
mod tests;
