//! Elementwise and matrix arithmetic.
//!
//! Checked methods (`add`, `sub`, `hadamard`, `matmul`) return `Result` and
//! verify shapes before touching any element. The operator impls are the
//! fail-fast surface over the same checks: a shape mismatch panics at the
//! call site with the corresponding error message, before any allocation or
//! write. Scalar↔matrix broadcasts are provided for every supported element
//! type in both operand orders.

use std::ops::{Add, AddAssign, Mul, Sub};

use crate::error::{MatrizError, Result};
use crate::primitives::{Matrix, Scalar};

fn shape_mismatch<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> MatrizError {
    MatrizError::ShapeMismatch {
        expected: format!("{}x{}", a.n_rows(), a.n_cols()),
        actual: format!("{}x{}", b.n_rows(), b.n_cols()),
    }
}

fn zip_map<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, f: impl Fn(T, T) -> T) -> Matrix<T> {
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Matrix::from_raw_parts(a.n_rows(), a.n_cols(), data)
}

impl<T: Scalar> Matrix<T> {
    pub(crate) fn map(&self, f: impl Fn(T) -> T) -> Self {
        let data = self.as_slice().iter().map(|&v| f(v)).collect();
        Self::from_raw_parts(self.n_rows(), self.n_cols(), data)
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(shape_mismatch(self, other));
        }
        Ok(zip_map(self, other, |a, b| a + b))
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(shape_mismatch(self, other));
        }
        Ok(zip_map(self, other, |a, b| a - b))
    }

    /// Multiplies another matrix element-wise (the Hadamard product).
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn hadamard(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(shape_mismatch(self, other));
        }
        Ok(zip_map(self, other, |a, b| a * b))
    }

    /// Multiplies each element by a scalar into a fresh matrix.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        self.map(|x| x * scalar)
    }

    /// Matrix-matrix multiplication.
    ///
    /// The product accumulates in the element type's own arithmetic; there
    /// is no widening.
    ///
    /// # Errors
    ///
    /// Returns an error if the left operand's column count doesn't match the
    /// right operand's row count.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.n_cols() != other.n_rows() {
            return Err(MatrizError::ShapeMismatch {
                expected: format!("{} rows on the right operand", self.n_cols()),
                actual: format!("{}x{}", other.n_rows(), other.n_cols()),
            });
        }

        let (m, n) = (self.n_rows(), other.n_cols());
        let mut result = vec![T::ZERO; m * n];
        for i in 0..m {
            for j in 0..n {
                let mut sum = T::ZERO;
                for k in 0..self.n_cols() {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * n + j] = sum;
            }
        }

        Ok(Self::from_raw_parts(m, n, result))
    }
}

impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Matrix<T> {
        Matrix::add(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Self) -> Matrix<T> {
        Matrix::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Self) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Matrix<T> {
        Matrix::matmul(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    /// In-place element-wise add.
    ///
    /// # Panics
    ///
    /// Panics before any element is written if the shapes differ.
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if self.shape() != rhs.shape() {
            panic!("{}", shape_mismatch(self, rhs));
        }
        for (d, &s) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *d += s;
        }
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Matrix<T>) {
        *self += &rhs;
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Add<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn add(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.map(|v| self + v)
                }
            }

            impl Add<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn add(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    self + &rhs
                }
            }

            impl Add<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                fn add(self, rhs: $t) -> Matrix<$t> {
                    self.map(|v| v + rhs)
                }
            }

            impl Add<$t> for Matrix<$t> {
                type Output = Matrix<$t>;

                fn add(self, rhs: $t) -> Matrix<$t> {
                    &self + rhs
                }
            }

            impl Sub<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                /// The scalar minus each element.
                fn sub(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.map(|v| self - v)
                }
            }

            impl Sub<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn sub(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    self - &rhs
                }
            }

            impl Sub<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                /// Each element minus the scalar.
                fn sub(self, rhs: $t) -> Matrix<$t> {
                    self.map(|v| v - rhs)
                }
            }

            impl Sub<$t> for Matrix<$t> {
                type Output = Matrix<$t>;

                fn sub(self, rhs: $t) -> Matrix<$t> {
                    &self - rhs
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.map(|v| self * v)
                }
            }

            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    self * &rhs
                }
            }

            impl Mul<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                fn mul(self, rhs: $t) -> Matrix<$t> {
                    self.map(|v| v * rhs)
                }
            }

            impl Mul<$t> for Matrix<$t> {
                type Output = Matrix<$t>;

                fn mul(self, rhs: $t) -> Matrix<$t> {
                    &self * rhs
                }
            }
        )*
    };
}

impl_scalar_ops!(i32, i64, f32, f64);

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
