//! Matrix type for 2D numeric data.

use serde::{Deserialize, Serialize};

use super::Scalar;
use crate::error::{MatrizError, Result};

/// A dense 2D matrix of numeric values (row-major storage).
///
/// Element `(i, j)` lives at buffer offset `i * cols + j`. The buffer length
/// is always `rows * cols`, and both dimensions are at least 1. Copying a
/// matrix duplicates its buffer; two live matrices never alias storage.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Build from parts whose invariants the caller has already established.
    pub(crate) fn from_raw_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Mutable access to the backing buffer, for whole-buffer exchange.
    pub(crate) fn data_mut(&mut self) -> &mut Vec<T> {
        &mut self.data
    }
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a flat vector of row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or if the data length
    /// doesn't match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::ZeroDimension { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrizError::ShapeMismatch {
                expected: format!("{rows}x{cols} ({} elements)", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from nested rows, e.g. a literal
    /// `vec![vec![1.0, 2.0], vec![3.0, 4.0]]`.
    ///
    /// Rectangularity is checked before anything is copied.
    ///
    /// # Errors
    ///
    /// Returns an error if the outer or first inner sequence is empty, or if
    /// any row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrizError::ZeroDimension {
                rows: n_rows,
                cols: n_cols,
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrizError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    actual: row.len(),
                });
            }
        }
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a slice into the backing buffer.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        &self.data[start..end]
    }

    /// Returns a column as a freshly collected vector.
    ///
    /// # Panics
    ///
    /// Panics if `col_idx` is out of bounds.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vec<T> {
        assert!(col_idx < self.cols, "index out of bounds");
        (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect()
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the underlying row-major data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(
            rows >= 1 && cols >= 1,
            "{}",
            MatrizError::ZeroDimension { rows, cols }
        );
        Self {
            data: vec![T::ZERO; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of ones.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        assert!(
            rows >= 1 && cols >= 1,
            "{}",
            MatrizError::ZeroDimension { rows, cols }
        );
        Self {
            data: vec![T::ONE; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::ONE;
        }
        m
    }

    /// Creates a zero-filled matrix with the same shape as `other`.
    #[must_use]
    pub fn like(other: &Self) -> Self {
        Self::zeros(other.rows, other.cols)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
