//! Matriz: dense row-major matrices with per-scalar compute dispatch.
//!
//! `Matrix<T>` is a generic 2D matrix over `i32`, `i64`, `f32`, or `f64`
//! with value semantics and a fixed shape. Each element type binds its own
//! kernel strategy at compile time: integers run portable loops, floats run
//! through a vectorized backend with runtime CPU detection. Unsupported
//! element types fail to compile.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a: Matrix<f64> = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
//!
//! // True matrix product (2x3 * 3x2 = 2x2)
//! let c = &a * &b;
//! assert_eq!(c.shape(), (2, 2));
//! assert_eq!(c.get(0, 0), 22.0);
//!
//! // Scalar broadcast and elementwise arithmetic
//! let shifted = 5.0 + &a;
//! assert_eq!(shifted.get(0, 0), 6.0);
//! assert!((a.norm() - 9.539392).abs() < 1e-5);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the `Matrix` type and the `Scalar` capability base
//! - [`algebra`]: norm, scaling, transposition, and value exchange, bound
//!   per element type
//! - [`exponential`]: elementwise `exp`/`exp2`/`expm1` for float matrices
//! - [`compute`]: the vectorized buffer kernels behind the float paths
//! - [`error`]: error type and `Result` alias

pub mod algebra;
mod approx;
pub mod compute;
mod display;
pub mod error;
pub mod exponential;
mod ops;
pub mod prelude;
pub mod primitives;
