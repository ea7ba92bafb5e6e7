//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::algebra::{swap_values, Algebra};
pub use crate::error::{MatrizError, Result};
pub use crate::exponential::Exponential;
pub use crate::primitives::{Matrix, Scalar};
