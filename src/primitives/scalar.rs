//! Numeric capability base for matrix elements.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Arithmetic and formatting capabilities required of a matrix element.
///
/// Exactly one impl binds to each supported element type; a matrix over any
/// other type fails to compile. The `Debug` bound supplies the grid
/// formatter's per-value rendering, which for floats always carries at least
/// one fractional digit (`1.0`, not `1`).
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
}

macro_rules! impl_scalar {
    ($($t:ty => $zero:expr, $one:expr;)*) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )*
    };
}

impl_scalar! {
    i32 => 0, 1;
    i64 => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}
