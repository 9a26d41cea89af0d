//! Scalar trait for tensor element types.

use faer_traits::ComplexField;
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

pub use faer::c64;

/// Trait for scalar field types supported by qilinalg.
///
/// This trait wraps faer's `ComplexField` with the additional bounds the
/// state formulas need: copy semantics, operator arithmetic, complex
/// conjugation and embedding of real constants.
pub trait Scalar:
    ComplexField
    + Copy
    + Debug
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + 'static
{
    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Complex conjugate (identity for real scalars).
    fn conj(self) -> Self;

    /// Embed a real constant into the scalar field.
    fn from_f64(x: f64) -> Self;
}

impl Scalar for f64 {
    fn one() -> Self {
        1.0
    }

    fn conj(self) -> Self {
        self
    }

    fn from_f64(x: f64) -> Self {
        x
    }
}

impl Scalar for c64 {
    fn one() -> Self {
        c64::new(1.0, 0.0)
    }

    fn conj(self) -> Self {
        c64::new(self.re, -self.im)
    }

    fn from_f64(x: f64) -> Self {
        c64::new(x, 0.0)
    }
}
