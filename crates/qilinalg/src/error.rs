//! Error types for qilinalg.

use thiserror::Error;

/// Errors that can occur when validating arguments to qilinalg operations.
///
/// Every failure is a synchronous argument-validation error raised before
/// any computation proceeds; there is no partial success.
#[derive(Debug, Error)]
pub enum QiError {
    /// A dimension argument is zero, not a perfect square where one is
    /// required, or does not divide the data length.
    #[error("invalid dimension: {dim}")]
    InvalidDimension { dim: usize },

    /// Basis index out of range for the given dimension.
    #[error("index {index} out of range for dimension {dim}")]
    InvalidIndex { index: usize, dim: usize },

    /// Size mismatch between data length and expected number of elements.
    #[error("size mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Matrix must be square.
    #[error("matrix must be square: got {rows}x{cols}")]
    NotSquareMatrix { rows: usize, cols: usize },

    /// Invalid permutation: wrong length, out-of-range entry, or duplicate.
    #[error("invalid permutation {perm:?} for {ndim} axes")]
    InvalidPermutation { perm: Vec<usize>, ndim: usize },

    /// Operation requires a specific tensor rank.
    #[error("expected tensor of rank {expected}, got rank {actual}")]
    RankMismatch { expected: usize, actual: usize },

    /// Wrong number of indices provided to an element accessor.
    #[error("wrong number of indices: expected {expected}, got {actual}")]
    WrongNumberOfIndices { expected: usize, actual: usize },

    /// Mixing parameter outside the closed interval [0, 1].
    #[error("mixing parameter {alpha} outside [0, 1]")]
    InvalidMixingParameter { alpha: f64 },
}
