//! Subsystem permutation of composite-system operators.
//!
//! An operator on `n` subsystems with local dimensions `dims = [d_0, ..,
//! d_{n-1}]` uses the row-major composite-index convention: subsystem 0 is
//! the most significant digit of a basis index (Kronecker-product order).
//! Tensor storage is column-major (first axis fastest), so reinterpreting a
//! `D x D` matrix as a rank-2n leg tensor yields the legs in *reversed*
//! subsystem order. Bridging the two conventions is done with an explicit
//! reverse -> permute -> reverse sandwich:
//!
//! ```text
//! reshape   D x D        -> legs [d_{n-1}..d_0, d_{n-1}..d_0]
//! transpose axis reversal -> legs [d_0..d_{n-1}, d_0..d_{n-1}]  (logical order)
//! transpose systems (applied to ket legs and bra legs symmetrically)
//! transpose axis reversal -> back to the storage leg order
//! reshape                -> D x D
//! ```
//!
//! Everything is a relabeling of element positions; the multiset of element
//! values is preserved, and with it Hermiticity, trace, and positive
//! semidefiniteness of the input.

use crate::error::QiError;
use crate::permute::validate_permutation;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// Permute the tensor-factor ordering of a composite-system operator.
///
/// `systems[k]` names the original subsystem placed at position `k` of the
/// result, for both the ket (row) and bra (column) index groups.
///
/// # Errors
///
/// - [`QiError::RankMismatch`] if `rho` is not rank-2.
/// - [`QiError::NotSquareMatrix`] if `rho` is not square.
/// - [`QiError::InvalidDimension`] if any local dimension is zero.
/// - [`QiError::ShapeMismatch`] if the product of `dims` is not the matrix
///   dimension.
/// - [`QiError::InvalidPermutation`] if `systems` is not a bijection on
///   `0..dims.len()`.
///
/// # Examples
///
/// ```
/// use qilinalg::{ketbra, permute_systems};
///
/// // |01><01| on two qubits; swapping the qubits gives |10><10|
/// let rho = ketbra::<f64>(1, 1, 4).unwrap();
/// let swapped = permute_systems(&rho, &[2, 2], &[1, 0]).unwrap();
/// assert_eq!(swapped, ketbra::<f64>(2, 2, 4).unwrap());
/// ```
pub fn permute_systems<T: Scalar>(
    rho: &Tensor<T>,
    dims: &[usize],
    systems: &[usize],
) -> Result<Tensor<T>, QiError> {
    if rho.ndim() != 2 {
        return Err(QiError::RankMismatch {
            expected: 2,
            actual: rho.ndim(),
        });
    }
    let (rows, cols) = (rho.shape()[0], rho.shape()[1]);
    if rows != cols {
        return Err(QiError::NotSquareMatrix { rows, cols });
    }
    if let Some(&zero) = dims.iter().find(|&&d| d == 0) {
        return Err(QiError::InvalidDimension { dim: zero });
    }
    let prod: usize = dims.iter().product();
    if prod != rows {
        return Err(QiError::ShapeMismatch {
            expected: rows,
            actual: prod,
        });
    }
    validate_permutation(systems, dims.len())?;

    let n = dims.len();

    // Leg shape of the matrix as a rank-2n tensor: dims reversed, once for
    // the ket legs and once for the bra legs.
    let mut legs: Vec<usize> = dims.iter().rev().copied().collect();
    legs.extend(dims.iter().rev().copied());

    // Axis reversal within each leg group. Involutive, so the same
    // permutation recovers the storage order afterwards.
    let reversal: Vec<usize> = (0..n).rev().chain((n..2 * n).rev()).collect();

    // The caller's permutation extended symmetrically: ket leg k and bra
    // leg n + k always move together.
    let mut symmetric: Vec<usize> = systems.to_vec();
    symmetric.extend(systems.iter().map(|&s| s + n));

    rho.reshape(&legs)?
        .permutedims(&reversal)?
        .permutedims(&symmetric)?
        .permutedims(&reversal)?
        .reshape(&[rows, rows])
}
