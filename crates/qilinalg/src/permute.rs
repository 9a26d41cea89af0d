//! Generic axis permutation for dense tensors.
//!
//! Two-level structure: [`permutedims`] validates the permutation and
//! allocates the output, [`permutedims_into`] fills a pre-allocated output
//! with a naive stride-walking copy. The copy is a pure relabeling; no
//! arithmetic is performed on the elements.

use crate::error::QiError;
use crate::scalar::Scalar;
use crate::strides::{cartesian_to_linear, linear_to_cartesian};
use crate::tensor::Tensor;

/// Permute the axes of a tensor, returning a new tensor.
///
/// `perm[i]` gives the source axis for axis `i` of the result, so the
/// result satisfies `result[idx] == tensor[perm-applied idx]`, i.e.
/// `new_indices[i] = old_indices[perm[i]]`.
///
/// # Errors
///
/// Returns [`QiError::InvalidPermutation`] if `perm` is not a permutation
/// of `0..ndim` (wrong length, out-of-range entry, or duplicate).
///
/// # Examples
///
/// ```
/// use qilinalg::Tensor;
/// use qilinalg::permute::permutedims;
///
/// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
/// let tt = permutedims(&t, &[1, 0]).unwrap();
/// assert_eq!(tt.shape(), &[3, 2]);
/// assert_eq!(t.get(&[1, 2]), tt.get(&[2, 1]));
/// ```
pub fn permutedims<T: Scalar>(tensor: &Tensor<T>, perm: &[usize]) -> Result<Tensor<T>, QiError> {
    validate_permutation(perm, tensor.ndim())?;

    let new_shape: Vec<usize> = perm.iter().map(|&p| tensor.shape()[p]).collect();
    let mut result = Tensor::zeros(&new_shape);
    permutedims_into(&mut result, tensor, perm);
    Ok(result)
}

/// Permute tensor axes into an existing output tensor.
///
/// `dest` must already have the permuted shape; indices are assumed valid
/// (callers go through [`permutedims`]).
pub fn permutedims_into<T: Scalar>(dest: &mut Tensor<T>, src: &Tensor<T>, perm: &[usize]) {
    let old_shape = src.shape().to_vec();
    let new_strides = dest.strides().to_vec();

    for linear_old in 0..src.len() {
        let old_indices = linear_to_cartesian(linear_old, &old_shape);
        let new_indices: Vec<usize> = perm.iter().map(|&p| old_indices[p]).collect();
        let linear_new = cartesian_to_linear(&new_indices, &new_strides);
        dest.data_mut()[linear_new] = src.data()[linear_old];
    }
}

/// Check that `perm` is a bijection on `0..ndim`.
pub fn validate_permutation(perm: &[usize], ndim: usize) -> Result<(), QiError> {
    let invalid = || QiError::InvalidPermutation {
        perm: perm.to_vec(),
        ndim,
    };

    if perm.len() != ndim {
        return Err(invalid());
    }
    let mut seen = vec![false; ndim];
    for &p in perm {
        if p >= ndim || seen[p] {
            return Err(invalid());
        }
        seen[p] = true;
    }
    Ok(())
}
