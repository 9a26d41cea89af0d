//! Column-major stride bookkeeping.
//!
//! All tensors in this crate store their elements in column-major (Fortran)
//! order: the first axis varies fastest. The quantum-information formulas in
//! [`crate::vectorize`] and [`crate::permute_systems`] assume the opposite,
//! row-major composite-index convention; the bridging between the two is done
//! explicitly at those call sites, never implicitly here.

/// Compute column-major strides for a shape.
///
/// For shape `[d0, d1, d2, ...]` the strides are `[1, d0, d0*d1, ...]`.
///
/// # Examples
///
/// ```
/// use qilinalg::strides::compute_strides;
///
/// assert_eq!(compute_strides(&[2, 2, 3]), vec![1, 2, 4]);
/// assert_eq!(compute_strides(&[]), vec![]);
/// ```
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = Vec::with_capacity(shape.len());
    let mut stride = 1;
    for &dim in shape {
        strides.push(stride);
        stride *= dim;
    }
    strides
}

/// Map cartesian indices to a linear storage index.
#[inline]
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides.iter())
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}

/// Map a linear storage index back to cartesian indices for a shape.
pub fn linear_to_cartesian(mut linear: usize, shape: &[usize]) -> Vec<usize> {
    let mut indices = Vec::with_capacity(shape.len());
    for &dim in shape {
        indices.push(linear % dim);
        linear /= dim;
    }
    indices
}
