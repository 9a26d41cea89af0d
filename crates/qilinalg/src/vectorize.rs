//! Row-major matrix vectorization (`res`) and its inverse (`unres`).
//!
//! The quantum-information convention vectorizes a matrix by rows:
//! element `(i, j)` of an `r x c` matrix lands at vector position
//! `i * c + j`. Tensor storage in this crate is column-major, so `res`
//! transposes before flattening and `unres` reshapes before transposing;
//! both are pure relabelings with no arithmetic.

use crate::error::QiError;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// Vectorize a matrix by rows.
///
/// Returns the rank-1 tensor `phi` with `phi[i * c + j] == rho[i, j]`.
/// Element values are carried over exactly; `unres(res(rho), c) == rho`
/// for every `r x c` matrix `rho`.
///
/// # Errors
///
/// Returns [`QiError::RankMismatch`] if the input is not rank-2.
///
/// # Examples
///
/// ```
/// use qilinalg::{res, Tensor};
///
/// // [[1, 2], [3, 4]] in column-major storage
/// let rho = Tensor::from_vec(vec![1.0, 3.0, 2.0, 4.0], &[2, 2]).unwrap();
/// let phi = res(&rho).unwrap();
/// assert_eq!(phi.data(), &[1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn res<T: Scalar>(rho: &Tensor<T>) -> Result<Tensor<T>, QiError> {
    if rho.ndim() != 2 {
        return Err(QiError::RankMismatch {
            expected: 2,
            actual: rho.ndim(),
        });
    }
    let len = rho.len();
    rho.permutedims(&[1, 0])?.reshape(&[len])
}

/// Invert [`res`] for a known column count.
///
/// Returns the `(len / cols) x cols` matrix `rho` with
/// `rho[i, j] == phi[i * cols + j]`.
///
/// # Errors
///
/// Returns [`QiError::RankMismatch`] if the input is not rank-1 and
/// [`QiError::InvalidDimension`] if `cols` is zero or does not divide the
/// vector length.
///
/// # Examples
///
/// ```
/// use qilinalg::{unres, Tensor};
///
/// let phi = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[6]).unwrap();
/// let rho = unres(&phi, 3).unwrap();
/// assert_eq!(rho.shape(), &[2, 3]);
/// assert_eq!(rho.get(&[0, 2]), Some(&3.0));
/// assert_eq!(rho.get(&[1, 0]), Some(&4.0));
/// ```
pub fn unres<T: Scalar>(phi: &Tensor<T>, cols: usize) -> Result<Tensor<T>, QiError> {
    if phi.ndim() != 1 {
        return Err(QiError::RankMismatch {
            expected: 1,
            actual: phi.ndim(),
        });
    }
    if cols == 0 || phi.len() % cols != 0 {
        return Err(QiError::InvalidDimension { dim: cols });
    }
    let rows = phi.len() / cols;
    phi.reshape(&[cols, rows])?.permutedims(&[1, 0])
}

/// Invert [`res`] assuming a square matrix.
///
/// The vector length must be a perfect square; a non-square length fails
/// with [`QiError::InvalidDimension`] rather than producing a truncated
/// matrix.
pub fn unres_square<T: Scalar>(phi: &Tensor<T>) -> Result<Tensor<T>, QiError> {
    let len = phi.len();
    let side = isqrt(len);
    if side * side != len {
        return Err(QiError::InvalidDimension { dim: len });
    }
    unres(phi, side)
}

/// Integer square root (floor).
pub(crate) fn isqrt(n: usize) -> usize {
    let mut s = (n as f64).sqrt() as usize;
    while s * s > n {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::c64;

    #[test]
    fn test_res_reads_rows() {
        // [[1, 2, 3], [4, 5, 6]] stored column-major
        let rho = Tensor::from_vec(vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0], &[2, 3]).unwrap();
        let phi = res(&rho).unwrap();
        assert_eq!(phi.shape(), &[6]);
        assert_eq!(phi.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_res_rejects_vectors() {
        let v = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        assert!(matches!(
            res(&v),
            Err(QiError::RankMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    fn test_roundtrip_generic<T: Scalar + From<f64>>(rows: usize, cols: usize) {
        let data: Vec<T> = (0..rows * cols).map(|x| T::from(x as f64 + 1.0)).collect();
        let rho = Tensor::from_vec(data, &[rows, cols]).unwrap();
        let back = unres(&res(&rho).unwrap(), cols).unwrap();
        assert_eq!(back, rho);
    }

    #[test]
    fn test_roundtrip_square_f64() {
        test_roundtrip_generic::<f64>(3, 3);
    }

    #[test]
    fn test_roundtrip_rectangular_f64() {
        test_roundtrip_generic::<f64>(2, 5);
        test_roundtrip_generic::<f64>(5, 2);
    }

    #[test]
    fn test_roundtrip_c64() {
        test_roundtrip_generic::<c64>(2, 3);
    }

    #[test]
    fn test_res_exact_complex() {
        let z = c64::new(0.5, -1.5);
        let rho = Tensor::from_vec(vec![z; 4], &[2, 2]).unwrap();
        let phi = res(&rho).unwrap();
        // pure relabeling: both components carried over exactly
        assert!(phi.data().iter().all(|&x| x == z));
    }

    #[test]
    fn test_unres_invalid_cols() {
        let phi = Tensor::from_vec(vec![1.0; 6], &[6]).unwrap();
        assert!(matches!(
            unres(&phi, 4),
            Err(QiError::InvalidDimension { dim: 4 })
        ));
        assert!(matches!(
            unres(&phi, 0),
            Err(QiError::InvalidDimension { dim: 0 })
        ));
    }

    #[test]
    fn test_unres_square() {
        let phi = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[4]).unwrap();
        let rho = unres_square(&phi).unwrap();
        assert_eq!(rho.shape(), &[2, 2]);
        assert_eq!(rho.get(&[0, 1]), Some(&2.0));
        assert_eq!(rho.get(&[1, 0]), Some(&3.0));
    }

    #[test]
    fn test_unres_square_prime_length() {
        let phi = Tensor::from_vec(vec![1.0; 7], &[7]).unwrap();
        assert!(matches!(
            unres_square(&phi),
            Err(QiError::InvalidDimension { dim: 7 })
        ));
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(35), 5);
        assert_eq!(isqrt(36), 6);
    }
}
