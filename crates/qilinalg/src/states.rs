//! Canonical state and projector constructors.
//!
//! Closed-form reference objects: standard basis kets and bras, outer
//! products, the maximally mixed state, the maximally entangled state, and
//! the Werner family interpolating between the two. All constructors are
//! generic over the scalar field and validate their arguments before
//! allocating anything.
//!
//! Indices are 0-based: `ket(0, 2)` is `[1, 0]`.

use crate::error::QiError;
use crate::scalar::Scalar;
use crate::tensor::Tensor;
use crate::vectorize::{isqrt, res};

/// Standard basis ket `|i>` in dimension `d`.
///
/// # Errors
///
/// Returns [`QiError::InvalidDimension`] for `d == 0` and
/// [`QiError::InvalidIndex`] for `i >= d`.
///
/// # Examples
///
/// ```
/// use qilinalg::ket;
///
/// assert_eq!(ket::<f64>(0, 2).unwrap().data(), &[1.0, 0.0]);
/// assert_eq!(ket::<f64>(1, 2).unwrap().data(), &[0.0, 1.0]);
/// ```
pub fn ket<T: Scalar>(i: usize, d: usize) -> Result<Tensor<T>, QiError> {
    if d == 0 {
        return Err(QiError::InvalidDimension { dim: d });
    }
    if i >= d {
        return Err(QiError::InvalidIndex { index: i, dim: d });
    }
    let mut t = Tensor::zeros(&[d]);
    t.data_mut()[i] = T::one();
    Ok(t)
}

/// Standard basis bra `<i|` in dimension `d`.
///
/// The conjugate dual of [`ket`], represented as a rank-1 tensor. For the
/// standard basis the entries coincide with the ket's; conjugation is
/// applied for uniformity with general duals.
pub fn bra<T: Scalar>(i: usize, d: usize) -> Result<Tensor<T>, QiError> {
    let mut t = ket::<T>(i, d)?;
    for x in t.data_mut() {
        *x = x.conj();
    }
    Ok(t)
}

/// Basis outer product `|i><j|` as a `d x d` matrix.
///
/// # Examples
///
/// ```
/// use qilinalg::ketbra;
///
/// let m = ketbra::<f64>(0, 1, 2).unwrap();
/// assert_eq!(m.get(&[0, 1]), Some(&1.0));
/// assert_eq!(m.get(&[1, 0]), Some(&0.0));
/// ```
pub fn ketbra<T: Scalar>(i: usize, j: usize, d: usize) -> Result<Tensor<T>, QiError> {
    if d == 0 {
        return Err(QiError::InvalidDimension { dim: d });
    }
    if i >= d {
        return Err(QiError::InvalidIndex { index: i, dim: d });
    }
    if j >= d {
        return Err(QiError::InvalidIndex { index: j, dim: d });
    }
    let mut t = Tensor::zeros(&[d, d]);
    t.data_mut()[i + j * d] = T::one();
    Ok(t)
}

/// Projector `|phi><phi|` onto a (not necessarily normalized) vector.
///
/// # Errors
///
/// Returns [`QiError::RankMismatch`] if the input is not rank-1.
pub fn proj<T: Scalar>(phi: &Tensor<T>) -> Result<Tensor<T>, QiError> {
    if phi.ndim() != 1 {
        return Err(QiError::RankMismatch {
            expected: 1,
            actual: phi.ndim(),
        });
    }
    let d = phi.len();
    let mut out = Tensor::zeros(&[d, d]);
    let v = phi.data();
    let out_data = out.data_mut();
    for j in 0..d {
        let vj = v[j].conj();
        for i in 0..d {
            out_data[i + j * d] = v[i] * vj;
        }
    }
    Ok(out)
}

/// Maximally mixed state `I / d` in dimension `d`.
///
/// # Examples
///
/// ```
/// use qilinalg::max_mixed;
///
/// let rho = max_mixed::<f64>(2).unwrap();
/// assert_eq!(rho.get(&[0, 0]), Some(&0.5));
/// assert_eq!(rho.get(&[0, 1]), Some(&0.0));
/// ```
pub fn max_mixed<T: Scalar>(d: usize) -> Result<Tensor<T>, QiError> {
    if d == 0 {
        return Err(QiError::InvalidDimension { dim: d });
    }
    Ok(Tensor::eye(d).scale(T::from_f64(1.0 / d as f64)))
}

/// Maximally entangled state vector in composite dimension `d = s * s`.
///
/// Built as the row-major vectorization of the `s x s` identity,
/// normalized: `(1 / sqrt(s)) * sum_i |ii>`.
///
/// # Errors
///
/// Returns [`QiError::InvalidDimension`] if `d` is zero or not a perfect
/// square.
pub fn max_entangled<T: Scalar>(d: usize) -> Result<Tensor<T>, QiError> {
    let side = isqrt(d);
    if d == 0 || side * side != d {
        return Err(QiError::InvalidDimension { dim: d });
    }
    let phi = res(&Tensor::<T>::eye(side))?;
    Ok(phi.scale(T::from_f64(1.0 / (side as f64).sqrt())))
}

/// Werner state in composite dimension `d = s * s`.
///
/// The mixture `alpha * |phi><phi| + (1 - alpha) * I / d` of the maximally
/// entangled projector and the maximally mixed state.
///
/// # Errors
///
/// Returns [`QiError::InvalidMixingParameter`] for `alpha` outside `[0, 1]`
/// and [`QiError::InvalidDimension`] if `d` is not a perfect square.
pub fn werner_state<T: Scalar>(d: usize, alpha: f64) -> Result<Tensor<T>, QiError> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(QiError::InvalidMixingParameter { alpha });
    }
    let entangled = proj(&max_entangled::<T>(d)?)?;
    let mixed = max_mixed::<T>(d)?;
    entangled
        .scale(T::from_f64(alpha))
        .add(&mixed.scale(T::from_f64(1.0 - alpha)))
}
