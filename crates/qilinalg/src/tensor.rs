//! Owned dense n-dimensional tensor type.
//!
//! `Tensor<T>` is the single value type of the crate: kets are rank-1
//! tensors, operator matrices rank-2, and the subsystem-permutation core
//! temporarily views a matrix as a rank-2n leg tensor. Storage is a flat
//! `Vec<T>` in column-major order with explicit shape and strides.
//!
//! Every operation is pure: inputs are borrowed, outputs are freshly
//! allocated, and nothing is cached or shared between calls.

use crate::error::QiError;
use crate::scalar::Scalar;
use crate::strides::{cartesian_to_linear, compute_strides};

/// Dense column-major tensor over a scalar field `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T: Scalar> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T: Scalar> Tensor<T> {
    /// Create a zero-initialized tensor with the given shape.
    ///
    /// An empty shape denotes a rank-0 (scalar) tensor with one element.
    ///
    /// # Examples
    ///
    /// ```
    /// use qilinalg::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::zeros(&[2, 3]);
    /// assert_eq!(t.shape(), &[2, 3]);
    /// assert_eq!(t.len(), 6);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        let strides = compute_strides(shape);
        let len: usize = shape.iter().product::<usize>().max(1);
        Self {
            data: vec![T::zero(); len],
            shape: shape.to_vec(),
            strides,
        }
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        let mut t = Self::zeros(shape);
        t.fill(T::one());
        t
    }

    /// Create a tensor from data and shape.
    ///
    /// Data is expected in column-major order (first axis fastest).
    ///
    /// # Errors
    ///
    /// Returns [`QiError::ShapeMismatch`] if the data length does not match
    /// the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use qilinalg::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(t.get(&[1, 0]), Some(&2.0)); // column-major
    /// assert_eq!(t.get(&[0, 1]), Some(&3.0));
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self, QiError> {
        let expected: usize = shape.iter().product::<usize>().max(1);
        if data.len() != expected {
            return Err(QiError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        })
    }

    /// Create the `d x d` identity matrix.
    pub fn eye(d: usize) -> Self {
        let mut t = Self::zeros(&[d, d]);
        for i in 0..d {
            t.data[i + i * d] = T::one();
        }
        t
    }

    /// Shape of the tensor.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Rank (number of axes).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the tensor has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Column-major strides.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Underlying storage in column-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the underlying storage.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Element by linear storage index.
    #[inline]
    pub fn get_linear(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Element by cartesian indices.
    ///
    /// Returns `None` for out-of-bounds indices or a wrong index count.
    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        if indices.len() != self.ndim() {
            return None;
        }
        for (&idx, &dim) in indices.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return None;
            }
        }
        self.data.get(cartesian_to_linear(indices, &self.strides))
    }

    /// Set an element by cartesian indices.
    ///
    /// # Errors
    ///
    /// Returns [`QiError::WrongNumberOfIndices`] or [`QiError::InvalidIndex`]
    /// for invalid indices.
    pub fn set(&mut self, indices: &[usize], value: T) -> Result<(), QiError> {
        if indices.len() != self.ndim() {
            return Err(QiError::WrongNumberOfIndices {
                expected: self.ndim(),
                actual: indices.len(),
            });
        }
        for (&idx, &dim) in indices.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return Err(QiError::InvalidIndex {
                    index: idx,
                    dim,
                });
            }
        }
        let linear = cartesian_to_linear(indices, &self.strides);
        self.data[linear] = value;
        Ok(())
    }

    /// Fill every element with a value.
    pub fn fill(&mut self, value: T) {
        for x in &mut self.data {
            *x = value;
        }
    }

    /// Reinterpret the tensor with a new shape of the same total size.
    ///
    /// The element order in storage is unchanged; the output is a fresh
    /// owned tensor.
    ///
    /// # Errors
    ///
    /// Returns [`QiError::ShapeMismatch`] if the total element count differs.
    ///
    /// # Examples
    ///
    /// ```
    /// use qilinalg::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[4]).unwrap();
    /// let m = t.reshape(&[2, 2]).unwrap();
    /// assert_eq!(m.get(&[1, 0]), Some(&2.0));
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self, QiError> {
        let new_len: usize = new_shape.iter().product::<usize>().max(1);
        if new_len != self.len() {
            return Err(QiError::ShapeMismatch {
                expected: self.len(),
                actual: new_len,
            });
        }
        Ok(Self {
            data: self.data.clone(),
            shape: new_shape.to_vec(),
            strides: compute_strides(new_shape),
        })
    }

    /// Permute the axes of the tensor.
    ///
    /// `perm[i]` gives the source axis for axis `i` of the result; see
    /// [`crate::permute::permutedims`].
    pub fn permutedims(&self, perm: &[usize]) -> Result<Self, QiError> {
        crate::permute::permutedims(self, perm)
    }

    /// Trace of a square matrix (rank-2 tensor).
    ///
    /// # Errors
    ///
    /// Returns [`QiError::RankMismatch`] for non-rank-2 input and
    /// [`QiError::NotSquareMatrix`] for a non-square matrix.
    pub fn trace(&self) -> Result<T, QiError> {
        if self.ndim() != 2 {
            return Err(QiError::RankMismatch {
                expected: 2,
                actual: self.ndim(),
            });
        }
        let (rows, cols) = (self.shape[0], self.shape[1]);
        if rows != cols {
            return Err(QiError::NotSquareMatrix { rows, cols });
        }
        let mut sum = T::zero();
        for i in 0..rows {
            sum = sum + self.data[i + i * rows];
        }
        Ok(sum)
    }

    /// Multiply every element by a scalar, returning a new tensor.
    pub fn scale(&self, s: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * s).collect(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }

    /// Elementwise sum of two tensors of identical shape.
    ///
    /// # Errors
    ///
    /// Returns [`QiError::ShapeMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, QiError> {
        if self.shape != other.shape {
            return Err(QiError::ShapeMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self {
            data,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        })
    }
}
