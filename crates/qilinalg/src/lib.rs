//! qilinalg - linear-algebra building blocks for finite-dimensional
//! quantum-information computations.
//!
//! The crate provides standard basis vectors and projectors, row-major
//! matrix vectorization, canonical mixed and entangled reference states,
//! and permutation of the subsystem ordering of a composite-system
//! operator. Everything is a pure function over an owned dense tensor
//! type; there is no I/O, no shared state, and no concurrency to manage.
//!
//! # Architecture
//!
//! ```text
//! states        ket, bra, ketbra, proj, max_mixed, max_entangled, werner_state
//!     |
//! vectorize     res / unres (row-major convention)
//! permute_systems   subsystem permutation (the index-algebra core)
//!     |
//! tensor / permute / strides    column-major dense substrate
//! ```
//!
//! Two index conventions meet here and their bridging is explicit:
//! tensor storage is column-major (first axis fastest), while composite
//! basis indices follow the row-major Kronecker-product convention
//! (subsystem 0 most significant). See [`permute_systems()`] and
//! [`vectorize`](crate::vectorize) for how the gap is closed.
//!
//! # Example
//!
//! ```
//! use qilinalg::{ketbra, permute_systems, res, unres};
//!
//! // |01><01| on two qubits, with the qubits then swapped
//! let rho = ketbra::<f64>(1, 1, 4).unwrap();
//! let swapped = permute_systems(&rho, &[2, 2], &[1, 0]).unwrap();
//! assert_eq!(swapped, ketbra::<f64>(2, 2, 4).unwrap());
//!
//! // vectorization round-trip is exact
//! let phi = res(&rho).unwrap();
//! assert_eq!(unres(&phi, 4).unwrap(), rho);
//! ```

pub mod error;
pub mod permute;
pub mod permute_systems;
pub mod scalar;
pub mod states;
pub mod strides;
pub mod tensor;
pub mod vectorize;

pub use error::QiError;
pub use permute_systems::permute_systems;
pub use scalar::{c64, Scalar};
pub use states::{bra, ket, ketbra, max_entangled, max_mixed, proj, werner_state};
pub use tensor::Tensor;
pub use vectorize::{res, unres, unres_square};
