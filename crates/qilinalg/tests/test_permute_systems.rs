//! Integration tests for subsystem permutation, including an independent
//! basis-index-relabeling oracle over unequal local dimensions.

use qilinalg::{ketbra, max_mixed, permute_systems, werner_state, QiError, Tensor};

/// Decompose a composite basis index into subsystem digits
/// (row-major: subsystem 0 most significant).
fn digits(mut index: usize, dims: &[usize]) -> Vec<usize> {
    let mut out = vec![0; dims.len()];
    for (slot, &d) in out.iter_mut().zip(dims.iter()).rev() {
        *slot = index % d;
        index /= d;
    }
    out
}

/// Recompose subsystem digits into a composite basis index.
fn composite(digits: &[usize], dims: &[usize]) -> usize {
    digits
        .iter()
        .zip(dims.iter())
        .fold(0, |acc, (&i, &d)| acc * d + i)
}

/// Oracle: permute by literally relabeling basis indices of every element.
fn relabel_oracle(rho: &Tensor<f64>, dims: &[usize], systems: &[usize]) -> Tensor<f64> {
    let d_total = rho.shape()[0];
    let new_dims: Vec<usize> = systems.iter().map(|&s| dims[s]).collect();
    let mut out = Tensor::zeros(&[d_total, d_total]);
    for r in 0..d_total {
        for c in 0..d_total {
            let rd = digits(r, dims);
            let cd = digits(c, dims);
            let nr_digits: Vec<usize> = systems.iter().map(|&s| rd[s]).collect();
            let nc_digits: Vec<usize> = systems.iter().map(|&s| cd[s]).collect();
            let nr = composite(&nr_digits, &new_dims);
            let nc = composite(&nc_digits, &new_dims);
            let value = *rho.get(&[r, c]).unwrap();
            out.set(&[nr, nc], value).unwrap();
        }
    }
    out
}

fn dense_test_matrix(d: usize) -> Tensor<f64> {
    let data: Vec<f64> = (0..d * d).map(|x| ((x * 31 + 7) % 101) as f64).collect();
    Tensor::from_vec(data, &[d, d]).unwrap()
}

#[test]
fn test_matches_relabeling_oracle_two_qubits() {
    let rho = dense_test_matrix(4);
    let got = permute_systems(&rho, &[2, 2], &[1, 0]).unwrap();
    assert_eq!(got, relabel_oracle(&rho, &[2, 2], &[1, 0]));
}

#[test]
fn test_matches_relabeling_oracle_unequal_dims() {
    let rho = dense_test_matrix(6);
    let got = permute_systems(&rho, &[2, 3], &[1, 0]).unwrap();
    assert_eq!(got, relabel_oracle(&rho, &[2, 3], &[1, 0]));
}

#[test]
fn test_matches_relabeling_oracle_three_systems() {
    let rho = dense_test_matrix(12);
    for systems in [
        [0, 1, 2],
        [1, 0, 2],
        [2, 1, 0],
        [1, 2, 0],
        [2, 0, 1],
        [0, 2, 1],
    ] {
        let got = permute_systems(&rho, &[2, 3, 2], &systems).unwrap();
        assert_eq!(
            got,
            relabel_oracle(&rho, &[2, 3, 2], &systems),
            "oracle mismatch for systems {systems:?}"
        );
    }
}

#[test]
fn test_spec_ketbra_oracle() {
    // permuting |0><2| under the 2 (x) 2 factorization must relabel
    // (0,0) -> (0,0) and (1,0) -> (0,1), giving |0><1|
    let rho = ketbra::<f64>(0, 2, 4).unwrap();
    let got = permute_systems(&rho, &[2, 2], &[1, 0]).unwrap();
    assert_eq!(got, ketbra::<f64>(0, 1, 4).unwrap());
    assert_eq!(got, relabel_oracle(&rho, &[2, 2], &[1, 0]));
}

#[test]
fn test_identity_permutation_is_noop() {
    let rho = dense_test_matrix(8);
    let got = permute_systems(&rho, &[2, 2, 2], &[0, 1, 2]).unwrap();
    assert_eq!(got, rho);
}

#[test]
fn test_swap_twice_is_identity() {
    let rho = dense_test_matrix(6);
    let once = permute_systems(&rho, &[3, 2], &[1, 0]).unwrap();
    let twice = permute_systems(&once, &[2, 3], &[1, 0]).unwrap();
    assert_eq!(twice, rho);
}

#[test]
fn test_trace_preserved() {
    let rho = dense_test_matrix(12);
    for systems in [[1, 2, 0], [2, 1, 0]] {
        let got = permute_systems(&rho, &[2, 3, 2], &systems).unwrap();
        assert_eq!(got.trace().unwrap(), rho.trace().unwrap());
    }
}

#[test]
fn test_element_multiset_preserved() {
    let rho = dense_test_matrix(6);
    let got = permute_systems(&rho, &[2, 3], &[1, 0]).unwrap();
    let mut a: Vec<f64> = rho.data().to_vec();
    let mut b: Vec<f64> = got.data().to_vec();
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);
    assert_eq!(a, b);
}

#[test]
fn test_werner_invariant_under_swap() {
    // the Werner state is symmetric under exchange of its two factors
    let w = werner_state::<f64>(4, 0.4).unwrap();
    let swapped = permute_systems(&w, &[2, 2], &[1, 0]).unwrap();
    assert_eq!(swapped, w);
}

#[test]
fn test_max_mixed_invariant_under_any_permutation() {
    let rho = max_mixed::<f64>(12).unwrap();
    let got = permute_systems(&rho, &[2, 3, 2], &[2, 0, 1]).unwrap();
    assert_eq!(got, rho);
}

#[test]
fn test_error_contracts() {
    let rho = dense_test_matrix(4);
    assert!(matches!(
        permute_systems(&rho, &[2, 3], &[1, 0]),
        Err(QiError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        permute_systems(&rho, &[2, 2], &[1, 1]),
        Err(QiError::InvalidPermutation { .. })
    ));
    let rect: Tensor<f64> = Tensor::zeros(&[4, 2]);
    assert!(matches!(
        permute_systems(&rect, &[2, 2], &[0, 1]),
        Err(QiError::NotSquareMatrix { .. })
    ));
}
