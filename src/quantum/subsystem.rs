//! Qubit-subset bookkeeping and generalized partial traces
//!
//! All routines here follow one convention: a subset of qubits is always
//! handled in ascending label order, whatever order the caller listed it
//! in, and qubit 0 is the most significant digit of both outcome indices
//! and Hilbert-space indices.

use ndarray::{Array, Array2, ArrayBase, Axis, Data, RemoveAxis};
use num_complex::Complex64;
use tracing::debug;

use crate::error::{check_label, Result, TomographyError};
use crate::quantum::povm::{outcome_count, Povm};

/// Sort and deduplicate `labels`, rejecting any label outside `[0, n)`.
pub fn canonical_labels(labels: &[usize], n: usize) -> Result<Vec<usize>> {
    for &label in labels {
        check_label(label, n)?;
    }
    let mut sorted = labels.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    Ok(sorted)
}

/// Select the last-axis entries of `tensor` listed in `labels`.
///
/// The selection is taken in ascending order and duplicates collapse, so
/// `keep(&[2, 0], t) == keep(&[0, 2], t)`. An empty label list yields a
/// tensor whose last axis has length zero.
pub fn keep<A, S, D>(labels: &[usize], tensor: &ArrayBase<S, D>) -> Result<Array<A, D>>
where
    A: Clone,
    S: Data<Elem = A>,
    D: RemoveAxis,
{
    if tensor.ndim() == 0 {
        return Err(TomographyError::DimensionMismatch(
            "cannot select qubits from a zero-dimensional tensor".to_string(),
        ));
    }

    let axis = Axis(tensor.ndim() - 1);
    let kept = canonical_labels(labels, tensor.len_of(axis))?;

    if kept.is_empty() {
        let mut shape = tensor.raw_dim();
        shape[axis.index()] = 0;
        return Array::from_shape_vec(shape, Vec::new())
            .map_err(|err| TomographyError::DimensionMismatch(err.to_string()));
    }

    Ok(tensor.select(axis, &kept))
}

/// Every index in `[0, n)` absent from `labels`, ascending.
pub fn complement(labels: &[usize], n: usize) -> Result<Vec<usize>> {
    let present = canonical_labels(labels, n)?;
    Ok((0..n).filter(|index| present.binary_search(index).is_err()).collect())
}

/// Bring a raw correlator pair into `[0, n)` and make its endpoints distinct.
///
/// Both endpoints are taken modulo `n`. When they coincide, the second one
/// moves to the next label (wrapping around), e.g. `(0, 0) -> (0, 1)` and
/// `(3, 3) -> (3, 0)` for `n = 4`.
pub fn normalize_pair(pair: (usize, usize), n: usize) -> Result<(usize, usize)> {
    if n < 2 {
        return Err(TomographyError::InvalidArgument(format!(
            "a pair of distinct qubits needs at least 2 qubits, got {}",
            n
        )));
    }

    let first = pair.0 % n;
    let mut second = pair.1 % n;
    if first == second {
        second = (second + 1) % n;
    }
    Ok((first, second))
}

/// Partial trace of an `n_qubits` operator over the qubits in `trace_out`.
///
/// The remaining qubits keep their relative (ascending) order.
pub fn partial_trace(
    operator: &Array2<Complex64>,
    n_qubits: usize,
    trace_out: &[usize],
) -> Result<Array2<Complex64>> {
    let dim = 1 << n_qubits;
    if operator.shape() != [dim, dim] {
        return Err(TomographyError::DimensionMismatch(format!(
            "operator has shape {}x{}, expected {}x{}",
            operator.shape()[0],
            operator.shape()[1],
            dim,
            dim
        )));
    }

    let traced = canonical_labels(trace_out, n_qubits)?;
    let kept = complement(&traced, n_qubits)?;
    Ok(trace_over(operator, n_qubits, &kept, &traced))
}

fn trace_over(
    operator: &Array2<Complex64>,
    n_qubits: usize,
    kept: &[usize],
    traced: &[usize],
) -> Array2<Complex64> {
    let dim_kept = 1 << kept.len();
    let dim_traced = 1 << traced.len();

    Array2::from_shape_fn((dim_kept, dim_kept), |(row, col)| {
        let mut sum = Complex64::new(0.0, 0.0);
        for t in 0..dim_traced {
            let full_row = embed_index(row, t, kept, traced, n_qubits);
            let full_col = embed_index(col, t, kept, traced, n_qubits);
            sum += operator[[full_row, full_col]];
        }
        sum
    })
}

// Interleave the bits of a kept-subsystem index and a traced-subsystem index
// back into a full register index. Qubit q sits at bit n_qubits - 1 - q.
fn embed_index(kept_index: usize, traced_index: usize, kept: &[usize], traced: &[usize], n_qubits: usize) -> usize {
    let mut full = 0;
    for (position, &qubit) in kept.iter().enumerate() {
        let bit = (kept_index >> (kept.len() - 1 - position)) & 1;
        full |= bit << (n_qubits - 1 - qubit);
    }
    for (position, &qubit) in traced.iter().enumerate() {
        let bit = (traced_index >> (traced.len() - 1 - position)) & 1;
        full |= bit << (n_qubits - 1 - qubit);
    }
    full
}

/// Marginal POVM obtained by discarding the qubits in `trace_out_labels`.
///
/// Joint outcomes are grouped by their digits on the kept qubits and the
/// operators of each group are summed. Each sum is then partially traced
/// over the discarded qubits and rescaled by `2^-|traced|`, so the
/// marginal acts on the kept qubits only and stays complete whenever the
/// joint POVM was. The result has `arity^|kept|` outcomes, indexed with the
/// kept qubits in ascending order.
pub fn reduce_povm(povm: &Povm, trace_out_labels: &[usize]) -> Result<Povm> {
    let n_qubits = povm.qubit_count();
    let arity = povm.outcome_arity();
    let traced = canonical_labels(trace_out_labels, n_qubits)?;
    let kept = complement(&traced, n_qubits)?;

    debug!(n_qubits, kept = ?kept, traced = ?traced, "reducing POVM");

    let dim = povm.dimension();
    let mut grouped = vec![Array2::<Complex64>::zeros((dim, dim)); outcome_count(arity, kept.len())?];

    let mut digits = vec![0usize; n_qubits];
    for (outcome, operator) in povm.operators().iter().enumerate() {
        let mut rest = outcome;
        for digit in digits.iter_mut().rev() {
            *digit = rest % arity;
            rest /= arity;
        }
        let target = kept.iter().fold(0, |acc, &qubit| acc * arity + digits[qubit]);
        grouped[target] += operator;
    }

    let scale = Complex64::new(1.0 / (1usize << traced.len()) as f64, 0.0);
    let operators = grouped
        .iter()
        .map(|operator| trace_over(operator, n_qubits, &kept, &traced).mapv(|value| value * scale))
        .collect();

    Povm::new(operators, arity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_index_places_qubit_zero_first() {
        // Keep qubit 2 of three, trace qubits 0 and 1
        assert_eq!(embed_index(1, 0, &[2], &[0, 1], 3), 0b001);
        assert_eq!(embed_index(0, 0b10, &[2], &[0, 1], 3), 0b100);
        assert_eq!(embed_index(1, 0b01, &[2], &[0, 1], 3), 0b011);
        // Keep qubits 0 and 2, trace qubit 1
        assert_eq!(embed_index(0b10, 1, &[0, 2], &[1], 3), 0b110);
    }
}
