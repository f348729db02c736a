//! Pair-separating hash families built from the binary digits of qubit indices

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{check_label, Result, TomographyError};

/// Number of group labels used by the binary hash family
pub const BINARY_HASH_SYMBOLS: usize = 2;

/// Build the hash rows for `n_total_qubits` qubits.
///
/// Row `k` assigns qubit `i` the `k`-th bit of `i`. There are
/// `ceil(log2(n_total_qubits))` rows, and never fewer than one.
pub fn build_pair_separating_hash(n_total_qubits: usize) -> Result<Vec<Vec<usize>>> {
    if n_total_qubits == 0 {
        return Err(TomographyError::InvalidArgument(
            "a hash family needs at least one qubit".to_string(),
        ));
    }

    let n_rows = row_count(n_total_qubits);
    debug!(n_total_qubits, n_rows, "building pair-separating hash family");

    Ok((0..n_rows)
        .map(|bit| (0..n_total_qubits).map(|qubit| (qubit >> bit) & 1).collect())
        .collect())
}

fn row_count(n_total_qubits: usize) -> usize {
    // ceil(log2(n)) is the bit width of n - 1
    let width = (usize::BITS - (n_total_qubits - 1).leading_zeros()) as usize;
    width.max(1)
}

/// An immutable family of hash rows over a fixed number of qubits
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashFamily {
    n_qubits: usize,
    rows: Vec<Vec<usize>>,
}

impl HashFamily {
    /// Build the binary pair-separating family for `n_qubits` qubits
    pub fn build(n_qubits: usize) -> Result<Self> {
        Ok(HashFamily {
            n_qubits,
            rows: build_pair_separating_hash(n_qubits)?,
        })
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Number of distinct group labels a row may contain
    pub fn n_symbols(&self) -> usize {
        BINARY_HASH_SYMBOLS
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether some row assigns different labels to qubits `i` and `j`
    pub fn separates(&self, i: usize, j: usize) -> Result<bool> {
        check_label(i, self.n_qubits)?;
        check_label(j, self.n_qubits)?;
        Ok(self.separated(i, j))
    }

    fn separated(&self, i: usize, j: usize) -> bool {
        self.rows.iter().any(|row| row[i] != row[j])
    }

    /// Check that every pair of distinct qubits is separated by some row
    pub fn separates_all_pairs(&self) -> bool {
        (0..self.n_qubits).all(|i| (i + 1..self.n_qubits).all(|j| self.separated(i, j)))
    }
}

/// Memoizes hash families by qubit count.
///
/// Families are shared behind an `Arc` so callers can hold on to them while
/// the cache keeps growing.
#[derive(Debug, Default)]
pub struct HashFamilyCache {
    families: HashMap<usize, Arc<HashFamily>>,
}

impl HashFamilyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the family for `n_qubits`, building it on first request
    pub fn get_or_build(&mut self, n_qubits: usize) -> Result<Arc<HashFamily>> {
        if let Some(family) = self.families.get(&n_qubits) {
            return Ok(Arc::clone(family));
        }
        let family = Arc::new(HashFamily::build(n_qubits)?);
        self.families.insert(n_qubits, Arc::clone(&family));
        Ok(family)
    }

    pub fn contains(&self, n_qubits: usize) -> bool {
        self.families.contains_key(&n_qubits)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn clear(&mut self) {
        self.families.clear();
    }
}
