//! Expansion of hash rows into concrete per-qubit measurement instructions

use std::fmt::Debug;

use tracing::debug;

use crate::combinatorics::{reindex_all, unique_sequences};
use crate::error::{Result, TomographyError};
use crate::hashing::HashFamily;

/// Expand one hash row into every non-degenerate instruction assignment.
///
/// Each combination of `n_hash_symbols` instructions (constant ones
/// excluded) gives one output row, in combination order. Qubit `i` receives
/// `combo[n_hash_symbols - 1 - hash_row[i]]`, so qubits sharing a group
/// label always receive the same instruction.
pub fn expand<T: Clone>(
    hash_row: &[usize],
    instruction_alphabet: &[T],
    n_hash_symbols: usize,
) -> Result<Vec<Vec<T>>> {
    let slots = reindex_all(hash_row, n_hash_symbols)?;
    let combos = unique_sequences(instruction_alphabet, n_hash_symbols)?;

    debug!(
        n_qubits = hash_row.len(),
        n_rows = combos.len(),
        "expanding hash row into instructions"
    );

    Ok(combos
        .iter()
        .map(|combo| slots.iter().map(|&slot| combo[slot].clone()).collect())
        .collect())
}

/// Expand every row of a hash family and concatenate the results in row
/// order. The output is the complete instruction table for all rounds.
pub fn expand_family<T: Clone>(family: &HashFamily, instruction_alphabet: &[T]) -> Result<Vec<Vec<T>>> {
    let mut table = Vec::new();
    for row in family.rows() {
        table.extend(expand(row, instruction_alphabet, family.n_symbols())?);
    }
    Ok(table)
}

/// Translate instructions into their equivalents.
///
/// `equivalents[k]` replaces `possible[k]`; an instruction missing from
/// `possible` is rejected.
pub fn instruction_equivalence<T, U>(instructions: &[T], possible: &[T], equivalents: &[U]) -> Result<Vec<U>>
where
    T: PartialEq + Debug,
    U: Clone,
{
    if possible.len() != equivalents.len() {
        return Err(TomographyError::DimensionMismatch(format!(
            "{} possible instructions but {} equivalents",
            possible.len(),
            equivalents.len()
        )));
    }

    instructions
        .iter()
        .map(|instruction| {
            possible
                .iter()
                .position(|candidate| candidate == instruction)
                .map(|index| equivalents[index].clone())
                .ok_or_else(|| TomographyError::UnknownInstruction(format!("{:?}", instruction)))
        })
        .collect()
}
