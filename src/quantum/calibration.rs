//! Calibration states selected by per-qubit instructions

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{check_label, Result};
use crate::quantum::povm::kron;

/// Pick the single-qubit calibration state named by each instruction entry.
///
/// `instruction[q]` indexes into `one_qubit_states` and selects the state
/// prepared on qubit `q`.
pub fn calibration_states_from_instruction(
    instruction: &[usize],
    one_qubit_states: &[Array2<Complex64>],
) -> Result<Vec<Array2<Complex64>>> {
    instruction
        .iter()
        .map(|&index| {
            check_label(index, one_qubit_states.len())?;
            Ok(one_qubit_states[index].clone())
        })
        .collect()
}

/// Joint calibration state `ρ_{i0} ⊗ ρ_{i1} ⊗ ...` for an instruction,
/// qubit 0 being the leading factor.
pub fn calibration_state_product(
    instruction: &[usize],
    one_qubit_states: &[Array2<Complex64>],
) -> Result<Array2<Complex64>> {
    let states = calibration_states_from_instruction(instruction, one_qubit_states)?;
    let scalar = Array2::from_elem((1, 1), Complex64::new(1.0, 0.0));
    Ok(states.iter().fold(scalar, |product, state| kron(&product, state)))
}
