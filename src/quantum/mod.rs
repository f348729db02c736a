//! POVMs and the qubit-subset algebra used to marginalize them
//!
//! Density matrices and operators are plain `Array2<Complex64>` values;
//! this module only adds the POVM container and the index bookkeeping
//! needed to trace qubits out of it.

pub mod povm;
pub mod subsystem;
pub mod calibration;

pub use povm::{kron, Povm};
pub use subsystem::{canonical_labels, complement, keep, normalize_pair, partial_trace, reduce_povm};
pub use calibration::{calibration_state_product, calibration_states_from_instruction};
