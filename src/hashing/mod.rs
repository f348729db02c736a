//! Measurement-round scheduling through pair-separating hash families
//!
//! A hash family assigns every qubit a group label per measurement round.
//! Expanding a hash row over an instruction alphabet produces the concrete
//! per-qubit settings for that round.

pub mod family;
pub mod instruction;

pub use family::{build_pair_separating_hash, HashFamily, HashFamilyCache};
pub use instruction::{expand, expand_family, instruction_equivalence};
