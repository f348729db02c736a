//! Combinatorial primitives used to enumerate measurement settings
//!
//! This module provides the odometer enumeration of non-constant sequences
//! over an alphabet and the symbol reindexing that aligns hash-group labels
//! with positions inside such a sequence.

pub mod sequence;
pub mod reindex;

pub use sequence::unique_sequences;
pub use reindex::{reindex, reindex_all};
