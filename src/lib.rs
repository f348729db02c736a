//! Compressed measurement scheduling for many-qubit tomography
//!
//! This crate builds pair-separating hash families that decide which
//! qubits share a measurement setting in each round, expands them into
//! concrete instruction tables, groups qubits into clusters from observed
//! pairwise correlations, and reduces joint cluster POVMs to the marginals
//! needed for two-point correlators. Workloads are packed into bounded
//! chunks for parallel execution.

pub mod error;
pub mod config;
pub mod combinatorics;
pub mod hashing;
pub mod quantum;
pub mod clustering;
pub mod scheduling;
pub mod simulators;

pub use error::{Result, TomographyError};
pub use config::TomographyConfig;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::clustering::{grow_cluster, locate_clusters, partition_qubits, reduce_cluster_povms, ReducedPovm};
    pub use crate::combinatorics::{reindex, unique_sequences};
    pub use crate::config::TomographyConfig;
    pub use crate::error::{Result, TomographyError};
    pub use crate::hashing::{build_pair_separating_hash, expand, HashFamily, HashFamilyCache};
    pub use crate::quantum::{complement, keep, normalize_pair, reduce_povm, Povm};
    pub use crate::scheduling::{map_chunks, pack, MeasurementScheduler};
    pub use crate::simulators::{MeasurementBackend, MeasurementSettings, SimulatedBackend};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
