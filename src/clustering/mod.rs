//! Correlation-driven qubit clustering and per-correlator POVM reduction
//!
//! Clusters are grown greedily from strongly correlated qubit pairs. Once
//! a partition is frozen, every correlator is served by marginalizing the
//! joint POVMs of the one or two clusters that hold its endpoints.

pub mod builder;
pub mod reducer;

pub use builder::{grow_cluster, partition_qubits};
pub use reducer::{locate_clusters, reduce_cluster_povms, reduce_correlators, ReducedPovm};
