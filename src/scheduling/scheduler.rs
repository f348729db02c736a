//! Configured front end tying hash families, clustering and chunking together

use std::sync::Arc;

use tracing::{debug, info};

use crate::clustering::{partition_qubits, reduce_correlators, ReducedPovm};
use crate::config::TomographyConfig;
use crate::error::Result;
use crate::hashing::{expand_family, HashFamily, HashFamilyCache};
use crate::quantum::Povm;
use crate::scheduling::pack;

/// Builds measurement schedules and cluster reductions for a given
/// configuration, remembering every hash family it has built.
#[derive(Debug)]
pub struct MeasurementScheduler {
    config: TomographyConfig,
    cache: HashFamilyCache,
}

impl MeasurementScheduler {
    pub fn new(config: TomographyConfig) -> Result<Self> {
        config.validate()?;
        Ok(MeasurementScheduler {
            config,
            cache: HashFamilyCache::new(),
        })
    }

    pub fn config(&self) -> &TomographyConfig {
        &self.config
    }

    pub fn cache(&self) -> &HashFamilyCache {
        &self.cache
    }

    /// The pair-separating hash family for `n_qubits`, built at most once
    pub fn hash_family(&mut self, n_qubits: usize) -> Result<Arc<HashFamily>> {
        self.cache.get_or_build(n_qubits)
    }

    /// Every measurement setting needed for `n_qubits` qubits: all hash
    /// rows expanded over `alphabet`, in row order.
    pub fn instruction_table<T: Clone>(&mut self, n_qubits: usize, alphabet: &[T]) -> Result<Vec<Vec<T>>> {
        let family = self.hash_family(n_qubits)?;
        let table = expand_family(&family, alphabet)?;
        info!(n_qubits, n_rounds = family.len(), n_settings = table.len(), "built instruction table");
        Ok(table)
    }

    /// Chunk boundaries grouping the settings of `table` into batches of
    /// at most `chunk_capacity` settings.
    pub fn instruction_batches<T>(&self, table: &[Vec<T>]) -> Result<Vec<usize>> {
        pack(&vec![1; table.len()], self.config.chunk_capacity)
    }

    /// Cluster partition of `n_qubits` qubits driven by the given correlations
    pub fn partition(
        &self,
        n_qubits: usize,
        candidate_pairs: &[(usize, usize)],
        correlation_values: &[f64],
    ) -> Result<Vec<Vec<usize>>> {
        partition_qubits(n_qubits, candidate_pairs, correlation_values, self.config.max_cluster_size)
    }

    /// Reduced POVMs for every correlator, computed chunk-parallel
    pub fn reduce_correlators(
        &self,
        povm_per_cluster: &[Povm],
        qubit_labels_per_cluster: &[Vec<usize>],
        correlators: &[(usize, usize)],
    ) -> Result<Vec<Vec<ReducedPovm>>> {
        debug!(n_clusters = povm_per_cluster.len(), "reducing cluster POVMs");
        reduce_correlators(
            povm_per_cluster,
            qubit_labels_per_cluster,
            correlators,
            self.config.chunk_capacity,
        )
    }
}
