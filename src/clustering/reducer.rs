//! Marginal POVMs for two-point correlators over a frozen cluster partition

use tracing::debug;

use crate::error::{Result, TomographyError};
use crate::quantum::{complement, reduce_povm, Povm};
use crate::scheduling::{map_chunks, pack};

/// A reduced POVM together with the global labels of the qubits it acts
/// on, in outcome order.
#[derive(Clone, Debug, PartialEq)]
pub struct ReducedPovm {
    pub povm: Povm,
    pub qubit_labels: Vec<usize>,
}

/// Indices of the clusters holding the endpoints of `correlator`.
///
/// Clusters are reported in endpoint order and only once, so a correlator
/// living inside a single cluster yields one index.
pub fn locate_clusters(cluster_partition: &[Vec<usize>], correlator: (usize, usize)) -> Result<Vec<usize>> {
    let mut located = Vec::with_capacity(2);
    for label in [correlator.0, correlator.1] {
        let index = cluster_partition
            .iter()
            .position(|cluster| cluster.contains(&label))
            .ok_or(TomographyError::QubitNotClustered(label))?;
        if !located.contains(&index) {
            located.push(index);
        }
    }
    Ok(located)
}

/// Reduce the cluster POVMs down to what `correlator` needs.
///
/// `qubit_labels_per_cluster[c]` lists the qubits of cluster `c` in the
/// order used by `povm_per_cluster[c]`. A cluster holding one endpoint is
/// marginalized onto that qubit; a cluster holding both keeps the two
/// qubits in their cluster order.
pub fn reduce_cluster_povms(
    povm_per_cluster: &[Povm],
    qubit_labels_per_cluster: &[Vec<usize>],
    correlator: (usize, usize),
) -> Result<Vec<ReducedPovm>> {
    if povm_per_cluster.len() != qubit_labels_per_cluster.len() {
        return Err(TomographyError::DimensionMismatch(format!(
            "{} cluster POVMs but {} cluster label lists",
            povm_per_cluster.len(),
            qubit_labels_per_cluster.len()
        )));
    }
    if correlator.0 == correlator.1 {
        return Err(TomographyError::InvalidArgument(format!(
            "correlator ({}, {}) must join two distinct qubits",
            correlator.0, correlator.1
        )));
    }

    let mut reduced = Vec::with_capacity(2);
    for index in locate_clusters(qubit_labels_per_cluster, correlator)? {
        let labels = &qubit_labels_per_cluster[index];
        let povm = &povm_per_cluster[index];
        if povm.qubit_count() != labels.len() {
            return Err(TomographyError::DimensionMismatch(format!(
                "cluster {} lists {} qubits but its POVM acts on {}",
                index,
                labels.len(),
                povm.qubit_count()
            )));
        }

        let kept_positions: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label == correlator.0 || label == correlator.1)
            .map(|(position, _)| position)
            .collect();
        let trace_out = complement(&kept_positions, labels.len())?;

        reduced.push(ReducedPovm {
            povm: reduce_povm(povm, &trace_out)?,
            qubit_labels: kept_positions.iter().map(|&position| labels[position]).collect(),
        });
    }

    Ok(reduced)
}

/// Reduce the cluster POVMs for every correlator, spreading the work over
/// chunks whose summed cluster size stays within `chunk_capacity`.
///
/// Results come back in correlator order.
pub fn reduce_correlators(
    povm_per_cluster: &[Povm],
    qubit_labels_per_cluster: &[Vec<usize>],
    correlators: &[(usize, usize)],
    chunk_capacity: usize,
) -> Result<Vec<Vec<ReducedPovm>>> {
    let sizes = correlators
        .iter()
        .map(|&correlator| {
            let located = locate_clusters(qubit_labels_per_cluster, correlator)?;
            Ok(located.iter().map(|&index| qubit_labels_per_cluster[index].len()).sum())
        })
        .collect::<Result<Vec<usize>>>()?;

    let boundaries = pack(&sizes, chunk_capacity)?;
    debug!(
        n_correlators = correlators.len(),
        n_chunks = boundaries.len() - 1,
        "dispatching correlator reductions"
    );

    let chunks = map_chunks(correlators, &boundaries, |chunk| {
        chunk
            .iter()
            .map(|&correlator| reduce_cluster_povms(povm_per_cluster, qubit_labels_per_cluster, correlator))
            .collect::<Result<Vec<_>>>()
    })?;

    let mut reduced = Vec::with_capacity(correlators.len());
    for chunk in chunks {
        reduced.extend(chunk?);
    }
    Ok(reduced)
}
