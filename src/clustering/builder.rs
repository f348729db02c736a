//! Greedy frontier growth of bounded-size qubit clusters

use tracing::{debug, trace};

use crate::error::{check_label, Result, TomographyError};

/// Grow a cluster around `seed` by repeatedly absorbing the most strongly
/// correlated neighbour.
///
/// A candidate pair is eligible when exactly one of its endpoints is
/// already in the cluster. The eligible candidate with the largest value
/// wins; on equal values the one scanned last wins. Growth stops once the
/// cluster holds `max_cluster_size` qubits or nothing is eligible. The
/// returned labels are ascending.
pub fn grow_cluster(
    seed: (usize, usize),
    candidate_pairs: &[(usize, usize)],
    correlation_values: &[f64],
    max_cluster_size: usize,
) -> Result<Vec<usize>> {
    validate_candidates(candidate_pairs, correlation_values)?;
    validate_seed(seed, max_cluster_size)?;

    Ok(grow(seed, candidate_pairs, correlation_values, max_cluster_size, |_| true))
}

/// Partition `n_qubits` qubits into clusters of at most `max_cluster_size`.
///
/// Seeds are taken strongest first among candidates whose endpoints are
/// both still unassigned, and each seed grows only into unassigned qubits.
/// Qubits left over once no seed remains become singleton clusters, in
/// ascending order. Every qubit lands in exactly one cluster.
pub fn partition_qubits(
    n_qubits: usize,
    candidate_pairs: &[(usize, usize)],
    correlation_values: &[f64],
    max_cluster_size: usize,
) -> Result<Vec<Vec<usize>>> {
    validate_candidates(candidate_pairs, correlation_values)?;
    if max_cluster_size == 0 {
        return Err(TomographyError::InvalidArgument(
            "maximum cluster size must be positive".to_string(),
        ));
    }
    for &(a, b) in candidate_pairs {
        check_label(a, n_qubits)?;
        check_label(b, n_qubits)?;
    }

    let mut assigned = vec![false; n_qubits];
    let mut clusters = Vec::new();

    if max_cluster_size >= 2 {
        loop {
            let mut seed: Option<(f64, (usize, usize))> = None;
            for (&(a, b), &value) in candidate_pairs.iter().zip(correlation_values) {
                if a == b || assigned[a] || assigned[b] {
                    continue;
                }
                if seed.map_or(true, |(best, _)| value >= best) {
                    seed = Some((value, (a, b)));
                }
            }

            let Some((_, pair)) = seed else { break };
            let cluster = grow(pair, candidate_pairs, correlation_values, max_cluster_size, |qubit| {
                !assigned[qubit]
            });
            for &qubit in &cluster {
                assigned[qubit] = true;
            }
            clusters.push(cluster);
        }
    }

    clusters.extend((0..n_qubits).filter(|&qubit| !assigned[qubit]).map(|qubit| vec![qubit]));

    debug!(n_qubits, n_clusters = clusters.len(), max_cluster_size, "partitioned qubits");
    Ok(clusters)
}

fn validate_candidates(candidate_pairs: &[(usize, usize)], correlation_values: &[f64]) -> Result<()> {
    if candidate_pairs.len() != correlation_values.len() {
        return Err(TomographyError::DimensionMismatch(format!(
            "{} candidate pairs but {} correlation values",
            candidate_pairs.len(),
            correlation_values.len()
        )));
    }
    if let Some(index) = correlation_values.iter().position(|value| !value.is_finite()) {
        return Err(TomographyError::InvalidArgument(format!(
            "correlation value {} is not finite",
            index
        )));
    }
    Ok(())
}

fn validate_seed(seed: (usize, usize), max_cluster_size: usize) -> Result<()> {
    if seed.0 == seed.1 {
        return Err(TomographyError::InvalidArgument(format!(
            "seed pair ({}, {}) must hold two distinct qubits",
            seed.0, seed.1
        )));
    }
    if max_cluster_size < 2 {
        return Err(TomographyError::InvalidArgument(format!(
            "maximum cluster size {} cannot hold a seed pair",
            max_cluster_size
        )));
    }
    Ok(())
}

fn grow<F>(
    seed: (usize, usize),
    candidate_pairs: &[(usize, usize)],
    correlation_values: &[f64],
    max_cluster_size: usize,
    is_free: F,
) -> Vec<usize>
where
    F: Fn(usize) -> bool,
{
    let mut cluster = vec![seed.0, seed.1];

    while cluster.len() < max_cluster_size {
        let mut best: Option<(f64, usize)> = None;

        for (&(a, b), &value) in candidate_pairs.iter().zip(correlation_values) {
            let external = match (cluster.contains(&a), cluster.contains(&b)) {
                (true, false) => b,
                (false, true) => a,
                _ => continue,
            };
            if !is_free(external) {
                continue;
            }
            // >= so that the last of several equal candidates wins
            if best.map_or(true, |(best_value, _)| value >= best_value) {
                best = Some((value, external));
            }
        }

        match best {
            Some((value, qubit)) => {
                trace!(qubit, value, size = cluster.len() + 1, "absorbing qubit into cluster");
                cluster.push(qubit);
            }
            None => break,
        }
    }

    cluster.sort_unstable();
    cluster
}
