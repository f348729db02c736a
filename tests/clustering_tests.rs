use ndarray::{arr2, Array2};
use num_complex::Complex64;

use tomohash::clustering::{grow_cluster, locate_clusters, partition_qubits, reduce_cluster_povms, reduce_correlators};
use tomohash::quantum::Povm;
use tomohash::TomographyError;

fn candidates() -> (Vec<(usize, usize)>, Vec<f64>) {
    let pairs = vec![(0, 1), (1, 2), (0, 2), (1, 3), (1, 4), (0, 5), (5, 4), (0, 3), (0, 4)];
    let values = vec![0.8, 0.6, 0.4, 0.2, 0.9, 1.0, 0.2, 0.3, 1.0];
    (pairs, values)
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Single-qubit detector whose errors depend on `label`, so marginals of
/// different qubits can be told apart
fn detector(label: usize) -> Povm {
    let p = 0.01 * (label as f64 + 1.0);
    let q = 0.02 * (label as f64 + 1.0);
    let coherence = 0.005 * label as f64;
    let first = arr2(&[[c(1.0 - p, 0.0), c(0.0, coherence)], [c(0.0, -coherence), c(q, 0.0)]]);
    let second = arr2(&[[c(p, 0.0), c(0.0, -coherence)], [c(0.0, coherence), c(1.0 - q, 0.0)]]);
    Povm::new(vec![first, second], 2).unwrap()
}

fn cluster_povm(labels: &[usize]) -> Povm {
    labels[1..]
        .iter()
        .fold(detector(labels[0]), |joint, &label| joint.tensor(&detector(label)).unwrap())
}

fn matrix_approx_eq(a: &Array2<Complex64>, b: &Array2<Complex64>, epsilon: f64) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() < epsilon)
}

fn povm_approx_eq(a: &Povm, b: &Povm, epsilon: f64) -> bool {
    a.len() == b.len() && a.operators().iter().zip(b.operators()).all(|(x, y)| matrix_approx_eq(x, y, epsilon))
}

#[test]
fn test_grow_cluster_reference_scenario() {
    let (pairs, values) = candidates();
    let cluster = grow_cluster((1, 2), &pairs, &values, 3).unwrap();
    assert_eq!(cluster, vec![1, 2, 4]);

    // One more step pulls in qubit 0 through the (0, 4) edge
    let cluster = grow_cluster((1, 2), &pairs, &values, 4).unwrap();
    assert_eq!(cluster, vec![0, 1, 2, 4]);
}

#[test]
fn test_grow_cluster_ties_prefer_later_candidate() {
    let pairs = [(0, 2), (1, 3), (3, 4)];
    let values = [0.5, 0.5, 0.1];
    assert_eq!(grow_cluster((0, 1), &pairs, &values, 3).unwrap(), vec![0, 1, 3]);

    // Reversing the scan order flips the winner
    let pairs = [(1, 3), (0, 2), (3, 4)];
    assert_eq!(grow_cluster((0, 1), &pairs, &values, 3).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_grow_cluster_stops_without_candidates() {
    let pairs = [(2, 3), (0, 1)];
    let values = [0.9, 0.4];
    assert_eq!(grow_cluster((1, 0), &pairs, &values, 5).unwrap(), vec![0, 1]);

    // A bound of two leaves the seed untouched
    let (pairs, values) = candidates();
    assert_eq!(grow_cluster((3, 5), &pairs, &values, 2).unwrap(), vec![3, 5]);
}

#[test]
fn test_grow_cluster_rejects_bad_inputs() {
    let (pairs, values) = candidates();

    assert!(matches!(
        grow_cluster((1, 2), &pairs, &values[..3], 3),
        Err(TomographyError::DimensionMismatch(_))
    ));
    assert!(matches!(
        grow_cluster((2, 2), &pairs, &values, 3),
        Err(TomographyError::InvalidArgument(_))
    ));
    assert!(matches!(
        grow_cluster((1, 2), &pairs, &values, 1),
        Err(TomographyError::InvalidArgument(_))
    ));

    let mut broken = values.clone();
    broken[4] = f64::NAN;
    assert!(matches!(
        grow_cluster((1, 2), &pairs, &broken, 3),
        Err(TomographyError::InvalidArgument(_))
    ));
}

#[test]
fn test_partition_qubits() {
    let (pairs, values) = candidates();

    let partition = partition_qubits(6, &pairs, &values, 3).unwrap();
    assert_eq!(partition, vec![vec![0, 4, 5], vec![1, 2, 3]]);

    let partition = partition_qubits(6, &pairs, &values, 2).unwrap();
    assert_eq!(partition, vec![vec![0, 4], vec![1, 2], vec![3], vec![5]]);

    let partition = partition_qubits(4, &[], &[], 3).unwrap();
    assert_eq!(partition, vec![vec![0], vec![1], vec![2], vec![3]]);
}

#[test]
fn test_partition_covers_every_qubit_once() {
    let (pairs, values) = candidates();
    for max_size in 1..=6 {
        let partition = partition_qubits(8, &pairs, &values, max_size).unwrap();
        let mut seen: Vec<usize> = partition.iter().flatten().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..8).collect::<Vec<_>>());
        assert!(partition.iter().all(|cluster| cluster.len() <= max_size));
    }

    assert!(matches!(
        partition_qubits(4, &pairs, &values, 3),
        Err(TomographyError::LabelOutOfRange { .. })
    ));
}

#[test]
fn test_locate_clusters() {
    let partition = vec![vec![0, 4, 5], vec![1, 2, 3]];

    assert_eq!(locate_clusters(&partition, (4, 2)).unwrap(), vec![0, 1]);
    assert_eq!(locate_clusters(&partition, (2, 4)).unwrap(), vec![1, 0]);
    assert_eq!(locate_clusters(&partition, (5, 0)).unwrap(), vec![0]);
    assert_eq!(
        locate_clusters(&partition, (6, 0)),
        Err(TomographyError::QubitNotClustered(6))
    );
}

#[test]
fn test_reduce_split_correlator() {
    let labels = vec![vec![0, 4, 5], vec![1, 2, 3]];
    let povms: Vec<Povm> = labels.iter().map(|cluster| cluster_povm(cluster)).collect();

    let reduced = reduce_cluster_povms(&povms, &labels, (4, 2)).unwrap();
    assert_eq!(reduced.len(), 2);
    assert_eq!(reduced[0].qubit_labels, vec![4]);
    assert_eq!(reduced[1].qubit_labels, vec![2]);
    assert!(povm_approx_eq(&reduced[0].povm, &detector(4), 1e-12));
    assert!(povm_approx_eq(&reduced[1].povm, &detector(2), 1e-12));
}

#[test]
fn test_reduce_joint_correlator_follows_cluster_order() {
    let labels = vec![vec![4, 0, 5], vec![1, 2, 3]];
    let povms: Vec<Povm> = labels.iter().map(|cluster| cluster_povm(cluster)).collect();

    let reduced = reduce_cluster_povms(&povms, &labels, (5, 4)).unwrap();
    assert_eq!(reduced.len(), 1);
    assert_eq!(reduced[0].qubit_labels, vec![4, 5]);

    let expected = detector(4).tensor(&detector(5)).unwrap();
    assert!(povm_approx_eq(&reduced[0].povm, &expected, 1e-12));
    assert!(reduced[0].povm.is_complete(1e-12));
}

#[test]
fn test_reduce_cluster_povms_rejects_bad_inputs() {
    let labels = vec![vec![0, 1], vec![2]];
    let povms = vec![cluster_povm(&[0, 1]), cluster_povm(&[2])];

    assert!(matches!(
        reduce_cluster_povms(&povms[..1], &labels, (0, 2)),
        Err(TomographyError::DimensionMismatch(_))
    ));
    assert!(matches!(
        reduce_cluster_povms(&povms, &labels, (1, 1)),
        Err(TomographyError::InvalidArgument(_))
    ));

    // POVM and label list disagree on the cluster size
    let mismatched = vec![cluster_povm(&[0]), cluster_povm(&[2])];
    assert!(matches!(
        reduce_cluster_povms(&mismatched, &labels, (0, 2)),
        Err(TomographyError::DimensionMismatch(_))
    ));
}

#[test]
fn test_reduce_correlators_matches_single_reductions() {
    let labels = vec![vec![0, 4, 5], vec![1, 2, 3]];
    let povms: Vec<Povm> = labels.iter().map(|cluster| cluster_povm(cluster)).collect();
    let correlators = [(4, 2), (5, 0), (1, 3), (0, 1)];

    let batched = reduce_correlators(&povms, &labels, &correlators, 3).unwrap();
    assert_eq!(batched.len(), correlators.len());
    for (correlator, reduced) in correlators.iter().zip(&batched) {
        let single = reduce_cluster_povms(&povms, &labels, *correlator).unwrap();
        assert_eq!(reduced, &single);
    }
}
