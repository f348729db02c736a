use tomohash::combinatorics::{reindex, reindex_all, unique_sequences};
use tomohash::TomographyError;

#[test]
fn test_unique_sequences_integers() {
    let result = unique_sequences(&[1, 2, 3], 2).unwrap();
    let expected = vec![
        vec![1, 2], vec![1, 3],
        vec![2, 1], vec![2, 3],
        vec![3, 1], vec![3, 2],
    ];
    assert_eq!(result, expected);
}

#[test]
fn test_unique_sequences_three_positions() {
    let result = unique_sequences(&['A', 'B', 'C'], 3).unwrap();
    assert_eq!(result.len(), 24);

    // Odometer order, with AAA, BBB and CCC left out
    assert_eq!(result[0], vec!['A', 'A', 'B']);
    assert_eq!(result[1], vec!['A', 'A', 'C']);
    assert_eq!(result[2], vec!['A', 'B', 'A']);
    assert_eq!(result[11], vec!['B', 'B', 'A']);
    assert_eq!(result[12], vec!['B', 'B', 'C']);
    assert_eq!(result[23], vec!['C', 'C', 'B']);
    assert!(!result.contains(&vec!['B', 'B', 'B']));
}

#[test]
fn test_unique_sequences_binary() {
    let result = unique_sequences(&[0, 1], 4).unwrap();
    assert_eq!(result.len(), 14);
    assert_eq!(result.first(), Some(&vec![0, 0, 0, 1]));
    assert_eq!(result.last(), Some(&vec![1, 1, 1, 0]));

    // Every sequence is the binary expansion of 1..=14
    for (offset, sequence) in result.iter().enumerate() {
        let value = sequence.iter().fold(0, |acc, &bit| acc * 2 + bit);
        assert_eq!(value, offset + 1);
    }
}

#[test]
fn test_unique_sequences_vector_elements() {
    let elements = vec![vec![0, 0], vec![1, 1]];
    let result = unique_sequences(&elements, 2).unwrap();
    assert_eq!(
        result,
        vec![
            vec![vec![0, 0], vec![1, 1]],
            vec![vec![1, 1], vec![0, 0]],
        ]
    );
}

#[test]
fn test_unique_sequences_excludes_by_position_not_value() {
    // Two equal values at different positions are still different symbols
    let result = unique_sequences(&['A', 'A'], 2).unwrap();
    assert_eq!(result, vec![vec!['A', 'A'], vec!['A', 'A']]);
}

#[test]
fn test_unique_sequences_six_symbols() {
    let elements = ['A', 'B', 'C', 'D', 'E', 'F'];
    let result = unique_sequences(&elements, 2).unwrap();
    assert_eq!(result.len(), 30);
    assert_eq!(result[4], vec!['A', 'F']);
    assert_eq!(result[5], vec!['B', 'A']);
    assert_eq!(result[29], vec!['F', 'E']);
}

#[test]
fn test_unique_sequences_degenerate_inputs() {
    assert!(unique_sequences(&['A'], 3).unwrap().is_empty());
    assert!(unique_sequences(&['A', 'B'], 1).unwrap().is_empty());

    let empty: [char; 0] = [];
    assert!(matches!(
        unique_sequences(&empty, 2),
        Err(TomographyError::InvalidArgument(_))
    ));
    assert!(matches!(
        unique_sequences(&['A', 'B'], 0),
        Err(TomographyError::InvalidArgument(_))
    ));
}

#[test]
fn test_unique_sequences_too_many_to_store() {
    // 2^62 sequences fit the index range but not into memory
    assert!(matches!(
        unique_sequences(&[0u8, 1], 62),
        Err(TomographyError::InvalidArgument(_))
    ));
    // 2^70 overflows the index range outright
    assert!(matches!(
        unique_sequences(&[0u8, 1], 70),
        Err(TomographyError::InvalidArgument(_))
    ));
}

#[test]
fn test_reindex() {
    assert_eq!(reindex(3, 5).unwrap(), 1);
    assert_eq!(reindex(0, 1).unwrap(), 0);

    assert_eq!(reindex_all(&[0, 0, 1, 1], 2).unwrap(), vec![1, 1, 0, 0]);
    assert_eq!(reindex_all(&[0, 1, 0, 1], 2).unwrap(), vec![1, 0, 1, 0]);
    assert_eq!(reindex_all(&[0, 1, 1, 0], 10).unwrap(), vec![9, 8, 8, 9]);
    assert_eq!(reindex_all(&[0, 1, 2, 3], 4).unwrap(), vec![3, 2, 1, 0]);
    assert_eq!(reindex_all(&[0, 1, 2, 3, 4, 5], 6).unwrap(), vec![5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_reindex_out_of_range() {
    assert_eq!(
        reindex(5, 5),
        Err(TomographyError::LabelOutOfRange { label: 5, bound: 5 })
    );
    assert!(reindex(0, 0).is_err());
    assert!(reindex_all(&[0, 2], 2).is_err());
}
