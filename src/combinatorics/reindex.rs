//! Mapping between hash-group labels and selection slots

use crate::error::{check_label, Result, TomographyError};

/// Map a hash-group label onto the slot it selects inside a generated
/// combination: `n_symbols - 1 - label`.
///
/// Applying the map twice returns the original label.
pub fn reindex(label: usize, n_symbols: usize) -> Result<usize> {
    if n_symbols == 0 {
        return Err(TomographyError::InvalidArgument(
            "number of hash symbols must be positive".to_string(),
        ));
    }
    check_label(label, n_symbols)?;
    Ok(n_symbols - 1 - label)
}

/// Elementwise [`reindex`] over a whole hash row.
pub fn reindex_all(labels: &[usize], n_symbols: usize) -> Result<Vec<usize>> {
    labels.iter().map(|&label| reindex(label, n_symbols)).collect()
}
