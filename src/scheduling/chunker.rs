//! Greedy packing of sized work items into contiguous chunks

use tracing::warn;

use crate::error::{Result, TomographyError};

/// Split `sizes` into contiguous chunks whose sizes sum to at most `capacity`.
///
/// Returns chunk boundaries: chunk `k` covers items
/// `boundaries[k]..boundaries[k + 1]`. The first boundary is always 0 and
/// the last is `sizes.len()`. An item larger than `capacity` still gets a
/// chunk of its own.
pub fn pack(sizes: &[usize], capacity: usize) -> Result<Vec<usize>> {
    if capacity == 0 {
        return Err(TomographyError::InvalidArgument(
            "chunk capacity must be positive".to_string(),
        ));
    }

    let mut boundaries = vec![0];
    let mut chunk_start = 0;
    let mut running = 0usize;

    for (index, &size) in sizes.iter().enumerate() {
        if size > capacity {
            warn!(index, size, capacity, "work item exceeds chunk capacity");
        }

        if index > chunk_start && running.saturating_add(size) > capacity {
            boundaries.push(index);
            chunk_start = index;
            running = size;
        } else {
            running = running.saturating_add(size);
        }
    }

    if !sizes.is_empty() {
        boundaries.push(sizes.len());
    }
    Ok(boundaries)
}
