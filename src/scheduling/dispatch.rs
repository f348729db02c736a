//! Parallel execution of chunked workloads

use rayon::prelude::*;

use crate::error::{Result, TomographyError};

/// Run `f` on every chunk of `items` described by `boundaries`, in parallel.
///
/// The results are gathered in chunk order regardless of which worker
/// finished first.
pub fn map_chunks<T, R, F>(items: &[T], boundaries: &[usize], f: F) -> Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync + Send,
{
    validate_boundaries(boundaries, items.len())?;
    Ok(boundaries
        .par_windows(2)
        .map(|window| f(&items[window[0]..window[1]]))
        .collect())
}

fn validate_boundaries(boundaries: &[usize], n_items: usize) -> Result<()> {
    if boundaries.first() != Some(&0) || boundaries.last() != Some(&n_items) {
        return Err(TomographyError::InvalidArgument(format!(
            "chunk boundaries must run from 0 to {}",
            n_items
        )));
    }
    if boundaries.windows(2).any(|window| window[0] > window[1]) {
        return Err(TomographyError::InvalidArgument(
            "chunk boundaries must be non-decreasing".to_string(),
        ));
    }
    Ok(())
}
