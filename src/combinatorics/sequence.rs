//! Enumeration of non-constant sequences over a finite alphabet

use tracing::debug;

use crate::error::{Result, TomographyError};

/// Enumerate every `length`-tuple over `elements` in odometer order,
/// skipping the tuples that repeat a single element at every position.
///
/// The last position advances fastest, so for `elements = [1, 2, 3]` and
/// `length = 2` the result is `[1,2], [1,3], [2,1], [2,3], [3,1], [3,2]`.
/// Constancy is decided on element positions, not on values: an alphabet
/// holding two equal values still yields tuples mixing the two.
///
/// The output has exactly `elements.len()^length - elements.len()` entries.
pub fn unique_sequences<T: Clone>(elements: &[T], length: usize) -> Result<Vec<Vec<T>>> {
    if elements.is_empty() {
        return Err(TomographyError::InvalidArgument(
            "cannot enumerate sequences over an empty alphabet".to_string(),
        ));
    }
    if length < 1 {
        return Err(TomographyError::InvalidArgument(
            "sequence length must be at least 1".to_string(),
        ));
    }

    let symbols = elements.len();
    let total = u32::try_from(length)
        .ok()
        .and_then(|exp| symbols.checked_pow(exp))
        .ok_or_else(|| {
            TomographyError::InvalidArgument(format!(
                "{}^{} sequences overflow the index range",
                symbols, length
            ))
        })?;

    debug!(symbols, length, retained = total - symbols, "enumerating unique sequences");

    let mut sequences = Vec::new();
    sequences.try_reserve_exact(total - symbols).map_err(|_| {
        TomographyError::InvalidArgument(format!(
            "{}^{} sequences do not fit into memory",
            symbols, length
        ))
    })?;
    let mut counter = vec![0usize; length];

    loop {
        let first = counter[0];
        if counter.iter().any(|&index| index != first) {
            sequences.push(counter.iter().map(|&index| elements[index].clone()).collect());
        }

        // Advance the odometer, rightmost digit first
        let mut position = length;
        loop {
            if position == 0 {
                return Ok(sequences);
            }
            position -= 1;
            counter[position] += 1;
            if counter[position] < symbols {
                break;
            }
            counter[position] = 0;
        }
    }
}
