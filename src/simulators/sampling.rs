//! Monte-Carlo sampling of POVM outcomes

use ndarray::Array2;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::TomographyConfig;
use crate::error::{Result, TomographyError};
use crate::quantum::Povm;
use crate::simulators::backend::{MeasurementBackend, MeasurementSettings};

/// Draw `n_shots` outcome indices of `povm` measured on `rho`.
///
/// Each shot inverts the cumulative outcome distribution at a uniform
/// random point.
pub fn sample_outcomes<R: Rng>(
    n_shots: usize,
    povm: &Povm,
    rho: &Array2<Complex64>,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let histogram = povm.histogram(rho)?;
    let cumulative: Vec<f64> = histogram
        .iter()
        .scan(0.0, |total, &p| {
            *total += p;
            Some(*total)
        })
        .collect();
    let last = cumulative.len() - 1;

    Ok((0..n_shots)
        .map(|_| {
            let r: f64 = rng.gen();
            cumulative.partition_point(|&c| c < r).min(last)
        })
        .collect())
}

/// Count how often each outcome occurs.
///
/// The result covers at least `min_len` outcomes; outcomes never observed
/// count as zero.
pub fn outcomes_to_frequencies(outcomes: &[usize], min_len: usize) -> Vec<usize> {
    let len = outcomes.iter().map(|&outcome| outcome + 1).max().unwrap_or(0).max(min_len);
    let mut frequencies = vec![0; len];
    for &outcome in outcomes {
        frequencies[outcome] += 1;
    }
    frequencies
}

/// Measure a product state qubit by qubit.
///
/// `povms[q]` and `states[q]` are single-qubit objects. Row `s` of the
/// result holds the outcome of every qubit in shot `s`.
pub fn measure_separable_state<R: Rng>(
    n_shots: usize,
    povms: &[Povm],
    states: &[Array2<Complex64>],
    rng: &mut R,
) -> Result<Array2<usize>> {
    if povms.len() != states.len() {
        return Err(TomographyError::DimensionMismatch(format!(
            "{} POVMs for {} states",
            povms.len(),
            states.len()
        )));
    }

    let mut outcomes = Array2::zeros((n_shots, states.len()));
    for (qubit, (povm, state)) in povms.iter().zip(states).enumerate() {
        let column = sample_outcomes(n_shots, povm, state, rng)?;
        for (shot, outcome) in column.into_iter().enumerate() {
            outcomes[[shot, qubit]] = outcome;
        }
    }

    Ok(outcomes)
}

/// Backend that samples outcomes from the Born rule
pub struct SimulatedBackend {
    rng: StdRng,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        SimulatedBackend {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible backend: equal seeds give equal outcome streams
    pub fn with_seed(seed: u64) -> Self {
        SimulatedBackend {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: &TomographyConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementBackend for SimulatedBackend {
    fn produce_outcomes(&mut self, settings: &MeasurementSettings<'_>) -> Result<Vec<usize>> {
        let state = settings.state.ok_or_else(|| {
            TomographyError::Backend("simulated measurement needs a density matrix".to_string())
        })?;
        debug!(n_shots = settings.n_shots, n_outcomes = settings.povm.len(), "simulating measurement");
        sample_outcomes(settings.n_shots, settings.povm, state, &mut self.rng)
    }
}
