//! Capability interface for anything that can produce measurement outcomes

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{Result, TomographyError};
use crate::quantum::Povm;

/// Everything a backend may need to run one measurement setting
#[derive(Clone, Copy, Debug)]
pub struct MeasurementSettings<'a> {
    /// Number of repetitions
    pub n_shots: usize,
    /// The measurement to perform
    pub povm: &'a Povm,
    /// State to measure, for backends that simulate
    pub state: Option<&'a Array2<Complex64>>,
    /// Angle representation of the prepared state, for hardware backends
    pub state_angles: Option<&'a Array2<f64>>,
}

impl<'a> MeasurementSettings<'a> {
    pub fn new(n_shots: usize, povm: &'a Povm) -> Self {
        MeasurementSettings {
            n_shots,
            povm,
            state: None,
            state_angles: None,
        }
    }

    pub fn with_state(mut self, state: &'a Array2<Complex64>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_state_angles(mut self, angles: &'a Array2<f64>) -> Self {
        self.state_angles = Some(angles);
        self
    }
}

/// Produces one outcome index per shot for a measurement setting
pub trait MeasurementBackend {
    fn produce_outcomes(&mut self, settings: &MeasurementSettings<'_>) -> Result<Vec<usize>>;
}

/// Backend delegating to a caller-supplied function, e.g. an experiment driver
pub struct ExternalBackend<F> {
    measure: F,
}

impl<F> ExternalBackend<F>
where
    F: FnMut(&MeasurementSettings<'_>) -> Result<Vec<usize>>,
{
    pub fn new(measure: F) -> Self {
        ExternalBackend { measure }
    }
}

impl<F> MeasurementBackend for ExternalBackend<F>
where
    F: FnMut(&MeasurementSettings<'_>) -> Result<Vec<usize>>,
{
    fn produce_outcomes(&mut self, settings: &MeasurementSettings<'_>) -> Result<Vec<usize>> {
        let outcomes = (self.measure)(settings)?;
        if outcomes.len() != settings.n_shots {
            return Err(TomographyError::Backend(format!(
                "requested {} shots, backend returned {}",
                settings.n_shots,
                outcomes.len()
            )));
        }
        if let Some(&bad) = outcomes.iter().find(|&&outcome| outcome >= settings.povm.len()) {
            return Err(TomographyError::Backend(format!(
                "outcome {} does not exist for a POVM with {} outcomes",
                bad,
                settings.povm.len()
            )));
        }
        Ok(outcomes)
    }
}
