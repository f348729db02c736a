//! Measurement backends
//!
//! The core never decides where outcomes come from. Callers inject a
//! [`MeasurementBackend`]: either the built-in sampler or a hook into an
//! experiment.

pub mod backend;
pub mod sampling;

pub use backend::{ExternalBackend, MeasurementBackend, MeasurementSettings};
pub use sampling::{measure_separable_state, outcomes_to_frequencies, sample_outcomes, SimulatedBackend};
