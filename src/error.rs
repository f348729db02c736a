//! Error type shared by every module of the crate

use thiserror::Error;

/// Errors raised by the scheduling, clustering and reduction routines.
///
/// All of these are precondition violations: the inputs are malformed and
/// the call cannot produce a meaningful result. Degenerate but valid inputs
/// (duplicate correlator labels, nothing left to absorb) are not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TomographyError {
    /// An argument is outside of its allowed domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A label or index does not fit into `[0, bound)`
    #[error("label {label} is out of range for bound {bound}")]
    LabelOutOfRange { label: usize, bound: usize },

    /// Shapes or lengths of the inputs do not agree
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// An instruction is not part of the known instruction list
    #[error("unknown instruction: {0}")]
    UnknownInstruction(String),

    /// A correlator refers to a qubit that no cluster contains
    #[error("qubit {0} is not part of any cluster")]
    QubitNotClustered(usize),

    /// A measurement backend failed to produce outcomes
    #[error("measurement backend error: {0}")]
    Backend(String),

    /// Configuration could not be parsed or is inconsistent
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, TomographyError>;

/// Fails with [`TomographyError::LabelOutOfRange`] unless `label < bound`.
pub(crate) fn check_label(label: usize, bound: usize) -> Result<()> {
    if label >= bound {
        return Err(TomographyError::LabelOutOfRange { label, bound });
    }
    Ok(())
}
