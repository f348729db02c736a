//! Positive operator-valued measures over a register of qubits

use std::fmt::{self, Display};

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{Result, TomographyError};

/// A POVM acting on `qubit_count` qubits.
///
/// Outcome indices are read as `qubit_count` digits in base
/// `outcome_arity`, qubit 0 being the most significant digit. The same
/// ordering is used for the Kronecker factors of each operator.
#[derive(Clone, Debug, PartialEq)]
pub struct Povm {
    qubit_count: usize,
    outcome_arity: usize,
    operators: Vec<Array2<Complex64>>,
}

impl Povm {
    /// Create a POVM from its operators.
    ///
    /// The qubit count is read off the operator dimension, which must be a
    /// power of two, and the number of operators must be
    /// `outcome_arity^qubit_count`. Completeness is not checked here, see
    /// [`Povm::is_complete`].
    pub fn new(operators: Vec<Array2<Complex64>>, outcome_arity: usize) -> Result<Self> {
        if outcome_arity == 0 {
            return Err(TomographyError::InvalidArgument(
                "outcome arity must be positive".to_string(),
            ));
        }
        let first = operators.first().ok_or_else(|| {
            TomographyError::InvalidArgument("a POVM needs at least one operator".to_string())
        })?;

        let dim = first.nrows();
        if dim == 0 || !dim.is_power_of_two() {
            return Err(TomographyError::DimensionMismatch(format!(
                "operator dimension {} is not a power of two",
                dim
            )));
        }
        let qubit_count = dim.trailing_zeros() as usize;

        for (index, operator) in operators.iter().enumerate() {
            if operator.shape() != [dim, dim] {
                return Err(TomographyError::DimensionMismatch(format!(
                    "operator {} has shape {}x{}, expected {}x{}",
                    index,
                    operator.shape()[0],
                    operator.shape()[1],
                    dim,
                    dim
                )));
            }
        }

        let expected = outcome_count(outcome_arity, qubit_count)?;
        if operators.len() != expected {
            return Err(TomographyError::DimensionMismatch(format!(
                "{}-qubit POVM with arity {} needs {} operators, got {}",
                qubit_count,
                outcome_arity,
                expected,
                operators.len()
            )));
        }

        Ok(Povm {
            qubit_count,
            outcome_arity,
            operators,
        })
    }

    /// Projective measurement in the computational basis: `|k⟩⟨k|` for every k
    pub fn computational_basis(qubit_count: usize) -> Self {
        let dim = 1 << qubit_count;
        let operators = (0..dim)
            .map(|k| {
                let mut projector = Array2::zeros((dim, dim));
                projector[[k, k]] = Complex64::new(1.0, 0.0);
                projector
            })
            .collect();

        Povm {
            qubit_count,
            outcome_arity: 2,
            operators,
        }
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    pub fn outcome_arity(&self) -> usize {
        self.outcome_arity
    }

    /// Dimension of the Hilbert space the operators act on
    pub fn dimension(&self) -> usize {
        1 << self.qubit_count
    }

    pub fn operators(&self) -> &[Array2<Complex64>] {
        &self.operators
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Joint POVM of two independent measurements, `self` on the leading qubits
    pub fn tensor(&self, other: &Povm) -> Result<Povm> {
        if self.outcome_arity != other.outcome_arity {
            return Err(TomographyError::DimensionMismatch(format!(
                "cannot combine POVMs with arities {} and {}",
                self.outcome_arity, other.outcome_arity
            )));
        }

        let operators = self
            .operators
            .iter()
            .flat_map(|a| other.operators.iter().map(move |b| kron(a, b)))
            .collect();

        Ok(Povm {
            qubit_count: self.qubit_count + other.qubit_count,
            outcome_arity: self.outcome_arity,
            operators,
        })
    }

    /// Outcome probabilities `Re Tr(M_k ρ)` for the state `rho`
    pub fn histogram(&self, rho: &Array2<Complex64>) -> Result<Vec<f64>> {
        let dim = self.dimension();
        if rho.shape() != [dim, dim] {
            return Err(TomographyError::DimensionMismatch(format!(
                "state has shape {}x{}, POVM acts on dimension {}",
                rho.shape()[0],
                rho.shape()[1],
                dim
            )));
        }

        Ok(self
            .operators
            .iter()
            .map(|operator| {
                let mut trace = Complex64::new(0.0, 0.0);
                for i in 0..dim {
                    for j in 0..dim {
                        trace += operator[[i, j]] * rho[[j, i]];
                    }
                }
                trace.re
            })
            .collect())
    }

    /// Whether the operators sum to the identity within `tolerance`
    pub fn is_complete(&self, tolerance: f64) -> bool {
        let dim = self.dimension();
        let mut total = Array2::<Complex64>::zeros((dim, dim));
        for operator in &self.operators {
            total += operator;
        }

        total.indexed_iter().all(|((i, j), value)| {
            let expected = if i == j { 1.0 } else { 0.0 };
            (*value - Complex64::new(expected, 0.0)).norm() < tolerance
        })
    }
}

impl Display for Povm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{}-qubit POVM with {} outcomes (arity {})",
            self.qubit_count,
            self.operators.len(),
            self.outcome_arity
        )?;

        if self.dimension() <= 4 {
            for (k, operator) in self.operators.iter().enumerate() {
                let diagonal: Vec<String> = (0..self.dimension())
                    .map(|i| format!("{:.4}", operator[[i, i]].re))
                    .collect();
                writeln!(f, "  M_{}: diag [{}]", k, diagonal.join(", "))?;
            }
        }

        Ok(())
    }
}

pub(crate) fn outcome_count(outcome_arity: usize, qubit_count: usize) -> Result<usize> {
    u32::try_from(qubit_count)
        .ok()
        .and_then(|exp| outcome_arity.checked_pow(exp))
        .ok_or_else(|| {
            TomographyError::InvalidArgument(format!(
                "{}^{} outcomes overflow",
                outcome_arity, qubit_count
            ))
        })
}

/// Kronecker product `a ⊗ b`
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (a_rows, a_cols) = a.dim();
    let (b_rows, b_cols) = b.dim();

    let mut result = Array2::zeros((a_rows * b_rows, a_cols * b_cols));
    for i in 0..a_rows {
        for j in 0..a_cols {
            for k in 0..b_rows {
                for l in 0..b_cols {
                    result[[i * b_rows + k, j * b_cols + l]] = a[[i, j]] * b[[k, l]];
                }
            }
        }
    }

    result
}
