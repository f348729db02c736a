//! Run configuration

use serde::{Deserialize, Serialize};

use crate::error::{Result, TomographyError};

/// Tunables shared by the scheduler, the clustering and the simulated backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomographyConfig {
    /// Largest number of qubits a correlation cluster may hold
    pub max_cluster_size: usize,
    /// Summed workload size a single dispatch chunk may carry
    pub chunk_capacity: usize,
    /// Seed for simulated measurements; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for TomographyConfig {
    fn default() -> Self {
        TomographyConfig {
            max_cluster_size: 2,
            chunk_capacity: 64,
            seed: None,
        }
    }
}

impl TomographyConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TomographyConfig =
            serde_json::from_str(json).map_err(|err| TomographyError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| TomographyError::Config(err.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_cluster_size == 0 {
            return Err(TomographyError::Config(
                "max_cluster_size must be positive".to_string(),
            ));
        }
        if self.chunk_capacity == 0 {
            return Err(TomographyError::Config(
                "chunk_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
