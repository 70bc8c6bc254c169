//! Error types for Monte Carlo configuration.

use pathsim_core::types::SimulationError;
use thiserror::Error;

/// Configuration error for the Monte Carlo simulator.
///
/// These errors occur at build time when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Path count outside valid range [1, MAX_PATHS].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside valid range [1, MAX_STEPS].
    #[error("Invalid step count {0}: must be in range [1, 100_000]")]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for SimulationError {
    fn from(err: ConfigError) -> Self {
        let message = err.to_string();
        match err {
            ConfigError::InvalidPathCount(_) => SimulationError::invalid_parameter("n_paths", message),
            ConfigError::InvalidStepCount(_) => SimulationError::invalid_parameter("n_steps", message),
            ConfigError::InvalidParameter { name, value } => {
                SimulationError::invalid_parameter(name, value)
            }
        }
    }
}
