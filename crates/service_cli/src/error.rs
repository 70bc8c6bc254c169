//! CLI error types

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Settings could not be loaded or are invalid
    #[error("Configuration error: {0}")]
    Config(#[from] infra_config::ConfigError),

    /// Run configuration rejected by the engine
    #[error("Run configuration error: {0}")]
    RunConfig(#[from] pathsim_engine::mc::ConfigError),

    /// Simulation or statistics failure
    #[error("Simulation error: {0}")]
    Simulation(#[from] pathsim_core::types::SimulationError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    pub(crate) fn unknown_format(format: &str, supported: &str) -> Self {
        Self::InvalidArgument(format!(
            "Unknown format: {}. Supported: {}",
            format, supported
        ))
    }
}
