//! Settings and configuration structures.

use std::path::Path;

use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables that override file settings,
/// e.g. `PATHSIM__SIMULATION__N_PATHS=5000`.
pub const ENV_PREFIX: &str = "PATHSIM";

/// Main application settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Process parameters and simulation grid
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Percentile band
    #[serde(default)]
    pub statistics: StatisticsConfig,
    /// Engine configuration
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `PATHSIM_ENV`)
    /// 3. Environment variables prefixed with `PATHSIM__`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`Settings::load`], with an explicit file layered on top of the
    /// `config/` directory and below the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] if `path` is given but missing.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var("PATHSIM_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Parses settings from a TOML document, without files or environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::finish(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks every section against the bounds the simulation core enforces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        self.statistics.validate()?;
        self.engine.validate()
    }
}

/// Process parameters and simulation grid.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Initial value
    #[serde(default = "default_s0")]
    pub s0: f64,
    /// Drift
    #[serde(default)]
    pub mu: f64,
    /// Volatility
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    /// Number of paths per run
    #[serde(default = "default_n_paths")]
    pub n_paths: usize,
    /// Number of time steps per path
    #[serde(default = "default_n_steps")]
    pub n_steps: usize,
    /// Time increment per step (years)
    #[serde(default = "default_dt")]
    pub dt: f64,
    /// Seed; absent means a fresh seed per run
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            s0: default_s0(),
            mu: 0.0,
            sigma: default_sigma(),
            n_paths: default_n_paths(),
            n_steps: default_n_steps(),
            dt: default_dt(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.s0.is_finite() && self.s0 > 0.0) {
            return Err(ConfigError::invalid("simulation.s0", "must be positive"));
        }
        if !self.mu.is_finite() {
            return Err(ConfigError::invalid("simulation.mu", "must be finite"));
        }
        if !(self.sigma.is_finite() && self.sigma >= 0.0) {
            return Err(ConfigError::invalid(
                "simulation.sigma",
                "must be non-negative",
            ));
        }
        if self.n_paths == 0 {
            return Err(ConfigError::invalid("simulation.n_paths", "must be at least 1"));
        }
        if self.n_steps == 0 {
            return Err(ConfigError::invalid("simulation.n_steps", "must be at least 1"));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::invalid("simulation.dt", "must be positive"));
        }
        Ok(())
    }
}

fn default_s0() -> f64 {
    100.0
}

fn default_sigma() -> f64 {
    0.05
}

fn default_n_paths() -> usize {
    1_000
}

fn default_n_steps() -> usize {
    252
}

fn default_dt() -> f64 {
    1.0 / 252.0
}

/// Percentile band configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StatisticsConfig {
    /// Lower percentile rank
    #[serde(default = "default_p_low")]
    pub p_low: f64,
    /// Upper percentile rank
    #[serde(default = "default_p_high")]
    pub p_high: f64,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            p_low: default_p_low(),
            p_high: default_p_high(),
        }
    }
}

impl StatisticsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |p: f64| (0.0..=100.0).contains(&p);
        if !(in_range(self.p_low) && in_range(self.p_high) && self.p_low <= self.p_high) {
            return Err(ConfigError::invalid(
                "statistics",
                format!(
                    "require 0 <= p_low <= p_high <= 100, got ({}, {})",
                    self.p_low, self.p_high
                ),
            ));
        }
        Ok(())
    }
}

fn default_p_low() -> f64 {
    5.0
}

fn default_p_high() -> f64 {
    95.0
}

/// Engine configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EngineConfig {
    /// Thread pool size for parallel computation
    #[serde(default = "default_thread_pool_size")]
    pub thread_pool_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thread_pool_size: default_thread_pool_size(),
        }
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.thread_pool_size == 0 {
            return Err(ConfigError::invalid(
                "engine.thread_pool_size",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

fn default_thread_pool_size() -> usize {
    num_cpus::get()
}
