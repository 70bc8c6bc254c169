//! Monte Carlo simulation configuration.
//!
//! Configuration types and builders for simulation runs. Validation happens
//! once, at build time, so a [`MonteCarloConfig`] in hand is always valid.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 100_000;

/// Default time increment: one trading day in a 252-day year.
pub const DEFAULT_DT: f64 = 1.0 / 252.0;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the simulation grid.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pathsim_engine::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.dt(), 1.0 / 252.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// Time increment per step.
    dt: f64,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the time increment.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the simulated horizon `n_steps * dt`.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.n_steps as f64 * self.dt
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of `f64` values held by one run (paths plus shock table).
    pub fn memory_footprint(&self) -> usize {
        self.n_paths * (self.n_steps + 1) + self.n_paths * self.n_steps
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    /// - `n_steps` is 0 or greater than [`MAX_STEPS`]
    /// - `dt` is not positive and finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "dt",
                value: format!("must be positive and finite, got {}", self.dt),
            });
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// `n_paths` and `n_steps` are required; `dt` defaults to [`DEFAULT_DT`];
/// without a seed each run draws fresh entropy.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    dt: Option<f64>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the time increment per step.
    #[inline]
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` not set or invalid
    /// - `n_steps` not set or invalid
    /// - `dt` invalid
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            n_paths,
            n_steps,
            dt: self.dt.unwrap_or(DEFAULT_DT),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = MonteCarloConfig::builder()
            .n_paths(10_000)
            .n_steps(252)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), 252);
        assert_eq!(config.dt(), DEFAULT_DT);
        assert_eq!(config.seed(), None);
        assert!((config.horizon() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_config_builder_with_seed_and_dt() {
        let config = MonteCarloConfig::builder()
            .n_paths(1000)
            .n_steps(100)
            .dt(0.01)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.dt(), 0.01);
    }

    #[test]
    fn test_config_maybe_seed() {
        let config = MonteCarloConfig::builder()
            .n_paths(1)
            .n_steps(1)
            .seed(7)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_invalid_zero_paths() {
        let result = MonteCarloConfig::builder().n_paths(0).n_steps(100).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_paths() {
        let result = MonteCarloConfig::builder()
            .n_paths(MAX_PATHS + 1)
            .n_steps(100)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_config_invalid_steps() {
        let zero = MonteCarloConfig::builder().n_paths(1000).n_steps(0).build();
        assert!(matches!(zero, Err(ConfigError::InvalidStepCount(0))));

        let many = MonteCarloConfig::builder()
            .n_paths(1000)
            .n_steps(MAX_STEPS + 1)
            .build();
        assert!(matches!(many, Err(ConfigError::InvalidStepCount(_))));
    }

    #[test]
    fn test_config_invalid_dt() {
        for dt in [0.0, -0.5, f64::NAN] {
            let result = MonteCarloConfig::builder()
                .n_paths(10)
                .n_steps(10)
                .dt(dt)
                .build();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidParameter { name: "dt", .. })
            ));
        }
    }

    #[test]
    fn test_config_missing_fields() {
        let result = MonteCarloConfig::builder().n_steps(100).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_paths",
                ..
            })
        ));

        let result = MonteCarloConfig::builder().n_paths(1000).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_steps",
                ..
            })
        ));
    }

    #[test]
    fn test_memory_footprint() {
        let config = MonteCarloConfig::builder()
            .n_paths(10)
            .n_steps(4)
            .build()
            .unwrap();
        assert_eq!(config.memory_footprint(), 10 * 5 + 10 * 4);
    }
}
