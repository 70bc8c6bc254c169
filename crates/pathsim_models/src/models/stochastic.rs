//! StochasticProcess trait for a unified path-generation interface.
//!
//! A process owns its parameters and knows its initial condition and update
//! rule. Everything else (orchestration, statistics) is written against this
//! trait, so adding a mean-reverting or jump process means adding one
//! implementation and nothing more.
//!
//! ## Contract
//!
//! `simulate_paths(n_paths, n_steps, dt, rng)` returns a matrix of shape
//! `(n_paths, n_steps + 1)` whose column 0 is [`StochasticProcess::initial_value`]
//! for every row and whose later columns follow the process's update rule.
//! Preconditions (`n_paths >= 1`, `n_steps >= 1`, `dt > 0`) are checked with
//! [`validate_grid`] before anything is allocated.

use pathsim_core::rng::SimRng;
use pathsim_core::types::{PathMatrix, SimulationError, SimulationResult};

/// Capability to produce a matrix of simulated paths.
///
/// # Example
///
/// ```
/// use pathsim_core::rng::SimRng;
/// use pathsim_core::types::{PathMatrix, SimulationResult};
/// use pathsim_models::models::{validate_grid, StochasticProcess};
///
/// /// A process that never moves.
/// struct Constant(f64);
///
/// impl StochasticProcess for Constant {
///     fn name(&self) -> &'static str {
///         "Constant"
///     }
///
///     fn initial_value(&self) -> f64 {
///         self.0
///     }
///
///     fn simulate_paths(
///         &self,
///         n_paths: usize,
///         n_steps: usize,
///         dt: f64,
///         _rng: &mut SimRng,
///     ) -> SimulationResult<PathMatrix> {
///         validate_grid(n_paths, n_steps, dt)?;
///         PathMatrix::filled(n_paths, n_steps, self.0)
///     }
/// }
///
/// let paths = Constant(1.0)
///     .simulate_paths(2, 3, 0.5, &mut SimRng::from_seed(0))
///     .unwrap();
/// assert_eq!(paths.shape(), (2, 4));
/// ```
pub trait StochasticProcess: Send + Sync {
    /// Process name for logging.
    fn name(&self) -> &'static str;

    /// Deterministic initial condition (column 0 of every path).
    fn initial_value(&self) -> f64;

    /// Generates `n_paths` paths of `n_steps` increments of length `dt`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if `n_paths == 0`,
    /// `n_steps == 0`, or `dt` is not a positive finite number.
    fn simulate_paths(
        &self,
        n_paths: usize,
        n_steps: usize,
        dt: f64,
        rng: &mut SimRng,
    ) -> SimulationResult<PathMatrix>;
}

impl<P: StochasticProcess + ?Sized> StochasticProcess for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn initial_value(&self) -> f64 {
        (**self).initial_value()
    }

    fn simulate_paths(
        &self,
        n_paths: usize,
        n_steps: usize,
        dt: f64,
        rng: &mut SimRng,
    ) -> SimulationResult<PathMatrix> {
        (**self).simulate_paths(n_paths, n_steps, dt, rng)
    }
}

/// Checks the simulation grid shared by every process.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] naming the first offending
/// argument.
pub fn validate_grid(n_paths: usize, n_steps: usize, dt: f64) -> SimulationResult<()> {
    if n_paths == 0 {
        return Err(SimulationError::invalid_parameter(
            "n_paths",
            "must be at least 1, got 0",
        ));
    }
    if n_steps == 0 {
        return Err(SimulationError::invalid_parameter(
            "n_steps",
            "must be at least 1, got 0",
        ));
    }
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimulationError::invalid_parameter(
            "dt",
            format!("must be positive and finite, got {}", dt),
        ));
    }
    // The path matrix is the largest buffer; the shock table is smaller.
    PathMatrix::storage_len(n_paths, n_steps)?;
    Ok(())
}

/// Draws the full `(n_paths, n_steps)` table of standard normal shocks.
///
/// Shocks are laid out row-major by path: `shocks[path * n_steps + step]`.
/// The whole table is drawn from `rng` in one pass before any path is
/// evolved.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] if the table size overflows.
pub fn draw_shocks(
    n_paths: usize,
    n_steps: usize,
    rng: &mut SimRng,
) -> SimulationResult<Vec<f64>> {
    let len = n_paths.checked_mul(n_steps).ok_or_else(|| {
        SimulationError::invalid_parameter(
            "n_steps",
            format!(
                "shock table of {} paths x {} steps overflows the addressable size",
                n_paths, n_steps
            ),
        )
    })?;
    Ok(rng.normal_vec(len))
}
