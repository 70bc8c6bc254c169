//! Geometric Brownian Motion (GBM) model implementation.
//!
//! GBM is the fundamental model for asset price dynamics:
//! ```text
//! dS = mu * S * dt + sigma * S * dW
//! ```
//!
//! ## Log-space formulation
//!
//! Paths use the exact lognormal increment rather than an Euler step on S:
//! ```text
//! S(t+dt) = S(t) * exp((mu - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z)
//! ```
//! With `s0 > 0` every simulated value is a product of positive factors and
//! therefore strictly positive. With `sigma = 0` the path is the
//! deterministic curve `s0 * exp(mu * t)`.

use rayon::prelude::*;

use pathsim_core::rng::SimRng;
use pathsim_core::types::{PathMatrix, SimulationError, SimulationResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::stochastic::{draw_shocks, validate_grid, StochasticProcess};

/// Minimum path count above which rows are evolved on the rayon pool.
pub const PARALLEL_PATH_THRESHOLD: usize = 2048;

/// GBM model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GbmParams {
    /// Initial value (S0), strictly positive.
    pub s0: f64,
    /// Drift (mu), any sign.
    pub mu: f64,
    /// Volatility (sigma), non-negative.
    pub sigma: f64,
}

impl GbmParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if `s0` is not positive
    /// and finite, `mu` is not finite, or `sigma` is negative or not finite.
    pub fn new(s0: f64, mu: f64, sigma: f64) -> SimulationResult<Self> {
        let params = Self { s0, mu, sigma };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameters.
    pub fn validate(&self) -> SimulationResult<()> {
        if !(self.s0.is_finite() && self.s0 > 0.0) {
            return Err(SimulationError::invalid_parameter(
                "s0",
                format!("must be positive and finite, got {}", self.s0),
            ));
        }
        if !self.mu.is_finite() {
            return Err(SimulationError::invalid_parameter(
                "mu",
                format!("must be finite, got {}", self.mu),
            ));
        }
        if !(self.sigma.is_finite() && self.sigma >= 0.0) {
            return Err(SimulationError::invalid_parameter(
                "sigma",
                format!("must be non-negative and finite, got {}", self.sigma),
            ));
        }
        Ok(())
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            s0: 100.0,
            mu: 0.0,
            sigma: 0.05,
        }
    }
}

/// Geometric Brownian Motion process.
///
/// Parameters are fixed at construction.
///
/// # Examples
///
/// ```
/// use pathsim_models::models::GeometricBrownianMotion;
///
/// let gbm = GeometricBrownianMotion::new(100.0, 0.1, 0.0).unwrap();
/// let paths = gbm.evolve(&[0.0], 1, 1, 1.0).unwrap();
/// assert_eq!(paths.path(0).unwrap(), &[100.0, 100.0 * 0.1_f64.exp()]);
///
/// assert!(GeometricBrownianMotion::new(0.0, 0.1, 0.2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometricBrownianMotion {
    params: GbmParams,
}

impl GeometricBrownianMotion {
    /// Creates a GBM process with initial value `s0`, drift `mu` and volatility `sigma`.
    ///
    /// # Errors
    ///
    /// See [`GbmParams::new`].
    pub fn new(s0: f64, mu: f64, sigma: f64) -> SimulationResult<Self> {
        Self::from_params(GbmParams::new(s0, mu, sigma)?)
    }

    /// Creates a GBM process from a parameter set.
    pub fn from_params(params: GbmParams) -> SimulationResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Parameter set.
    #[inline]
    pub fn params(&self) -> &GbmParams {
        &self.params
    }

    /// Initial value S0.
    #[inline]
    pub fn s0(&self) -> f64 {
        self.params.s0
    }

    /// Drift mu.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.params.mu
    }

    /// Volatility sigma.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.params.sigma
    }

    /// Per-step log drift and log volatility: `((mu - sigma^2/2) dt, sigma sqrt(dt))`.
    #[inline]
    pub fn step_coefficients(&self, dt: f64) -> (f64, f64) {
        let sigma = self.params.sigma;
        let drift = (self.params.mu - 0.5 * sigma * sigma) * dt;
        let vol = sigma * dt.sqrt();
        (drift, vol)
    }

    /// `E[S(t)] = s0 * exp(mu * t)`.
    pub fn expected_value(&self, t: f64) -> f64 {
        self.params.s0 * (self.params.mu * t).exp()
    }

    /// `Var[S(t)] = s0^2 * exp(2 mu t) * (exp(sigma^2 t) - 1)`.
    pub fn variance(&self, t: f64) -> f64 {
        let s0 = self.params.s0;
        let sigma = self.params.sigma;
        s0 * s0 * (2.0 * self.params.mu * t).exp() * ((sigma * sigma * t).exp() - 1.0)
    }

    /// Evolves paths from a pre-drawn shock table.
    ///
    /// `shocks` is row-major `(n_paths, n_steps)`. The result is a pure
    /// function of the inputs: identical shocks give bit-identical paths,
    /// whether rows run sequentially or on the rayon pool.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidParameter`] for an invalid grid
    /// - [`SimulationError::ShapeMismatch`] if `shocks.len() != n_paths * n_steps`
    pub fn evolve(
        &self,
        shocks: &[f64],
        n_paths: usize,
        n_steps: usize,
        dt: f64,
    ) -> SimulationResult<PathMatrix> {
        validate_grid(n_paths, n_steps, dt)?;
        let expected = n_paths * n_steps;
        if shocks.len() != expected {
            return Err(SimulationError::ShapeMismatch {
                expected,
                actual: shocks.len(),
            });
        }

        let (drift, vol) = self.step_coefficients(dt);
        let mut paths = PathMatrix::filled(n_paths, n_steps, self.params.s0)?;

        let evolve_row = |(row, z): (&mut [f64], &[f64])| {
            for t in 0..n_steps {
                row[t + 1] = row[t] * (drift + vol * z[t]).exp();
            }
        };

        if n_paths >= PARALLEL_PATH_THRESHOLD {
            paths
                .as_mut_slice()
                .par_chunks_exact_mut(n_steps + 1)
                .zip(shocks.par_chunks_exact(n_steps))
                .for_each(evolve_row);
        } else {
            paths
                .rows_mut()
                .zip(shocks.chunks_exact(n_steps))
                .for_each(evolve_row);
        }

        Ok(paths)
    }
}

impl StochasticProcess for GeometricBrownianMotion {
    fn name(&self) -> &'static str {
        "GBM"
    }

    fn initial_value(&self) -> f64 {
        self.params.s0
    }

    fn simulate_paths(
        &self,
        n_paths: usize,
        n_steps: usize,
        dt: f64,
        rng: &mut SimRng,
    ) -> SimulationResult<PathMatrix> {
        validate_grid(n_paths, n_steps, dt)?;
        let shocks = draw_shocks(n_paths, n_steps, rng)?;
        self.evolve(&shocks, n_paths, n_steps, dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gbm_params_new_valid() {
        let p = GbmParams::new(100.0, -0.3, 0.2).unwrap();
        assert_eq!(p.s0, 100.0);
        assert_eq!(p.mu, -0.3);
        assert_eq!(p.sigma, 0.2);
    }

    #[test]
    fn test_gbm_params_invalid_s0() {
        for s0 in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let err = GbmParams::new(s0, 0.05, 0.2).unwrap_err();
            assert_eq!(err.parameter(), Some("s0"));
        }
    }

    #[test]
    fn test_gbm_params_invalid_sigma() {
        let err = GbmParams::new(100.0, 0.05, -0.1).unwrap_err();
        assert_eq!(err.parameter(), Some("sigma"));
    }

    #[test]
    fn test_gbm_params_invalid_mu() {
        let err = GbmParams::new(100.0, f64::NAN, 0.1).unwrap_err();
        assert_eq!(err.parameter(), Some("mu"));
    }

    #[test]
    fn test_gbm_params_default() {
        let p = GbmParams::default();
        assert_eq!((p.s0, p.mu, p.sigma), (100.0, 0.0, 0.05));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_step_coefficients() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2).unwrap();
        let dt = 1.0 / 252.0;
        let (drift, vol) = gbm.step_coefficients(dt);
        assert_relative_eq!(drift, (0.05 - 0.5 * 0.04) * dt, epsilon = 1e-15);
        assert_relative_eq!(vol, 0.2 * dt.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_evolve_single_step_by_hand() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2).unwrap();
        let dt = 0.5;
        let z = 1.3;
        let paths = gbm.evolve(&[z], 1, 1, dt).unwrap();

        let expected = 100.0 * ((0.05 - 0.5 * 0.2 * 0.2) * dt + 0.2 * dt.sqrt() * z).exp();
        assert_eq!(paths.get(0, 1), Some(expected));
    }

    #[test]
    fn test_evolve_shock_sign() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.0, 0.2).unwrap();
        let up = gbm.evolve(&[1.0], 1, 1, 1.0 / 252.0).unwrap();
        let down = gbm.evolve(&[-1.0], 1, 1, 1.0 / 252.0).unwrap();
        assert!(up.get(0, 1).unwrap() > 100.0);
        assert!(down.get(0, 1).unwrap() < 100.0);
    }

    #[test]
    fn test_evolve_uses_shocks_row_major() {
        let gbm = GeometricBrownianMotion::new(1.0, 0.0, 1.0).unwrap();
        // Row 0 gets zeros, row 1 gets a single positive shock at step 1
        let shocks = [0.0, 0.0, 0.0, 2.0];
        let paths = gbm.evolve(&shocks, 2, 2, 1.0).unwrap();

        let drift: f64 = -0.5;
        assert_relative_eq!(paths.get(0, 2).unwrap(), (2.0 * drift).exp(), epsilon = 1e-14);
        assert_relative_eq!(paths.get(1, 1).unwrap(), drift.exp(), epsilon = 1e-14);
        assert_relative_eq!(
            paths.get(1, 2).unwrap(),
            drift.exp() * (drift + 2.0).exp(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_evolve_shape_mismatch() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.0, 0.2).unwrap();
        let err = gbm.evolve(&[0.0; 5], 2, 3, 0.1).unwrap_err();
        assert_eq!(
            err,
            SimulationError::ShapeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_zero_volatility_is_deterministic_growth() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.1, 0.0).unwrap();
        let dt = 0.25;
        let mut rng = SimRng::from_seed(5);
        let paths = gbm.simulate_paths(4, 8, dt, &mut rng).unwrap();

        for t in 0..=8 {
            let expected = 100.0 * (0.1 * dt * t as f64).exp();
            for value in paths.column(t) {
                assert_relative_eq!(value, expected, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_flat_scenario() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.0, 0.0).unwrap();
        let paths = gbm
            .simulate_paths(5, 3, 1.0, &mut SimRng::from_seed(1))
            .unwrap();
        assert_eq!(paths.shape(), (5, 4));
        for row in paths.rows() {
            assert_eq!(row, &[100.0, 100.0, 100.0, 100.0]);
        }
    }

    #[test]
    fn test_simulate_rejects_zero_paths() {
        let gbm = GeometricBrownianMotion::from_params(GbmParams::default()).unwrap();
        let err = gbm
            .simulate_paths(0, 10, 0.1, &mut SimRng::from_seed(1))
            .unwrap_err();
        assert_eq!(err.parameter(), Some("n_paths"));
    }

    #[test]
    fn test_simulate_rejects_overflowing_grid() {
        let gbm = GeometricBrownianMotion::from_params(GbmParams::default()).unwrap();
        let err = gbm
            .simulate_paths(2, usize::MAX, 1.0, &mut SimRng::from_seed(1))
            .unwrap_err();
        assert_eq!(err.parameter(), Some("n_steps"));
        let err = gbm.evolve(&[], usize::MAX, 2, 1.0).unwrap_err();
        assert_eq!(err.parameter(), Some("n_steps"));
    }

    #[test]
    fn test_simulate_matches_evolve_on_same_shocks() {
        let gbm = GeometricBrownianMotion::new(50.0, 0.02, 0.3).unwrap();
        let simulated = gbm
            .simulate_paths(7, 20, 0.01, &mut SimRng::from_seed(99))
            .unwrap();

        let shocks = draw_shocks(7, 20, &mut SimRng::from_seed(99)).unwrap();
        let evolved = gbm.evolve(&shocks, 7, 20, 0.01).unwrap();
        assert_eq!(simulated, evolved);
    }

    #[test]
    fn test_parallel_and_sequential_rows_agree() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.4).unwrap();
        let n_steps = 5;
        let n_paths = PARALLEL_PATH_THRESHOLD + 3;
        let shocks = draw_shocks(n_paths, n_steps, &mut SimRng::from_seed(2024)).unwrap();

        let parallel = gbm.evolve(&shocks, n_paths, n_steps, 0.1).unwrap();

        // Evolve the first rows below the threshold and compare bit for bit
        let head = 10;
        let sequential = gbm
            .evolve(&shocks[..head * n_steps], head, n_steps, 0.1)
            .unwrap();
        for p in 0..head {
            assert_eq!(parallel.path(p), sequential.path(p));
        }
    }

    #[test]
    fn test_moments() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(gbm.expected_value(1.0), 100.0 * 0.05_f64.exp());
        assert_relative_eq!(
            gbm.variance(1.0),
            10_000.0 * 0.1_f64.exp() * (0.04_f64.exp() - 1.0)
        );
        assert_eq!(gbm.variance(0.0), 0.0);
    }
}
