//! Stochastic process models.
//!
//! - `StochasticProcess` trait: Unified path-generation interface
//! - `GeometricBrownianMotion`: Lognormal price process
//!
//! ## Example
//!
//! ```
//! use pathsim_core::rng::SimRng;
//! use pathsim_models::models::{GeometricBrownianMotion, StochasticProcess};
//!
//! let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2).unwrap();
//! let mut rng = SimRng::from_seed(42);
//! let paths = gbm.simulate_paths(10, 252, 1.0 / 252.0, &mut rng).unwrap();
//!
//! assert_eq!(paths.shape(), (10, 253));
//! assert!(paths.column(0).iter().all(|&s| s == 100.0));
//! ```

pub mod gbm;
pub mod stochastic;

pub use gbm::{GbmParams, GeometricBrownianMotion, PARALLEL_PATH_THRESHOLD};
pub use stochastic::{draw_shocks, validate_grid, StochasticProcess};
