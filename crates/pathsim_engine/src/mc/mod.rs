//! Monte Carlo simulation orchestration.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloSimulator<P: StochasticProcess>
//! ├── MonteCarloConfig  (path count, step count, dt, seed)
//! ├── SimRng            (injected random source)
//! └── P::simulate_paths (process-specific update rule)
//! ```
//!
//! The simulator is currently a pass-through. Variance reduction, chunked
//! execution or retry policies belong here rather than in the processes.

pub mod config;
pub mod error;
pub mod simulator;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_DT, MAX_PATHS, MAX_STEPS};
pub use error::ConfigError;
pub use simulator::{MonteCarloSimulator, SimulationRun};
