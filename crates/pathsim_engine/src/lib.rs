//! # Pathsim Engine (Layer 3: Simulation and Statistics)
//!
//! Orchestrates stochastic processes into simulation runs and summarises
//! the resulting path matrices.
//!
//! ## Data Flow
//!
//! ```text
//! parameters ──► MonteCarloSimulator::run ──► PathMatrix ──► PathStatistics
//!                      │                                        │
//!                      └─ StochasticProcess::simulate_paths     └─ mean / median / p_low / p_high
//! ```
//!
//! Nothing calls back into an earlier stage.
//!
//! ## Usage Example
//!
//! ```rust
//! use pathsim_core::rng::SimRng;
//! use pathsim_engine::mc::MonteCarloSimulator;
//! use pathsim_engine::statistics::PathStatistics;
//! use pathsim_models::models::GeometricBrownianMotion;
//!
//! let gbm = GeometricBrownianMotion::new(100.0, 0.0, 0.05).unwrap();
//! let simulator = MonteCarloSimulator::new(gbm);
//!
//! let mut rng = SimRng::from_seed(42);
//! let paths = simulator.run(1000, 252, 1.0 / 252.0, &mut rng).unwrap();
//!
//! let stats = PathStatistics::new(&paths).unwrap();
//! let summary = stats.compute_statistics(5.0, 95.0).unwrap();
//!
//! assert_eq!(summary.len(), 253);
//! assert_eq!(summary.get("p5").unwrap()[0], 100.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod export;
pub mod mc;
pub mod statistics;
