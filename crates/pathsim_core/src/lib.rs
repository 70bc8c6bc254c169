//! # pathsim_core: Foundation for Path Simulation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pathsim_core is the bottom layer of the simulation workspace, providing:
//! - The dense path matrix produced by every stochastic process (`types::matrix`)
//! - Error types shared across the workspace (`types::error`)
//! - Injected random number generation (`rng`)
//! - Cross-sectional descriptive statistics: mean, median, percentiles (`math`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pathsim_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - rand / rand_distr: Seeded PRNG and standard normal sampling
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pathsim_core::math::{mean, percentile};
//! use pathsim_core::rng::SimRng;
//! use pathsim_core::types::PathMatrix;
//!
//! let matrix = PathMatrix::filled(3, 2, 100.0).unwrap();
//! assert_eq!(matrix.column(1), vec![100.0, 100.0, 100.0]);
//!
//! let mut column = vec![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(mean(&column), 2.5);
//! assert_eq!(percentile(&mut column, 25.0).unwrap(), 1.75);
//!
//! let mut rng = SimRng::from_seed(42);
//! let _z = rng.gen_normal();
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `PathMatrix`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod rng;
pub mod traits;
pub mod types;
