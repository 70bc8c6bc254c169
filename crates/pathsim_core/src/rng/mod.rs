//! # Random Number Generation Infrastructure
//!
//! Random sources for path simulation. Every simulation call receives its
//! generator explicitly; there is no process-wide RNG.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Seeded generators produce identical sequences
//! - **Batch draws**: All shocks of a run are drawn into one pre-allocated buffer
//! - **Non-determinism on request**: [`SimRng::from_entropy`] for unseeded runs
//!
//! ## Usage Example
//!
//! ```rust
//! use pathsim_core::rng::SimRng;
//!
//! let mut rng = SimRng::from_seed(12345);
//! let mut shocks = vec![0.0; 1000];
//! rng.fill_normal(&mut shocks);
//! ```

mod prng;

pub use prng::SimRng;
