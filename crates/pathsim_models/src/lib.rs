//! # Pathsim Models (L2: Stochastic Processes)
//!
//! Stochastic processes that generate path matrices.
//!
//! This crate provides:
//! - The [`models::StochasticProcess`] capability: produce an
//!   `(n_paths, n_steps + 1)` matrix from a step count, a time increment and
//!   an injected random source
//! - [`models::GeometricBrownianMotion`], the exact lognormal GBM scheme
//!
//! ## Design Principles
//!
//! - **Open polymorphism**: new processes implement the trait; the simulator
//!   and statistics never name a concrete process
//! - **Batch randomness**: every shock of a run is drawn before the time loop
//! - **Fail fast**: parameters are validated at construction and at call time

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod models;
