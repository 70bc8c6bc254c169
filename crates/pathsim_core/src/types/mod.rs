//! Core value types.
//!
//! - `PathMatrix`: Dense row-major matrix of simulated paths
//! - `SimulationError`: Invalid-input failures raised by the core

pub mod error;
pub mod matrix;

pub use error::{SimulationError, SimulationResult};
pub use matrix::PathMatrix;
