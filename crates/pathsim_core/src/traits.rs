//! Generic numeric traits.
//!
//! The descriptive statistics in [`crate::math`] are written against
//! [`Float`] so they work for `f32` columns as well as the `f64` matrices
//! produced by the simulation engine.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pathsim_core::traits::Float;
///
/// fn growth<T: Float>(mu: T, t: T) -> T {
///     (mu * t).exp()
/// }
///
/// let g: f64 = growth(0.1, 1.0);
/// assert!((g - 1.105171).abs() < 1e-6);
/// ```
pub use num_traits::Float;
