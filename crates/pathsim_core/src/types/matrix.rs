//! Dense path matrix.
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `data[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` holds the initial condition of the process. A row is one
//! path, a column is the cross-section of all paths at one time step.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{SimulationError, SimulationResult};

/// Matrix of simulated paths with shape `(n_paths, n_steps + 1)`.
///
/// Produced once by a stochastic process and handed to consumers as
/// read-only input; there is no public way to mutate values in place
/// other than through [`PathMatrix::as_mut_slice`] and
/// [`PathMatrix::rows_mut`], which path generators use while filling it.
///
/// # Examples
///
/// ```rust
/// use pathsim_core::types::PathMatrix;
///
/// let m = PathMatrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 1.0, 0.5, 0.25]).unwrap();
/// assert_eq!(m.n_paths(), 2);
/// assert_eq!(m.n_columns(), 3);
/// assert_eq!(m.get(1, 2), Some(0.25));
/// assert_eq!(m.path(0), Some(&[1.0, 2.0, 3.0][..]));
/// assert_eq!(m.column(1), vec![2.0, 0.5]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathMatrix {
    n_paths: usize,
    n_steps: usize,
    data: Vec<f64>,
}

impl PathMatrix {
    /// Number of values a `(n_paths, n_steps + 1)` matrix stores.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] naming `n_steps` if the
    /// count does not fit in `usize`.
    pub fn storage_len(n_paths: usize, n_steps: usize) -> SimulationResult<usize> {
        n_steps
            .checked_add(1)
            .and_then(|width| n_paths.checked_mul(width))
            .ok_or_else(|| {
                SimulationError::invalid_parameter(
                    "n_steps",
                    format!(
                        "grid of {} paths x {} steps overflows the addressable size",
                        n_paths, n_steps
                    ),
                )
            })
    }

    /// Creates a matrix with every entry set to `value`.
    ///
    /// # Errors
    ///
    /// Fails like [`PathMatrix::storage_len`] for an unaddressable shape.
    pub fn filled(n_paths: usize, n_steps: usize, value: f64) -> SimulationResult<Self> {
        Ok(Self {
            n_paths,
            n_steps,
            data: vec![value; Self::storage_len(n_paths, n_steps)?],
        })
    }

    /// Wraps row-major data, validating its length against the shape.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::ShapeMismatch`] if
    /// `data.len() != n_paths * (n_steps + 1)`, and
    /// [`SimulationError::InvalidParameter`] if that product overflows.
    pub fn from_vec(n_paths: usize, n_steps: usize, data: Vec<f64>) -> SimulationResult<Self> {
        let expected = Self::storage_len(n_paths, n_steps)?;
        if data.len() != expected {
            return Err(SimulationError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            n_paths,
            n_steps,
            data,
        })
    }

    /// Builds a matrix from equally long rows.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::ShapeMismatch`] if the rows differ in length,
    /// and [`SimulationError::InvalidParameter`] if a row is empty.
    pub fn from_rows(rows: &[Vec<f64>]) -> SimulationResult<Self> {
        let Some(first) = rows.first() else {
            return Ok(Self {
                n_paths: 0,
                n_steps: 0,
                data: Vec::new(),
            });
        };
        if first.is_empty() {
            return Err(SimulationError::invalid_parameter(
                "rows",
                "each path must contain at least the initial value",
            ));
        }
        let width = first.len();
        let mut data = Vec::with_capacity(rows.len() * width);
        for row in rows {
            if row.len() != width {
                return Err(SimulationError::ShapeMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), width - 1, data)
    }

    /// Number of paths (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps; the matrix has `n_steps + 1` columns.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Number of time columns (`n_steps + 1`).
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.n_steps + 1
    }

    /// Returns `(n_paths, n_steps + 1)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_paths, self.n_columns())
    }

    /// Returns `true` if the matrix holds no paths.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_paths == 0
    }

    /// Value of `path` at time `step`, or `None` if out of range.
    #[inline]
    pub fn get(&self, path: usize, step: usize) -> Option<f64> {
        if path >= self.n_paths || step > self.n_steps {
            return None;
        }
        Some(self.data[path * self.n_columns() + step])
    }

    /// One full path, or `None` if `path` is out of range.
    #[inline]
    pub fn path(&self, path: usize) -> Option<&[f64]> {
        if path >= self.n_paths {
            return None;
        }
        let width = self.n_columns();
        Some(&self.data[path * width..(path + 1) * width])
    }

    /// Copies the cross-section at `step` (one value per path).
    ///
    /// Returns an empty vector if `step` is out of range.
    pub fn column(&self, step: usize) -> Vec<f64> {
        if step > self.n_steps {
            return Vec::new();
        }
        self.data
            .iter()
            .skip(step)
            .step_by(self.n_columns())
            .copied()
            .collect()
    }

    /// Iterates over paths in row order.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.n_columns())
    }

    /// Mutable row iterator for path generators.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, f64> {
        let width = self.n_columns();
        self.data.chunks_exact_mut(width)
    }

    /// Row-major view of the underlying storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major view for path generators.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Returns `true` if every entry is finite.
    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}
