//! Long-format reshaping of simulated paths.
//!
//! Charting front ends want one record per `(step, path, value)` triple
//! rather than a wide matrix. [`to_long_format`] produces that view for the
//! first few paths of a run.

use pathsim_core::types::PathMatrix;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One observation of one path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PathPoint {
    /// Time column index.
    pub step: usize,
    /// Path (row) index.
    pub path: usize,
    /// Simulated value.
    pub value: f64,
}

/// Reshapes the first `min(n_to_plot, n_paths)` paths into long format.
///
/// Records are ordered by path, then by step.
///
/// # Examples
///
/// ```rust
/// use pathsim_core::types::PathMatrix;
/// use pathsim_engine::export::{to_long_format, PathPoint};
///
/// let paths = PathMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let points = to_long_format(&paths, 1);
///
/// assert_eq!(
///     points,
///     vec![
///         PathPoint { step: 0, path: 0, value: 1.0 },
///         PathPoint { step: 1, path: 0, value: 2.0 },
///     ]
/// );
/// ```
pub fn to_long_format(paths: &PathMatrix, n_to_plot: usize) -> Vec<PathPoint> {
    let n = n_to_plot.min(paths.n_paths());
    paths
        .rows()
        .take(n)
        .enumerate()
        .flat_map(|(path, row)| {
            row.iter()
                .enumerate()
                .map(move |(step, &value)| PathPoint { step, path, value })
        })
        .collect()
}
