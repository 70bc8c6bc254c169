//! Per-step statistics over a path matrix.

use pathsim_core::math::{mean, median_sorted, percentile_sorted, sort_column, validate_rank};
use pathsim_core::types::{PathMatrix, SimulationError, SimulationResult};
use rayon::prelude::*;
use tracing::debug;

use super::summary::StatisticsSummary;

/// Checks `0 <= p_low <= p_high <= 100`.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidPercentile`] for NaN, out-of-range or
/// unordered bounds. Bounds are never clamped.
pub fn validate_bounds(p_low: f64, p_high: f64) -> SimulationResult<()> {
    let in_range = |p: f64| (0.0..=100.0).contains(&p);
    if !(in_range(p_low) && in_range(p_high) && p_low <= p_high) {
        return Err(SimulationError::InvalidPercentile { p_low, p_high });
    }
    Ok(())
}

/// Statistics view over a borrowed path matrix.
///
/// Holds only the matrix reference and its dimensions. Every call to
/// [`PathStatistics::compute_statistics`] recomputes from scratch.
///
/// # Examples
///
/// ```rust
/// use pathsim_core::types::PathMatrix;
/// use pathsim_engine::statistics::PathStatistics;
///
/// let paths = PathMatrix::from_rows(&[
///     vec![100.0, 90.0],
///     vec![100.0, 100.0],
///     vec![100.0, 110.0],
///     vec![100.0, 140.0],
/// ])
/// .unwrap();
///
/// let summary = PathStatistics::new(&paths)
///     .unwrap()
///     .compute_statistics(25.0, 75.0)
///     .unwrap();
///
/// assert_eq!(summary.mean(), &[100.0, 110.0]);
/// assert_eq!(summary.median(), &[100.0, 105.0]);
/// assert_eq!(summary.low(), &[100.0, 97.5]);
/// assert_eq!(summary.high(), &[100.0, 117.5]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PathStatistics<'a> {
    paths: &'a PathMatrix,
}

impl<'a> PathStatistics<'a> {
    /// Creates a statistics view.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::EmptyPaths`] if the matrix has no rows.
    pub fn new(paths: &'a PathMatrix) -> SimulationResult<Self> {
        if paths.is_empty() {
            return Err(SimulationError::EmptyPaths);
        }
        Ok(Self { paths })
    }

    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.paths.n_paths()
    }

    /// Number of time steps (the summary has `n_steps + 1` entries).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.paths.n_steps()
    }

    /// Underlying matrix.
    #[inline]
    pub fn paths(&self) -> &'a PathMatrix {
        self.paths
    }

    /// Mean, median and the `p_low` / `p_high` percentiles at every step.
    ///
    /// Percentiles interpolate linearly between order statistics; the median
    /// averages the two middle values for an even path count.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidPercentile`] unless
    /// `0 <= p_low <= p_high <= 100`.
    pub fn compute_statistics(&self, p_low: f64, p_high: f64) -> SimulationResult<StatisticsSummary> {
        validate_bounds(p_low, p_high)?;

        let per_step: Vec<(f64, f64, f64, f64)> = (0..self.paths.n_columns())
            .into_par_iter()
            .map(|step| {
                let mut column = self.paths.column(step);
                let avg = mean(&column);
                sort_column(&mut column);
                (
                    avg,
                    median_sorted(&column),
                    percentile_sorted(&column, p_low),
                    percentile_sorted(&column, p_high),
                )
            })
            .collect();

        let n = per_step.len();
        let (mut means, mut medians, mut lows, mut highs) = (
            Vec::with_capacity(n),
            Vec::with_capacity(n),
            Vec::with_capacity(n),
            Vec::with_capacity(n),
        );
        for (avg, med, low, high) in per_step {
            means.push(avg);
            medians.push(med);
            lows.push(low);
            highs.push(high);
        }

        debug!(
            n_paths = self.n_paths(),
            n_steps = self.n_steps(),
            p_low,
            p_high,
            "path statistics computed"
        );

        Ok(StatisticsSummary::new(
            p_low, p_high, means, medians, lows, highs,
        ))
    }

    /// Single percentile series across all steps.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if `p` is outside `[0, 100]`.
    pub fn percentile_series(&self, p: f64) -> SimulationResult<Vec<f64>> {
        validate_rank(p)?;
        Ok((0..self.paths.n_columns())
            .into_par_iter()
            .map(|step| {
                let mut column = self.paths.column(step);
                sort_column(&mut column);
                percentile_sorted(&column, p)
            })
            .collect())
    }

    /// Mean series across all steps.
    pub fn mean_series(&self) -> Vec<f64> {
        (0..self.paths.n_columns())
            .into_par_iter()
            .map(|step| mean(&self.paths.column(step)))
            .collect()
    }
}
