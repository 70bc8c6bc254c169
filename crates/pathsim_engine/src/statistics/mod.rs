//! Cross-sectional statistics over simulated paths.
//!
//! For every time column of a [`pathsim_core::types::PathMatrix`] the
//! statistics engine computes the mean, the median and two percentile
//! bands across paths. Columns are independent and are evaluated on the
//! rayon pool; the input matrix is never mutated.

pub mod path_statistics;
pub mod summary;

pub use path_statistics::{validate_bounds, PathStatistics};
pub use summary::{percentile_label, StatisticsRow, StatisticsSummary};
