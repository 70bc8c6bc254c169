//! Descriptive statistics over cross-sections of a path matrix.
//!
//! - `mean`: Arithmetic mean
//! - `median`: 50th percentile with even-count averaging
//! - `percentile`: Linear interpolation between order statistics

pub mod descriptive;

pub use descriptive::{
    mean, median, median_sorted, percentile, percentile_sorted, sort_column, validate_rank,
};
