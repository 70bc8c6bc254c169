//! Mean, median and percentile estimators.
//!
//! Percentiles use linear interpolation between the two nearest order
//! statistics. For a sorted sample `x[0..n]` and rank `p` in `[0, 100]`:
//!
//! ```text
//! q = p / 100
//! h = n * q + (1 - q) - 1          // = (n - 1) * q
//! t = h - floor(h)
//! a = x[floor(h)], b = x[floor(h) + 1]
//! result = a + t * (b - a)          if t <  0.5
//!        = b - (1 - t) * (b - a)    if t >= 0.5
//! ```
//!
//! This is NumPy's default estimator (`method="linear"`), evaluated in the
//! same floating-point order so results agree bit for bit. `p = 0` is the
//! minimum, `p = 100` the maximum and a constant sample returns that
//! constant for every rank.

use std::cmp::Ordering;

use crate::traits::Float;
use crate::types::{SimulationError, SimulationResult};

/// Arithmetic mean. Returns NaN for an empty slice.
///
/// # Examples
/// ```
/// use pathsim_core::math::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert!(mean::<f64>(&[]).is_nan());
/// ```
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::nan();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    match T::from(values.len()) {
        Some(n) => sum / n,
        None => T::nan(),
    }
}

/// Checks that a percentile rank lies in `[0, 100]`.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] for NaN or out-of-range ranks.
pub fn validate_rank(p: f64) -> SimulationResult<()> {
    if !(0.0..=100.0).contains(&p) {
        return Err(SimulationError::invalid_parameter(
            "percentile",
            format!("rank must be in [0, 100], got {}", p),
        ));
    }
    Ok(())
}

/// Sorts a column ascending. NaN values compare equal to everything and
/// therefore end up in unspecified positions; callers that care check for
/// NaN first.
pub fn sort_column<T: Float>(values: &mut [T]) {
    values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Interpolates between `a` and `b`, anchoring on the nearer endpoint.
#[inline]
fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    let diff = b - a;
    let half = T::one() / (T::one() + T::one());
    if t >= half {
        b - diff * (T::one() - t)
    } else {
        a + diff * t
    }
}

/// Percentile of an already sorted, non-empty slice.
///
/// The rank is not validated; use [`percentile`] for checked access.
/// A NaN anywhere in the sample yields NaN.
pub fn percentile_sorted<T: Float>(sorted: &[T], p: f64) -> T {
    let n = sorted.len();
    if n == 0 || sorted.iter().any(|v| v.is_nan()) {
        return T::nan();
    }
    let q = p / 100.0;
    let h = n as f64 * q + (1.0 - q) - 1.0;
    if h >= (n - 1) as f64 {
        return sorted[n - 1];
    }
    if h <= 0.0 {
        return sorted[0];
    }
    let lo = h.floor() as usize;
    let t = T::from(h - lo as f64).unwrap_or_else(T::zero);
    lerp(sorted[lo], sorted[lo + 1], t)
}

/// Median of an already sorted, non-empty slice.
///
/// Even-length samples average the two middle order statistics.
pub fn median_sorted<T: Float>(sorted: &[T]) -> T {
    let n = sorted.len();
    if n == 0 || sorted.iter().any(|v| v.is_nan()) {
        return T::nan();
    }
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / (T::one() + T::one())
    }
}

/// Percentile with linear interpolation. Sorts `values` in place.
///
/// # Errors
///
/// - [`SimulationError::InvalidParameter`] if `p` is outside `[0, 100]`
/// - [`SimulationError::EmptyPaths`] if `values` is empty
///
/// # Examples
/// ```
/// use pathsim_core::math::percentile;
///
/// let mut xs = vec![4.0, 1.0, 3.0, 2.0];
/// assert_eq!(percentile(&mut xs, 0.0).unwrap(), 1.0);
/// assert_eq!(percentile(&mut xs, 25.0).unwrap(), 1.75);
/// assert_eq!(percentile(&mut xs, 100.0).unwrap(), 4.0);
/// ```
pub fn percentile<T: Float>(values: &mut [T], p: f64) -> SimulationResult<T> {
    validate_rank(p)?;
    if values.is_empty() {
        return Err(SimulationError::EmptyPaths);
    }
    sort_column(values);
    Ok(percentile_sorted(values, p))
}

/// Median (50th percentile). Sorts `values` in place.
///
/// # Errors
///
/// Returns [`SimulationError::EmptyPaths`] if `values` is empty.
pub fn median<T: Float>(values: &mut [T]) -> SimulationResult<T> {
    if values.is_empty() {
        return Err(SimulationError::EmptyPaths);
    }
    sort_column(values);
    Ok(median_sorted(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[2.0_f64]), 2.0);
        assert_relative_eq!(mean(&[1.0_f64, 2.0, 4.0]), 7.0 / 3.0);
    }

    #[test]
    fn test_percentile_matches_linear_interpolation() {
        let mut xs = vec![1.0_f64, 2.0, 3.0, 4.0];
        assert_relative_eq!(percentile(&mut xs, 5.0).unwrap(), 1.15, epsilon = 1e-12);
        assert_relative_eq!(percentile(&mut xs, 50.0).unwrap(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(percentile(&mut xs, 95.0).unwrap(), 3.85, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolation_anchors_on_nearer_endpoint() {
        // Upper half interpolates down from `b`.
        let xs = [1.0_f64, 2.0, 3.0, 4.0];
        assert_eq!(percentile_sorted(&xs, 95.0), 3.8499999999999996);
        assert_eq!(percentile_sorted(&xs, 25.0), 1.75);
        assert_eq!(percentile_sorted(&[2.0_f64, 4.0], 5.0), 2.1);
        assert_eq!(percentile_sorted(&[2.0_f64, 4.0], 95.0), 3.9);
        assert_eq!(lerp(0.0_f64, 10.0, 0.5), 5.0);
        assert_eq!(lerp(1.0_f64, 1.0, 0.3), 1.0);
    }

    #[test]
    fn test_median_of_even_sample_is_midpoint() {
        assert_eq!(median_sorted(&[1.0_f64, 3.0]), 2.0);
        assert_eq!(median_sorted(&[0.1_f64, 0.2]), (0.1 + 0.2) / 2.0);
    }

    #[test]
    fn test_percentile_unsorted_input() {
        let mut xs = vec![10.0_f64, 0.0, 5.0];
        assert_eq!(percentile(&mut xs, 50.0).unwrap(), 5.0);
        assert_eq!(xs, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_percentile_single_value() {
        let mut xs = vec![42.0_f64];
        assert_eq!(percentile(&mut xs, 0.0).unwrap(), 42.0);
        assert_eq!(percentile(&mut xs, 37.5).unwrap(), 42.0);
        assert_eq!(percentile(&mut xs, 100.0).unwrap(), 42.0);
    }

    #[test]
    fn test_percentile_constant_sample() {
        let mut xs = vec![7.25_f64; 11];
        for p in [0.0, 5.0, 50.0, 95.0, 100.0] {
            assert_eq!(percentile(&mut xs, p).unwrap(), 7.25);
        }
    }

    #[test]
    fn test_percentile_rejects_bad_rank() {
        let mut xs = vec![1.0_f64, 2.0];
        assert!(percentile(&mut xs, -0.1).is_err());
        assert!(percentile(&mut xs, 100.1).is_err());
        assert!(percentile(&mut xs, f64::NAN).is_err());
    }

    #[test]
    fn test_percentile_empty() {
        let mut xs: Vec<f64> = vec![];
        assert_eq!(percentile(&mut xs, 50.0), Err(SimulationError::EmptyPaths));
        assert_eq!(median(&mut xs), Err(SimulationError::EmptyPaths));
    }

    #[test]
    fn test_median_even_and_odd() {
        let mut odd = vec![3.0_f64, 1.0, 2.0];
        assert_eq!(median(&mut odd).unwrap(), 2.0);

        let mut even = vec![4.0_f64, 1.0, 3.0, 2.0];
        assert_eq!(median(&mut even).unwrap(), 2.5);
    }

    #[test]
    fn test_nan_propagates() {
        let xs = vec![1.0_f64, f64::NAN, 3.0];
        assert!(percentile_sorted(&xs, 50.0).is_nan());
        assert!(median_sorted(&xs).is_nan());
        assert!(mean(&xs).is_nan());
    }

    #[test]
    fn test_f32_support() {
        let mut xs = vec![1.0_f32, 2.0, 3.0];
        assert_eq!(percentile(&mut xs, 50.0).unwrap(), 2.0_f32);
        assert_eq!(mean(&xs), 2.0_f32);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            /// Percentiles are monotone in the rank.
            #[test]
            fn prop_percentile_monotone(
                mut xs in proptest::collection::vec(-1e6f64..1e6, 1..200),
                a in 0.0f64..=100.0,
                b in 0.0f64..=100.0,
            ) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let q_lo = percentile(&mut xs, lo).unwrap();
                let q_hi = percentile(&mut xs, hi).unwrap();
                prop_assert!(q_lo <= q_hi, "p{} = {} > p{} = {}", lo, q_lo, hi, q_hi);
            }

            /// Every percentile lies within the sample range.
            #[test]
            fn prop_percentile_bounded(
                mut xs in proptest::collection::vec(-1e6f64..1e6, 1..200),
                p in 0.0f64..=100.0,
            ) {
                let q = percentile(&mut xs, p).unwrap();
                prop_assert!(q >= xs[0] && q <= xs[xs.len() - 1]);
            }
        }
    }
}
