//! Statistics summary returned by [`super::PathStatistics::compute_statistics`].

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Name of a percentile series, e.g. `p5` or `p2.5`.
///
/// # Examples
/// ```
/// use pathsim_engine::statistics::percentile_label;
///
/// assert_eq!(percentile_label(5.0), "p5");
/// assert_eq!(percentile_label(97.5), "p97.5");
/// ```
pub fn percentile_label(p: f64) -> String {
    format!("p{}", p)
}

/// Per-step statistics across paths.
///
/// Every series has one value per time column (`n_steps + 1`). Series are
/// addressable by name: `mean`, `median`, `p{p_low}` and `p{p_high}`.
/// Serialises as a map with exactly those keys; equal bounds share one key.
#[derive(Clone, Debug, PartialEq)]
pub struct StatisticsSummary {
    p_low: f64,
    p_high: f64,
    mean: Vec<f64>,
    median: Vec<f64>,
    low: Vec<f64>,
    high: Vec<f64>,
}

/// One time step of a [`StatisticsSummary`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatisticsRow {
    /// Time column index.
    pub step: usize,
    /// Mean across paths.
    pub mean: f64,
    /// Median across paths.
    pub median: f64,
    /// Lower percentile.
    pub low: f64,
    /// Upper percentile.
    pub high: f64,
}

impl StatisticsSummary {
    pub(crate) fn new(
        p_low: f64,
        p_high: f64,
        mean: Vec<f64>,
        median: Vec<f64>,
        low: Vec<f64>,
        high: Vec<f64>,
    ) -> Self {
        debug_assert!(
            mean.len() == median.len() && mean.len() == low.len() && mean.len() == high.len()
        );
        Self {
            p_low,
            p_high,
            mean,
            median,
            low,
            high,
        }
    }

    /// Number of time columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Returns `true` if there are no time columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Lower percentile rank.
    #[inline]
    pub fn p_low(&self) -> f64 {
        self.p_low
    }

    /// Upper percentile rank.
    #[inline]
    pub fn p_high(&self) -> f64 {
        self.p_high
    }

    /// Mean per step.
    #[inline]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Median per step.
    #[inline]
    pub fn median(&self) -> &[f64] {
        &self.median
    }

    /// Lower percentile per step.
    #[inline]
    pub fn low(&self) -> &[f64] {
        &self.low
    }

    /// Upper percentile per step.
    #[inline]
    pub fn high(&self) -> &[f64] {
        &self.high
    }

    /// Named series in output order: `mean`, `median`, `p{low}`, `p{high}`.
    ///
    /// When both bounds map to the same label the band is a single series.
    pub fn series(&self) -> Vec<(String, &[f64])> {
        let low = percentile_label(self.p_low);
        let high = percentile_label(self.p_high);
        let collapsed = low == high;

        let mut series = vec![
            ("mean".to_string(), self.mean.as_slice()),
            ("median".to_string(), self.median.as_slice()),
            (low, self.low.as_slice()),
        ];
        if !collapsed {
            series.push((high, self.high.as_slice()));
        }
        series
    }

    /// Series names, in the order of [`StatisticsSummary::series`].
    pub fn labels(&self) -> Vec<String> {
        self.series().into_iter().map(|(name, _)| name).collect()
    }

    /// Series by name.
    ///
    /// # Examples
    /// ```
    /// use pathsim_core::types::PathMatrix;
    /// use pathsim_engine::statistics::PathStatistics;
    ///
    /// let paths = PathMatrix::filled(4, 2, 3.0).unwrap();
    /// let summary = PathStatistics::new(&paths)
    ///     .unwrap()
    ///     .compute_statistics(5.0, 95.0)
    ///     .unwrap();
    ///
    /// assert_eq!(summary.get("p95"), Some(&[3.0, 3.0, 3.0][..]));
    /// assert_eq!(summary.get("p50"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        match name {
            "mean" => Some(&self.mean),
            "median" => Some(&self.median),
            _ if name == percentile_label(self.p_low) => Some(&self.low),
            _ if name == percentile_label(self.p_high) => Some(&self.high),
            _ => None,
        }
    }

    /// Row view, one entry per time step.
    pub fn rows(&self) -> impl Iterator<Item = StatisticsRow> + '_ {
        (0..self.len()).map(move |step| StatisticsRow {
            step,
            mean: self.mean[step],
            median: self.median[step],
            low: self.low[step],
            high: self.high[step],
        })
    }

    /// Width of the percentile band per step (`high - low`).
    pub fn band_width(&self) -> Vec<f64> {
        self.high
            .iter()
            .zip(&self.low)
            .map(|(high, low)| high - low)
            .collect()
    }
}

#[cfg(feature = "serde")]
impl Serialize for StatisticsSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let series = self.series();
        let mut map = serializer.serialize_map(Some(series.len()))?;
        for (name, values) in &series {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StatisticsSummary {
        StatisticsSummary::new(
            2.5,
            95.0,
            vec![1.0, 2.0],
            vec![1.0, 1.5],
            vec![0.5, 0.25],
            vec![1.5, 4.0],
        )
    }

    #[test]
    fn test_labels() {
        let s = sample();
        assert_eq!(s.labels(), ["mean", "median", "p2.5", "p95"]);
    }

    #[test]
    fn test_equal_bounds_collapse_to_one_series() {
        let s = StatisticsSummary::new(
            50.0,
            50.0,
            vec![2.0, 3.0],
            vec![2.0, 3.0],
            vec![2.0, 3.0],
            vec![2.0, 3.0],
        );
        assert_eq!(s.labels(), ["mean", "median", "p50"]);
        assert_eq!(s.series().len(), 3);
        assert_eq!(s.get("p50"), Some(&[2.0, 3.0][..]));
    }

    #[test]
    fn test_get_by_name() {
        let s = sample();
        assert_eq!(s.get("mean"), Some(&[1.0, 2.0][..]));
        assert_eq!(s.get("median"), Some(&[1.0, 1.5][..]));
        assert_eq!(s.get("p2.5"), Some(&[0.5, 0.25][..]));
        assert_eq!(s.get("p95"), Some(&[1.5, 4.0][..]));
        assert_eq!(s.get("p5"), None);
    }

    #[test]
    fn test_rows() {
        let rows: Vec<StatisticsRow> = sample().rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            StatisticsRow {
                step: 1,
                mean: 2.0,
                median: 1.5,
                low: 0.25,
                high: 4.0
            }
        );
    }

    #[test]
    fn test_band_width() {
        assert_eq!(sample().band_width(), vec![1.0, 3.75]);
    }
}
