/// Descriptive summary of a sample.
///
/// Holds the handful of measures the experiment commands print while running
/// and use when aggregating per-group costs.
#[derive(Debug, Clone, Copy)]
pub struct SampleSummary {
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl SampleSummary {
    /// Computes a summary over the given values.
    ///
    /// Returns `None` for an empty sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use evalcost_stats::descriptive::SampleSummary;
    ///
    /// let summary = SampleSummary::new([1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(summary.mean, 2.0);
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 3.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_yields_none() {
        assert!(SampleSummary::new([]).is_none());
    }

    #[test]
    fn test_single_value() {
        let summary = SampleSummary::new([5.0]).unwrap();
        assert_eq!(summary.min, 5.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_known_standard_deviation() {
        let summary = SampleSummary::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.std_dev, 2.0);
    }
}
