/// Computes a quantile from sorted data using linear interpolation.
///
/// This uses the "R-7" definition: the quantile at probability `p` sits at
/// rank `(n - 1) * p` and is interpolated linearly between the two
/// surrounding order statistics.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `p` - Probability in `[0, 1]`
///
/// # Panics
///
/// Panics if `sorted_values` is empty, not sorted in ascending order, or if
/// `p` is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use evalcost_stats::quantile::quantile_of_sorted;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_of_sorted(&values, 0.5), 2.5);
/// assert_eq!(quantile_of_sorted(&values, 0.0), 1.0);
/// assert_eq!(quantile_of_sorted(&values, 1.0), 4.0);
/// ```
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn quantile_of_sorted(sorted_values: &[f64], p: f64) -> f64 {
    assert!(!sorted_values.is_empty(), "cannot take a quantile of an empty slice");
    assert!((0.0..=1.0).contains(&p), "probability must be in [0, 1]");
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let n = sorted_values.len();
    let rank = (n - 1) as f64 * p;
    let lo = rank.floor() as usize;
    let frac = rank - rank.floor();
    if lo + 1 >= n || frac == 0.0 {
        return sorted_values[lo.min(n - 1)];
    }
    let lower = sorted_values[lo];
    let upper = sorted_values[lo + 1];
    lower + frac * (upper - lower)
}

/// Computes a quantile from unsorted data.
///
/// The values are copied and sorted internally; use [`quantile_of_sorted`]
/// when the data is already sorted.
///
/// # Panics
///
/// Panics if `values` is empty or `p` is outside `[0, 1]`.
#[must_use]
pub fn quantile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_of_sorted(&sorted, p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        assert_eq!(quantile_of_sorted(&[7.0], 0.0), 7.0);
        assert_eq!(quantile_of_sorted(&[7.0], 0.5), 7.0);
        assert_eq!(quantile_of_sorted(&[7.0], 1.0), 7.0);
    }

    #[test]
    fn test_median_of_even_count_interpolates() {
        let values = [1.0, 2.0, 3.0, 10.0];
        assert_eq!(quantile_of_sorted(&values, 0.5), 2.5);
    }

    #[test]
    fn test_median_of_odd_count_is_exact() {
        let values = [1.0, 5.0, 9.0];
        assert_eq!(quantile_of_sorted(&values, 0.5), 5.0);
    }

    #[test]
    fn test_interpolation_between_order_statistics() {
        // rank = 3 * 0.05 = 0.15 -> between values[0] and values[1]
        let values = [0.0, 10.0, 20.0, 30.0];
        let q = quantile_of_sorted(&values, 0.05);
        assert!((q - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_extremes() {
        let values = [2.0, 4.0, 8.0];
        assert_eq!(quantile_of_sorted(&values, 0.0), 2.0);
        assert_eq!(quantile_of_sorted(&values, 1.0), 8.0);
    }

    #[test]
    fn test_unsorted_entry_point_sorts_first() {
        let values = [9.0, 1.0, 5.0];
        assert_eq!(quantile(&values, 0.5), 5.0);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn test_empty_input_panics() {
        let _ = quantile_of_sorted(&[], 0.5);
    }

    #[test]
    #[should_panic(expected = "sorted")]
    fn test_unsorted_input_panics() {
        let _ = quantile_of_sorted(&[3.0, 1.0, 2.0], 0.5);
    }
}
