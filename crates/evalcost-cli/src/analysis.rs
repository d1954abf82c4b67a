//! Figure-data computations.
//!
//! Everything here is pure: the figure commands read tables, push them
//! through these functions, and hand the results to the renderers. Keeping
//! the computations free of I/O keeps them unit-testable.

use anyhow::Context;
use rand::Rng;

use evalcost_stats::{
    bootstrap::bootstrap_mean_interval,
    ranking::{RankSimilarityError, argsort, rank_similarity},
};

/// One x-position of a bootstrap confidence band.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct BandPoint {
    pub x: f64,
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Bootstraps a band point per `(x, observations)` group.
pub fn band_over_groups<R>(
    groups: &[(f64, Vec<f64>)],
    iterations: usize,
    rng: &mut R,
) -> anyhow::Result<Vec<BandPoint>>
where
    R: Rng + ?Sized,
{
    groups
        .iter()
        .map(|(x, observations)| {
            let interval = bootstrap_mean_interval(observations, iterations, rng)
                .with_context(|| format!("no observations for group {x}"))?;
            Ok(BandPoint {
                x: *x,
                mean: interval.mean,
                lower: interval.lower,
                upper: interval.upper,
            })
        })
        .collect()
}

/// Evaluations affordable with the time saved relative to the reference.
///
/// For each group `i`, the time saved by running at that resolution instead
/// of the reference is divided by the group's per-evaluation cost; negative
/// values (a group slower than the reference) clamp to zero.
#[must_use]
pub fn extra_evaluations(totals: &[f64], per_eval: &[f64], reference: usize) -> Vec<f64> {
    let reference_total = totals[reference];
    totals
        .iter()
        .zip(per_eval)
        .map(|(total, cost)| ((reference_total - total) / cost).max(0.0))
        .collect()
}

/// Stacks rankings into a matrix with columns reordered by the reference.
///
/// Row `i` is `rankings[i]` with its items permuted so that the reference
/// row reads `0, 1, 2, ...` left to right; in every other row, a cell then
/// shows where that same item landed under a cheaper evaluation.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ranking_matrix(rankings: &[Vec<usize>], reference: usize) -> Vec<Vec<usize>> {
    let reference_values: Vec<f64> = rankings[reference].iter().map(|&r| r as f64).collect();
    let column_order = argsort(&reference_values);
    rankings
        .iter()
        .map(|ranking| column_order.iter().map(|&item| ranking[item]).collect())
        .collect()
}

/// Items whose reference rank falls in the best `fraction`.
///
/// With `best_is_high` the top positions are the largest rank values
/// (score-maximizing tasks); otherwise the smallest (error-minimizing
/// tasks). The returned item indices are sorted ascending.
#[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
#[must_use]
pub fn best_item_indices(reference: &[usize], fraction: f64, best_is_high: bool) -> Vec<usize> {
    let n = reference.len();
    let keep = ((n as f64 * fraction).round() as usize).clamp(1, n);
    let mut items: Vec<usize> = (0..n).collect();
    if best_is_high {
        items.sort_by(|&a, &b| reference[b].cmp(&reference[a]));
    } else {
        items.sort_by(|&a, &b| reference[a].cmp(&reference[b]));
    }
    let mut best: Vec<usize> = items.into_iter().take(keep).collect();
    best.sort_unstable();
    best
}

/// Rank similarity restricted to a subset of items.
pub fn subset_similarity(
    a: &[usize],
    b: &[usize],
    keep: &[usize],
) -> Result<f64, RankSimilarityError> {
    let a_kept: Vec<usize> = keep.iter().map(|&i| a[i]).collect();
    let b_kept: Vec<usize> = keep.iter().map(|&i| b[i]).collect();
    rank_similarity(&a_kept, &b_kept)
}

/// Similarity of every ranking pair, as a symmetric matrix.
pub fn pairwise_similarity(rankings: &[Vec<usize>]) -> Result<Vec<Vec<f64>>, RankSimilarityError> {
    let n = rankings.len();
    let mut matrix = vec![vec![1.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let similarity = rank_similarity(&rankings[i], &rankings[j])?;
            matrix[i][j] = similarity;
            matrix[j][i] = similarity;
        }
    }
    Ok(matrix)
}

/// Fraction of scores that are exactly zero.
#[expect(clippy::cast_precision_loss, clippy::float_cmp)]
#[must_use]
pub fn zero_score_rate(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().filter(|&&s| s == 0.0).count() as f64 / scores.len() as f64
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_band_points_follow_the_groups() {
        let groups = vec![(0.5, vec![1.0, 2.0, 3.0]), (1.0, vec![4.0, 4.0])];
        let mut rng = Pcg64::seed_from_u64(0);
        let band = band_over_groups(&groups, 200, &mut rng).unwrap();
        assert_eq!(band.len(), 2);
        assert_eq!(band[0].x, 0.5);
        assert_eq!(band[0].mean, 2.0);
        assert_eq!(band[1].mean, 4.0);
        assert!(band.iter().all(|p| p.lower <= p.upper));
    }

    #[test]
    fn test_band_rejects_an_empty_group() {
        let groups = vec![(0.1, vec![])];
        let mut rng = Pcg64::seed_from_u64(0);
        assert!(band_over_groups(&groups, 100, &mut rng).is_err());
    }

    #[test]
    fn test_extra_evaluations_against_the_reference() {
        // Reference is the last (most expensive) group.
        let totals = [10.0, 30.0, 60.0];
        let per_eval = [1.0, 3.0, 6.0];
        let extra = extra_evaluations(&totals, &per_eval, 2);
        assert_eq!(extra, vec![50.0, 10.0, 0.0]);
    }

    #[test]
    fn test_extra_evaluations_clamp_at_zero() {
        // A group slower than the reference affords nothing extra.
        let totals = [80.0, 60.0];
        let per_eval = [2.0, 6.0];
        let extra = extra_evaluations(&totals, &per_eval, 1);
        assert_eq!(extra, vec![0.0, 0.0]);
    }

    #[test]
    fn test_ranking_matrix_sorts_reference_columns() {
        let rankings = vec![vec![2, 0, 1], vec![1, 2, 0]];
        let matrix = ranking_matrix(&rankings, 1);
        // Reference row must read 0,1,2 after the reorder.
        assert_eq!(matrix[1], vec![0, 1, 2]);
        // The other row is permuted by the same column order (items 2,0,1).
        assert_eq!(matrix[0], vec![1, 2, 0]);
    }

    #[test]
    fn test_best_item_indices_high_and_low() {
        let reference = vec![3, 0, 2, 1];
        // Best-is-high keeps the items holding the top positions.
        assert_eq!(best_item_indices(&reference, 0.5, true), vec![0, 2]);
        // Best-is-low keeps the items holding the bottom positions.
        assert_eq!(best_item_indices(&reference, 0.5, false), vec![1, 3]);
    }

    #[test]
    fn test_best_item_indices_keeps_at_least_one() {
        assert_eq!(best_item_indices(&[1, 0], 0.01, true), vec![0]);
    }

    #[test]
    fn test_subset_similarity_of_agreement() {
        let a = vec![0, 1, 2, 3];
        let b = vec![3, 2, 1, 0];
        // Restricted to two items the rankings still disagree completely.
        assert_eq!(subset_similarity(&a, &b, &[0, 1]).unwrap(), 0.0);
        // A ranking fully agrees with itself on any subset.
        assert_eq!(subset_similarity(&a, &a, &[1, 2, 3]).unwrap(), 1.0);
    }

    #[test]
    fn test_pairwise_similarity_matrix_shape() {
        let rankings = vec![vec![0, 1, 2], vec![0, 2, 1], vec![2, 1, 0]];
        let matrix = pairwise_similarity(&rankings).unwrap();
        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix[i][i], 1.0);
            for j in 0..3 {
                assert_eq!(matrix[i][j], matrix[j][i]);
            }
        }
        assert_eq!(matrix[0][2], 0.0);
    }

    #[test]
    fn test_zero_score_rate() {
        assert_eq!(zero_score_rate(&[0.0, 1.0, 0.0, 2.0]), 0.5);
        assert_eq!(zero_score_rate(&[]), 0.0);
    }
}
