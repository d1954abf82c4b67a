//! Rank similarity and ranking construction helpers.
//!
//! The experiments compare how the *ordering* of candidate solutions changes
//! when evaluations are made cheaper. A ranking assigns each of n items an
//! ordinal position from a scored list; two rankings are compared by how
//! many item pairs they order the same way.

/// Error returned by [`rank_similarity`] for unusable ranking pairs.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum RankSimilarityError {
    /// The two rankings do not describe the same number of items.
    #[display("ranking lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// Fewer than two items means there are no pairs to compare.
    #[display("rankings must contain at least two items, got {len}")]
    TooFewItems { len: usize },
}

/// Computes the inverse normalized discordance between two rankings.
///
/// For every unordered position pair `(i, j)` the pair is *discordant* when
/// one sequence orders item `i` before item `j` and the other orders it
/// after. With `D` discordant pairs out of `T = n(n-1)/2` total pairs the
/// result is `1 - D/T`, a value in `[0, 1]`: `1.0` for identical ordering,
/// `0.0` for a fully reversed one. This is the complement of the normalized
/// Kendall tau distance.
///
/// Only strict inequalities are counted, so pairs tied in either sequence
/// are neither concordant nor discordant.
///
/// # Errors
///
/// Returns [`RankSimilarityError`] when the slices differ in length or hold
/// fewer than two items.
///
/// # Examples
///
/// ```
/// use evalcost_stats::ranking::rank_similarity;
///
/// assert_eq!(rank_similarity(&[1, 2, 3, 4], &[1, 2, 3, 4]).unwrap(), 1.0);
/// assert_eq!(rank_similarity(&[1, 2, 3, 4], &[4, 3, 2, 1]).unwrap(), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn rank_similarity<T>(x: &[T], y: &[T]) -> Result<f64, RankSimilarityError>
where
    T: PartialOrd,
{
    if x.len() != y.len() {
        return Err(RankSimilarityError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(RankSimilarityError::TooFewItems { len: x.len() });
    }

    let n = x.len();
    let mut discordant = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            let forward = x[i] < x[j] && y[i] > y[j];
            let backward = x[i] > x[j] && y[i] < y[j];
            if forward || backward {
                discordant += 1;
            }
        }
    }

    let total_pairs = n * (n - 1) / 2;
    Ok(1.0 - discordant as f64 / total_pairs as f64)
}

/// Returns the indices that would sort `values` ascending.
///
/// Ties are broken by the original index, so the result is stable.
///
/// # Examples
///
/// ```
/// use evalcost_stats::ranking::argsort;
///
/// assert_eq!(argsort(&[3.0, 1.0, 2.0]), vec![1, 2, 0]);
/// ```
#[must_use]
pub fn argsort(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| values[a].total_cmp(&values[b]).then(a.cmp(&b)));
    indices
}

/// Converts an argsort into per-item rank positions.
///
/// `argsort[k]` names the item placed at sorted position `k`; the returned
/// vector answers the opposite question, giving each item its position in
/// the sorted order.
///
/// # Examples
///
/// ```
/// use evalcost_stats::ranking::ranking_from_argsort;
///
/// // Item 1 sorts first, item 2 second, item 0 last.
/// assert_eq!(ranking_from_argsort(&[1, 2, 0]), vec![2, 0, 1]);
/// ```
#[must_use]
pub fn ranking_from_argsort(argsort: &[usize]) -> Vec<usize> {
    let mut ranking = vec![0; argsort.len()];
    for (position, &item) in argsort.iter().enumerate() {
        ranking[item] = position;
    }
    ranking
}

/// Ranks items by score: position 0 for the lowest score.
///
/// Shorthand for [`ranking_from_argsort`] over [`argsort`].
#[must_use]
pub fn rank_by_score(scores: &[f64]) -> Vec<usize> {
    ranking_from_argsort(&argsort(scores))
}

/// Reorders a slice by an argsort.
///
/// # Panics
///
/// Panics if `order` contains an index outside `values`.
///
/// # Examples
///
/// ```
/// use evalcost_stats::ranking::reorder;
///
/// assert_eq!(reorder(&["a", "b", "c"], &[2, 0, 1]), vec!["c", "a", "b"]);
/// ```
#[must_use]
pub fn reorder<T>(values: &[T], order: &[usize]) -> Vec<T>
where
    T: Clone,
{
    order.iter().map(|&i| values[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_rankings_score_one() {
        let r = [0, 1, 2, 3, 4];
        assert_eq!(rank_similarity(&r, &r).unwrap(), 1.0);
    }

    #[test]
    fn test_reversed_ranking_scores_zero() {
        assert_eq!(rank_similarity(&[1, 2, 3, 4], &[4, 3, 2, 1]).unwrap(), 0.0);
    }

    #[test]
    fn test_single_discordant_pair() {
        // One of three pairs disagrees: 1 - 1/3.
        let similarity = rank_similarity(&[0, 1, 2], &[0, 2, 1]).unwrap();
        assert!((similarity - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let x = [3.0, 1.0, 4.0, 1.5, 9.0];
        let y = [2.0, 7.0, 1.0, 8.0, 2.5];
        assert_eq!(
            rank_similarity(&x, &y).unwrap(),
            rank_similarity(&y, &x).unwrap()
        );
    }

    #[test]
    fn test_tied_pairs_are_skipped() {
        // Positions 0 and 1 are tied in x, so only the pairs involving
        // position 2 can be discordant; none are here.
        let similarity = rank_similarity(&[1, 1, 2], &[2, 1, 3]).unwrap();
        assert_eq!(similarity, 1.0);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        assert!(matches!(
            rank_similarity(&[1, 2, 3], &[1, 2]),
            Err(RankSimilarityError::LengthMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn test_too_few_items_is_rejected() {
        assert!(matches!(
            rank_similarity(&[1], &[1]),
            Err(RankSimilarityError::TooFewItems { len: 1 })
        ));
    }

    #[test]
    fn test_argsort_breaks_ties_by_index() {
        assert_eq!(argsort(&[2.0, 1.0, 2.0, 0.5]), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_ranking_from_argsort_inverts_the_permutation() {
        let scores = [0.3, 0.1, 0.9, 0.4];
        let order = argsort(&scores);
        let ranking = ranking_from_argsort(&order);
        // The lowest score gets rank 0, the highest the last rank.
        assert_eq!(ranking, vec![1, 0, 3, 2]);
    }

    #[test]
    fn test_rank_by_score_matches_manual_composition() {
        let scores = [5.0, 2.0, 7.0];
        assert_eq!(rank_by_score(&scores), ranking_from_argsort(&argsort(&scores)));
    }

    #[test]
    fn test_reorder_applies_argsort() {
        let values = [10.0, 30.0, 20.0];
        let order = argsort(&values);
        assert_eq!(reorder(&values, &order), vec![10.0, 20.0, 30.0]);
    }
}
