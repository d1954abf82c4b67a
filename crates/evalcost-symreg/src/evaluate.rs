use crate::{
    expr::Expr,
    sample::{DEFAULT_POINT_COUNT, PointSample},
};

/// Seed of the shared evaluation sample.
///
/// Every evaluation draws its points from this one seed so that two
/// surfaces scored at the same accuracy see exactly the same points.
pub const EVAL_SAMPLE_SEED: u64 = 0;

/// Outcome of scoring one surface at one accuracy level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceScore {
    /// Mean absolute error against the target surface.
    pub score: f64,
    /// Number of points the evaluation touched (its cost).
    pub points_evaluated: usize,
}

/// Mean absolute error of a candidate surface over a point sample.
///
/// # Panics
///
/// Panics if the sample is empty.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean_absolute_error(surface: &Expr, sample: &PointSample) -> f64 {
    assert!(!sample.is_empty(), "cannot score a surface on an empty sample");
    let total: f64 = sample
        .points()
        .iter()
        .map(|&[x, y, z]| (z - surface.eval(x, y)).abs())
        .sum();
    total / sample.len() as f64
}

/// Scores a surface at an accuracy level.
///
/// Accuracy `a` shrinks the evaluation sample to `⌊50·a⌋` points; the point
/// count doubles as the evaluation cost reported alongside the score.
///
/// # Panics
///
/// Panics if `accuracy` truncates the sample to zero points.
#[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
#[must_use]
pub fn evaluate_surface(surface: &Expr, accuracy: f64) -> SurfaceScore {
    let point_count = (DEFAULT_POINT_COUNT as f64 * accuracy) as usize;
    let sample = PointSample::build(point_count, EVAL_SAMPLE_SEED);
    SurfaceScore {
        score: mean_absolute_error(surface, &sample),
        points_evaluated: point_count,
    }
}
