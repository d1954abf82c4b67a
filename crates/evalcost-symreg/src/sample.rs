use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Evaluation-point count at full accuracy.
pub const DEFAULT_POINT_COUNT: usize = 50;

/// Height of the target surface `z = x² − y² + y − 1`.
#[must_use]
pub fn target_height(x: f64, y: f64) -> f64 {
    x * x - y * y + y - 1.0
}

/// A seeded sample of points on the target surface.
#[derive(Debug, Clone)]
pub struct PointSample {
    points: Vec<[f64; 3]>,
}

impl PointSample {
    /// Draws `point_count` points with `(x, y)` uniform in `[-1, 1]²` and
    /// `z` from the target surface.
    ///
    /// The same seed always produces the same sample, so every surface in a
    /// population is scored against identical points.
    #[must_use]
    pub fn build(point_count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let points = (0..point_count)
            .map(|_| {
                let x = rng.random_range(-1.0..=1.0);
                let y = rng.random_range(-1.0..=1.0);
                [x, y, target_height(x, y)]
            })
            .collect();
        Self { points }
    }

    /// The sampled `[x, y, z]` triples.
    #[must_use]
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Number of points in the sample.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sample holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_size_and_domain() {
        let sample = PointSample::build(100, 0);
        assert_eq!(sample.len(), 100);
        for &[x, y, _] in sample.points() {
            assert!(x.abs() <= 1.0);
            assert!(y.abs() <= 1.0);
        }
    }

    #[test]
    fn test_heights_follow_the_target_surface() {
        let sample = PointSample::build(10, 3);
        for &[x, y, z] in sample.points() {
            assert!((z - target_height(x, y)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_sample() {
        let a = PointSample::build(25, 7);
        let b = PointSample::build(25, 7);
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_target_surface_spot_values() {
        assert_eq!(target_height(0.0, 0.0), -1.0);
        assert_eq!(target_height(1.0, 1.0), 0.0);
        assert_eq!(target_height(-1.0, 0.5), 0.25);
    }
}
