use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::expr::{Expr, InitMethod};

/// Depth range used by ramped initialization.
const MIN_DEPTH: usize = 2;
const MAX_DEPTH: usize = 6;

/// Builds a generation-zero population of random surface expressions.
///
/// Ramped half-and-half initialization: programs alternate between the grow
/// and full methods while the depth bound cycles through `2..=6`, giving the
/// population a spread of shapes and sizes. The whole population is drawn
/// from one generator seeded with `seed`, so a population is reproducible
/// from its seed alone.
#[must_use]
pub fn random_population(size: usize, seed: u64) -> Vec<Expr> {
    let mut rng = Pcg64::seed_from_u64(seed);
    (0..size)
        .map(|i| {
            let method = if i % 2 == 0 { InitMethod::Grow } else { InitMethod::Full };
            let depth = MIN_DEPTH + (i / 2) % (MAX_DEPTH - MIN_DEPTH + 1);
            Expr::random(&mut rng, method, depth)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_has_the_requested_size() {
        assert_eq!(random_population(100, 0).len(), 100);
    }

    #[test]
    fn test_population_is_reproducible_from_its_seed() {
        assert_eq!(random_population(30, 5), random_population(30, 5));
    }

    #[test]
    fn test_different_seeds_give_different_populations() {
        assert_ne!(random_population(30, 1), random_population(30, 2));
    }

    #[test]
    fn test_depths_stay_within_the_ramp() {
        for expr in random_population(60, 9) {
            assert!(expr.depth() <= MAX_DEPTH);
        }
    }

    #[test]
    fn test_population_contains_varied_shapes() {
        let population = random_population(40, 4);
        let distinct_depths: std::collections::HashSet<usize> =
            population.iter().map(Expr::depth).collect();
        assert!(distinct_depths.len() > 2);
    }
}
