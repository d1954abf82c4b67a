use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::env::{Action, Observation};

/// Deterministic linear threshold policy.
///
/// Pushes right when the weighted observation plus bias is non-negative,
/// left otherwise. Four weights and a bias are all the trainer searches
/// over; the policy itself has no internal state, so two copies with the
/// same parameters always act identically.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPolicy {
    weights: [f64; 4],
    bias: f64,
}

impl LinearPolicy {
    /// Builds a policy from explicit parameters.
    #[must_use]
    pub fn new(weights: [f64; 4], bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Draws a random policy with parameters uniform in `[-1, 1]`.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut weights = [0.0; 4];
        for w in &mut weights {
            *w = rng.random_range(-1.0..=1.0);
        }
        Self {
            weights,
            bias: rng.random_range(-1.0..=1.0),
        }
    }

    /// Returns a copy with Gaussian noise `N(0, sigma²)` added to every
    /// parameter.
    pub fn perturbed<R>(&self, sigma: f64, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let normal = Normal::new(0.0, sigma).unwrap();
        let mut weights = self.weights;
        for w in &mut weights {
            *w += normal.sample(rng);
        }
        Self {
            weights,
            bias: self.bias + normal.sample(rng),
        }
    }

    /// Chooses the push direction for an observation.
    #[must_use]
    pub fn act(&self, observation: Observation) -> Action {
        let activation: f64 = self
            .weights
            .iter()
            .zip(observation)
            .map(|(w, o)| w * o)
            .sum::<f64>()
            + self.bias;
        if activation >= 0.0 { Action::Right } else { Action::Left }
    }

    /// The policy parameters as `(weights, bias)`.
    #[must_use]
    pub fn parameters(&self) -> ([f64; 4], f64) {
        (self.weights, self.bias)
    }
}
