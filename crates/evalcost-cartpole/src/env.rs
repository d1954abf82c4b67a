//! Cart-pole dynamics.
//!
//! A pole is hinged to a cart sliding on a frictionless track; the agent
//! pushes the cart left or right with a fixed force and earns one reward
//! per step until the pole tips past 12 degrees, the cart leaves the track,
//! or the episode cap is reached.

use rand::Rng;

const GRAVITY: f64 = 9.8;
const CART_MASS: f64 = 1.0;
const POLE_MASS: f64 = 0.1;
const TOTAL_MASS: f64 = CART_MASS + POLE_MASS;
/// Half the pole length.
const POLE_HALF_LENGTH: f64 = 0.5;
const POLE_MASS_LENGTH: f64 = POLE_MASS * POLE_HALF_LENGTH;
const FORCE_MAG: f64 = 10.0;

/// Integration time step at full accuracy, in seconds.
pub const DEFAULT_TAU: f64 = 0.02;
/// Episode step cap at full accuracy.
pub const DEFAULT_STEP_LIMIT: usize = 500;

/// Pole angle beyond which the episode ends (12 degrees in radians).
const THETA_THRESHOLD: f64 = 12.0 * 2.0 * std::f64::consts::PI / 360.0;
/// Cart position beyond which the episode ends.
const X_THRESHOLD: f64 = 2.4;

/// Half-width of the uniform initial-state interval.
const RESET_SPREAD: f64 = 0.05;

/// Push direction applied for one time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
}

/// Cart position/velocity and pole angle/angular velocity.
pub type Observation = [f64; 4];

/// Result of one environment step.
#[derive(Debug, Clone, Copy)]
pub struct StepOutcome {
    /// Observation after the step.
    pub observation: Observation,
    /// Reward earned by the step (always 1.0).
    pub reward: f64,
    /// Whether the episode ended with this step.
    pub done: bool,
}

/// Cart-pole environment with a configurable accuracy level.
#[derive(Debug, Clone)]
pub struct CartPole {
    state: Observation,
    steps_taken: usize,
    tau: f64,
    step_limit: usize,
}

impl CartPole {
    /// Full-accuracy environment: `tau` = 0.02 s, 500-step episodes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_accuracy(1.0)
    }

    /// Environment at the given accuracy level.
    ///
    /// Accuracy `a` coarsens integration to `tau = 0.02 / a` and caps
    /// episodes at `⌊500·a⌋` steps.
    ///
    /// # Panics
    ///
    /// Panics if `accuracy` is outside `(0, 1]`.
    #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    #[must_use]
    pub fn with_accuracy(accuracy: f64) -> Self {
        assert!(
            accuracy > 0.0 && accuracy <= 1.0,
            "accuracy must lie in (0, 1]"
        );
        Self {
            state: [0.0; 4],
            steps_taken: 0,
            tau: DEFAULT_TAU / accuracy,
            step_limit: (DEFAULT_STEP_LIMIT as f64 * accuracy).floor() as usize,
        }
    }

    /// Integration time step in seconds.
    #[must_use]
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Maximum episode length in steps.
    #[must_use]
    pub fn step_limit(&self) -> usize {
        self.step_limit
    }

    /// Starts a new episode from a small random state.
    ///
    /// All four state components are drawn uniformly from
    /// `[-0.05, 0.05]`; drawing from a seeded generator replays the same
    /// episode sequence across calls.
    pub fn reset<R>(&mut self, rng: &mut R) -> Observation
    where
        R: Rng + ?Sized,
    {
        for component in &mut self.state {
            *component = rng.random_range(-RESET_SPREAD..=RESET_SPREAD);
        }
        self.steps_taken = 0;
        self.state
    }

    /// Advances the simulation by one time step.
    pub fn step(&mut self, action: Action) -> StepOutcome {
        let [x, x_dot, theta, theta_dot] = self.state;
        let force = match action {
            Action::Left => -FORCE_MAG,
            Action::Right => FORCE_MAG,
        };

        let cos_theta = theta.cos();
        let sin_theta = theta.sin();

        // Semi-implicit equations of motion for the pole-on-cart system.
        let temp = (force + POLE_MASS_LENGTH * theta_dot * theta_dot * sin_theta) / TOTAL_MASS;
        let theta_acc = (GRAVITY * sin_theta - cos_theta * temp)
            / (POLE_HALF_LENGTH * (4.0 / 3.0 - POLE_MASS * cos_theta * cos_theta / TOTAL_MASS));
        let x_acc = temp - POLE_MASS_LENGTH * theta_acc * cos_theta / TOTAL_MASS;

        self.state = [
            x + self.tau * x_dot,
            x_dot + self.tau * x_acc,
            theta + self.tau * theta_dot,
            theta_dot + self.tau * theta_acc,
        ];
        self.steps_taken += 1;

        let failed = self.state[0].abs() > X_THRESHOLD || self.state[2].abs() > THETA_THRESHOLD;
        let truncated = self.steps_taken >= self.step_limit;

        StepOutcome {
            observation: self.state,
            reward: 1.0,
            done: failed || truncated,
        }
    }
}

impl Default for CartPole {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_accuracy_scales_tau_and_step_limit() {
        let env = CartPole::with_accuracy(0.5);
        assert!((env.tau() - 0.04).abs() < 1e-12);
        assert_eq!(env.step_limit(), 250);

        let full = CartPole::new();
        assert!((full.tau() - DEFAULT_TAU).abs() < 1e-12);
        assert_eq!(full.step_limit(), DEFAULT_STEP_LIMIT);
    }

    #[test]
    #[should_panic(expected = "accuracy")]
    fn test_zero_accuracy_is_rejected() {
        let _ = CartPole::with_accuracy(0.0);
    }

    #[test]
    fn test_reset_draws_small_states() {
        let mut env = CartPole::new();
        let mut rng = Pcg64::seed_from_u64(1);
        let obs = env.reset(&mut rng);
        assert!(obs.iter().all(|c| c.abs() <= RESET_SPREAD));
    }

    #[test]
    fn test_seeded_reset_is_reproducible() {
        let mut a = CartPole::new();
        let mut b = CartPole::new();
        let obs_a = a.reset(&mut Pcg64::seed_from_u64(5));
        let obs_b = b.reset(&mut Pcg64::seed_from_u64(5));
        assert_eq!(obs_a, obs_b);
    }

    #[test]
    fn test_constant_push_ends_the_episode() {
        let mut env = CartPole::new();
        let mut rng = Pcg64::seed_from_u64(2);
        env.reset(&mut rng);
        let mut steps = 0;
        loop {
            let outcome = env.step(Action::Right);
            steps += 1;
            if outcome.done {
                break;
            }
            assert!(steps <= DEFAULT_STEP_LIMIT, "episode must terminate");
        }
        // Pushing one way without correction tips the pole quickly.
        assert!(steps < DEFAULT_STEP_LIMIT);
    }

    #[test]
    fn test_episode_is_truncated_at_the_step_limit() {
        let mut env = CartPole::with_accuracy(0.1);
        let mut rng = Pcg64::seed_from_u64(3);
        env.reset(&mut rng);
        let mut steps = 0;
        loop {
            // Alternate pushes to keep the pole up as long as possible.
            let action = if env.state[2] < 0.0 { Action::Left } else { Action::Right };
            let outcome = env.step(action);
            steps += 1;
            if outcome.done {
                break;
            }
        }
        assert!(steps <= env.step_limit());
    }

    #[test]
    fn test_reward_is_one_per_step() {
        let mut env = CartPole::new();
        let mut rng = Pcg64::seed_from_u64(4);
        env.reset(&mut rng);
        let outcome = env.step(Action::Left);
        assert_eq!(outcome.reward, 1.0);
    }
}
