use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::{env::CartPole, policy::LinearPolicy};

/// Mean episode reward of a policy on a full-accuracy environment.
///
/// The environment is independent of any training environment and seeded
/// with `eval_seed`, so every call with the same seed replays the same
/// `episodes` initial states. With one reward per step the result equals
/// the mean episode length, between 1 and the 500-step cap.
///
/// # Panics
///
/// Panics if `episodes` is zero.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn evaluate_policy(policy: &LinearPolicy, episodes: usize, eval_seed: u64) -> f64 {
    assert!(episodes > 0, "evaluation needs at least one episode");

    let mut env = CartPole::new();
    let mut rng = Pcg64::seed_from_u64(eval_seed);
    let mut total_reward = 0.0;

    for _ in 0..episodes {
        let mut observation = env.reset(&mut rng);
        loop {
            let outcome = env.step(policy.act(observation));
            total_reward += outcome.reward;
            observation = outcome.observation;
            if outcome.done {
                break;
            }
        }
    }

    total_reward / episodes as f64
}
