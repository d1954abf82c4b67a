use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One checkpoint of one cart-pole training run.
///
/// A training run emits one row per checkpoint; the per-accuracy table
/// concatenates the rows of all seeds trained at that accuracy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainProgressRow {
    /// Environment steps consumed when the checkpoint fired.
    pub steps: usize,
    /// Sum of all completed episode lengths so far.
    pub episode_steps: usize,
    /// Training seed of the run this row belongs to.
    pub seed: u64,
    /// Episodes completed so far.
    pub episodes: usize,
    /// Longest completed episode so far, in steps.
    pub longest_episode: usize,
    /// Training wall time so far, excluding evaluation, in seconds.
    pub train_secs: f64,
    /// Wall time spent inside episodes, in seconds.
    pub episode_secs: f64,
    /// Mean reward of the checkpoint policy on the evaluation episodes.
    pub mean_reward: f64,
}

/// Run parameters of a `cartpole-data` invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartpoleManifest {
    pub created_at: DateTime<Utc>,
    /// Accuracy grid swept, in sweep order.
    pub accuracies: Vec<f64>,
    /// Environment-step budget per training run.
    pub step_budget: usize,
    /// Training seeds, one run per seed per accuracy.
    pub seeds: Vec<u64>,
    /// Seed of the shared evaluation episode set.
    pub eval_seed: u64,
    /// Episodes per mid-training evaluation.
    pub eval_episodes: usize,
}
