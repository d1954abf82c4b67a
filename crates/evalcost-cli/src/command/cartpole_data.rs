use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;

use evalcost_cartpole::{
    evaluate::evaluate_policy,
    policy::LinearPolicy,
    trainer::PolicySearchTrainer,
};
use evalcost_harness::{
    grid::AccuracyGrid,
    observer::{CheckpointObserver, TrainingProgress},
    parallel::{available_workers, parallel_map},
};

use crate::{
    schema::cartpole::{CartpoleManifest, TrainProgressRow},
    util::{ensure_dir, save_json, write_csv_file},
};

const DEFAULT_STEP_BUDGET: usize = 10_000;
const DEFAULT_SEED_COUNT: u64 = 30;
const DEFAULT_EVAL_EPISODES: usize = 100;
const DEFAULT_EVAL_SEED: u64 = 0;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CartpoleDataArg {
    /// Directory the tables are written to
    #[arg(long, default_value = "results/data/cartpole")]
    out_dir: PathBuf,
    /// Environment-step budget per training run
    #[arg(long, default_value_t = DEFAULT_STEP_BUDGET)]
    step_budget: usize,
    /// Training seeds per accuracy value (seeds run 1..=N)
    #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
    seed_count: u64,
    /// Episodes per mid-training evaluation
    #[arg(long, default_value_t = DEFAULT_EVAL_EPISODES)]
    eval_episodes: usize,
    /// Seed of the shared evaluation episode set
    #[arg(long, default_value_t = DEFAULT_EVAL_SEED)]
    eval_seed: u64,
    /// Worker threads (defaults to the processor count)
    #[arg(long)]
    workers: Option<usize>,
}

/// Evaluates the checkpoint policy and accumulates one row per checkpoint.
struct EvalRecorder {
    seed: u64,
    eval_episodes: usize,
    eval_seed: u64,
    rows: Vec<TrainProgressRow>,
}

impl CheckpointObserver<LinearPolicy> for EvalRecorder {
    fn on_checkpoint(&mut self, policy: &LinearPolicy, progress: &TrainingProgress) {
        // The trainer's stopwatch is paused here, so the evaluation below
        // does not count towards train_secs.
        let mean_reward = evaluate_policy(policy, self.eval_episodes, self.eval_seed);
        self.rows.push(TrainProgressRow {
            steps: progress.steps_done,
            episode_steps: progress.episode_steps,
            seed: self.seed,
            episodes: progress.episodes,
            longest_episode: progress.longest_episode,
            train_secs: progress.train_secs,
            episode_secs: progress.episode_secs,
            mean_reward,
        });
    }
}

pub(crate) fn run(arg: &CartpoleDataArg) -> anyhow::Result<()> {
    ensure_dir(&arg.out_dir)?;

    let grid = AccuracyGrid::descending_tenths();
    let seeds: Vec<u64> = (1..=arg.seed_count).collect();
    let workers = match arg.workers {
        Some(count) => std::num::NonZeroUsize::new(count).context("workers must be positive")?,
        None => available_workers(),
    };

    eprintln!(
        "Training {} accuracy values x {} seeds on {} workers...",
        grid.len(),
        seeds.len(),
        workers
    );

    // One work unit per accuracy value; each writes its own table.
    let results = parallel_map(grid.values(), workers, |&accuracy| {
        let trainer = PolicySearchTrainer {
            training_accuracy: accuracy,
            ..PolicySearchTrainer::default()
        };

        let mut rows = Vec::new();
        for &seed in &seeds {
            let mut recorder = EvalRecorder {
                seed,
                eval_episodes: arg.eval_episodes,
                eval_seed: arg.eval_seed,
                rows: Vec::new(),
            };
            let _policy = trainer.train(seed, arg.step_budget, &mut recorder);
            rows.extend(recorder.rows);
        }

        let path = arg.out_dir.join(format!("train_progress_acc{accuracy}.csv"));
        write_csv_file("training progress", &path, &rows)?;
        eprintln!(
            "  accuracy {accuracy}: {} rows -> {}",
            rows.len(),
            path.display()
        );
        Ok::<(), anyhow::Error>(())
    });
    for result in results {
        result?;
    }

    let manifest = CartpoleManifest {
        created_at: Utc::now(),
        accuracies: grid.values().to_vec(),
        step_budget: arg.step_budget,
        seeds,
        eval_seed: arg.eval_seed,
        eval_episodes: arg.eval_episodes,
    };
    save_json("manifest", arg.out_dir.join("manifest.json"), &manifest)?;

    eprintln!("CartPole accuracy sweep complete.");
    Ok(())
}
