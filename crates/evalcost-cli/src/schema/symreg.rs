use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One surface scored at one accuracy level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceScoreRow {
    /// Accuracy the evaluation ran at.
    pub accuracy: f64,
    /// Index of the surface within the population.
    pub surface: usize,
    /// Mean absolute error against the target surface.
    pub score: f64,
    /// Points the evaluation touched (its cost).
    pub points_evaluated: usize,
}

/// Mean evaluation cost at one accuracy level.
///
/// Aggregated from [`SurfaceScoreRow`]; later bisection heuristics read
/// this table to price accuracy levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationCostRow {
    pub accuracy: f64,
    pub cost_per_eval: f64,
}

/// Run parameters of a `symreg-data` invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymregManifest {
    pub created_at: DateTime<Utc>,
    pub accuracies: Vec<f64>,
    /// Number of surfaces in the scored population.
    pub population_size: usize,
    /// Seed the population was drawn from.
    pub population_seed: u64,
    /// Evaluation points at full accuracy.
    pub default_point_count: usize,
}
