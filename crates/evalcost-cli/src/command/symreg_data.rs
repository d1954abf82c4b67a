use std::path::PathBuf;

use chrono::Utc;

use evalcost_harness::grid::AccuracyGrid;
use evalcost_stats::descriptive::SampleSummary;
use evalcost_symreg::{
    evaluate::evaluate_surface,
    population::random_population,
    sample::DEFAULT_POINT_COUNT,
};

use crate::{
    schema::symreg::{EvaluationCostRow, SurfaceScoreRow, SymregManifest},
    util::{ensure_dir, save_json, write_csv_file},
};

const DEFAULT_POPULATION_SIZE: usize = 100;
const DEFAULT_POPULATION_SEED: u64 = 0;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SymregDataArg {
    /// Directory the tables are written to
    #[arg(long, default_value = "results/data/symreg")]
    out_dir: PathBuf,
    /// Number of surfaces in the scored population
    #[arg(long, default_value_t = DEFAULT_POPULATION_SIZE)]
    population_size: usize,
    /// Seed the population is drawn from
    #[arg(long, default_value_t = DEFAULT_POPULATION_SEED)]
    population_seed: u64,
}

pub(crate) fn run(arg: &SymregDataArg) -> anyhow::Result<()> {
    ensure_dir(&arg.out_dir)?;

    let grid = AccuracyGrid::descending_tenths();
    let population = random_population(arg.population_size, arg.population_seed);
    eprintln!(
        "Scoring {} surfaces at {} accuracy values...",
        population.len(),
        grid.len()
    );

    let mut rows = Vec::with_capacity(grid.len() * population.len());
    for &accuracy in grid.values() {
        for (index, surface) in population.iter().enumerate() {
            let result = evaluate_surface(surface, accuracy);
            rows.push(SurfaceScoreRow {
                accuracy,
                surface: index,
                score: result.score,
                points_evaluated: result.points_evaluated,
            });
        }
        let scores: Vec<f64> = rows
            .iter()
            .rev()
            .take(population.len())
            .map(|row| row.score)
            .collect();
        if let Some(summary) = SampleSummary::new(scores) {
            eprintln!(
                "  accuracy {accuracy}: score mean {:.4} (min {:.4}, max {:.4})",
                summary.mean, summary.min, summary.max
            );
        }
    }

    let scores_path = arg.out_dir.join("surface_scores.csv");
    write_csv_file("surface scores", &scores_path, &rows)?;

    // Mean cost per evaluation for each accuracy, for bisection heuristics.
    #[expect(clippy::cast_precision_loss)]
    let cost_rows: Vec<EvaluationCostRow> = grid
        .values()
        .iter()
        .map(|&accuracy| {
            let costs: Vec<f64> = rows
                .iter()
                .filter(|row| row.accuracy.total_cmp(&accuracy).is_eq())
                .map(|row| row.points_evaluated as f64)
                .collect();
            let summary = SampleSummary::new(costs).expect("every accuracy has rows");
            EvaluationCostRow {
                accuracy,
                cost_per_eval: summary.mean,
            }
        })
        .collect();
    let costs_path = arg.out_dir.join("evaluation_costs.csv");
    write_csv_file("evaluation costs", &costs_path, &cost_rows)?;

    let manifest = SymregManifest {
        created_at: Utc::now(),
        accuracies: grid.values().to_vec(),
        population_size: arg.population_size,
        population_seed: arg.population_seed,
        default_point_count: DEFAULT_POINT_COUNT,
    };
    save_json("manifest", arg.out_dir.join("manifest.json"), &manifest)?;

    eprintln!(
        "Wrote {} score rows -> {}",
        rows.len(),
        scores_path.display()
    );
    Ok(())
}
