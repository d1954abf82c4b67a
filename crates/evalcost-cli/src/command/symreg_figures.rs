use std::path::PathBuf;

use rand::SeedableRng;
use rand_pcg::Pcg64;

use evalcost_harness::table::format_bracketed;
use evalcost_stats::ranking::{rank_by_score, rank_similarity};

use crate::{
    analysis::{
        best_item_indices, band_over_groups, extra_evaluations, pairwise_similarity,
        ranking_matrix, subset_similarity, zero_score_rate,
    },
    figures::{band::render_band, bars::render_bars, heatmap::render_heatmap, lines::render_lines},
    schema::{
        figures::{LabeledValueRow, SimilarityMatrixRow, SimilarityRow},
        symreg::SurfaceScoreRow,
    },
    util::{ensure_dir, read_csv_file, write_csv_file},
};

const DEFAULT_BOOTSTRAP_ITERATIONS: usize = 1000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SymregFiguresArg {
    /// Directory holding the symbolic-regression tables
    #[arg(long, default_value = "results/data/symreg")]
    data_dir: PathBuf,
    /// Directory the figures are written to
    #[arg(long, default_value = "results/figures/symreg")]
    out_dir: PathBuf,
    /// Bootstrap resamples per confidence band point
    #[arg(long, default_value_t = DEFAULT_BOOTSTRAP_ITERATIONS)]
    bootstrap_iterations: usize,
    /// Seed of the bootstrap resampling
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// Scores of every surface at one accuracy, ordered by surface index.
struct AccuracyGroup {
    accuracy: f64,
    scores: Vec<f64>,
    costs: Vec<f64>,
}

#[expect(clippy::cast_precision_loss)]
fn group_by_accuracy(rows: &[SurfaceScoreRow]) -> Vec<AccuracyGroup> {
    let mut accuracies: Vec<f64> = rows.iter().map(|row| row.accuracy).collect();
    accuracies.sort_by(f64::total_cmp);
    accuracies.dedup();

    accuracies
        .into_iter()
        .map(|accuracy| {
            let mut group: Vec<&SurfaceScoreRow> = rows
                .iter()
                .filter(|row| row.accuracy.total_cmp(&accuracy).is_eq())
                .collect();
            group.sort_by_key(|row| row.surface);
            AccuracyGroup {
                accuracy,
                scores: group.iter().map(|row| row.score).collect(),
                costs: group.iter().map(|row| row.points_evaluated as f64).collect(),
            }
        })
        .collect()
}

#[expect(clippy::cast_precision_loss, clippy::too_many_lines)]
pub(crate) fn run(arg: &SymregFiguresArg) -> anyhow::Result<()> {
    ensure_dir(&arg.out_dir)?;

    let rows: Vec<SurfaceScoreRow> =
        read_csv_file("surface scores", arg.data_dir.join("surface_scores.csv"))?;
    let groups = group_by_accuracy(&rows);
    anyhow::ensure!(!groups.is_empty(), "surface score table is empty");
    let reference = groups.len() - 1;

    let accuracy_labels: Vec<String> = groups.iter().map(|g| g.accuracy.to_string()).collect();
    let mut rng = Pcg64::seed_from_u64(arg.seed);

    // Evaluation cost vs accuracy, with a bootstrap band.
    let cost_groups: Vec<(f64, Vec<f64>)> = groups
        .iter()
        .map(|g| (g.accuracy, g.costs.clone()))
        .collect();
    let cost_band = band_over_groups(&cost_groups, arg.bootstrap_iterations, &mut rng)?;
    write_csv_file("evaluation cost band", arg.out_dir.join("evaluation_cost.csv"), &cost_band)?;
    render_band(
        &arg.out_dir.join("evaluation_cost.png"),
        "Evaluation cost depending on accuracy",
        "Accuracy",
        "Points per evaluation",
        &cost_band,
    )?;

    // Extra evaluations affordable in the full-accuracy budget.
    let totals: Vec<f64> = groups.iter().map(|g| g.costs.iter().sum()).collect();
    let per_eval: Vec<f64> = cost_band.iter().map(|p| p.mean).collect();
    let extra = extra_evaluations(&totals, &per_eval, reference);
    let extra_rows: Vec<LabeledValueRow> = accuracy_labels
        .iter()
        .zip(&extra)
        .map(|(label, &value)| LabeledValueRow {
            label: label.clone(),
            value,
        })
        .collect();
    write_csv_file("extra evaluations", arg.out_dir.join("extra_evaluations.csv"), &extra_rows)?;
    render_bars(
        &arg.out_dir.join("extra_evaluations.png"),
        "Extra evaluations in the time required by maximum accuracy",
        "Accuracy",
        "Number of extra evaluations",
        &accuracy_labels,
        &extra,
    )?;

    // Surface rankings per accuracy; low error means a low rank position.
    let rankings: Vec<Vec<usize>> = groups.iter().map(|g| rank_by_score(&g.scores)).collect();
    let surface_count = rankings[reference].len();
    let matrix = ranking_matrix(&rankings, reference);
    let matrix_values: Vec<Vec<f64>> = matrix
        .iter()
        .map(|row| row.iter().map(|&rank| rank as f64).collect())
        .collect();
    render_heatmap(
        &arg.out_dir.join("ranking_heatmap.png"),
        "Comparing rankings depending on accuracy",
        "Surface (ordered by reference ranking)",
        "Accuracy",
        &accuracy_labels,
        &matrix_values,
        (surface_count - 1).max(1) as f64,
    )?;

    // Similarity to the reference ranking; best surfaces carry low ranks.
    let best_half = best_item_indices(&rankings[reference], 0.5, false);
    let best_tenth = best_item_indices(&rankings[reference], 0.1, false);
    let mut similarity_rows = Vec::with_capacity(groups.len());
    for (group, ranking) in groups.iter().zip(&rankings) {
        similarity_rows.push(SimilarityRow {
            group: group.accuracy,
            full: rank_similarity(&rankings[reference], ranking)?,
            best_half: subset_similarity(&rankings[reference], ranking, &best_half)?,
            best_tenth: subset_similarity(&rankings[reference], ranking, &best_tenth)?,
        });
    }
    write_csv_file("rank similarity", arg.out_dir.join("rank_similarity.csv"), &similarity_rows)?;
    let similarity_series = vec![
        (
            "All ranking".to_owned(),
            similarity_rows.iter().map(|r| (r.group, r.full)).collect(),
        ),
        (
            "The best 50%".to_owned(),
            similarity_rows.iter().map(|r| (r.group, r.best_half)).collect(),
        ),
        (
            "The best 10%".to_owned(),
            similarity_rows.iter().map(|r| (r.group, r.best_tenth)).collect(),
        ),
    ];
    render_lines(
        &arg.out_dir.join("rank_similarity.png"),
        "Similarity between the reference and cheaper rankings",
        "Accuracy",
        "1 - normalized tau Kendall",
        &similarity_series,
    )?;

    // Pairwise similarity between every accuracy pair.
    let pairwise = pairwise_similarity(&rankings)?;
    let matrix_rows: Vec<SimilarityMatrixRow> = groups
        .iter()
        .zip(&pairwise)
        .map(|(group, similarities)| SimilarityMatrixRow {
            group: group.accuracy,
            similarities: format_bracketed(similarities),
        })
        .collect();
    write_csv_file(
        "rank similarity matrix",
        arg.out_dir.join("rank_similarity_matrix.csv"),
        &matrix_rows,
    )?;
    render_heatmap(
        &arg.out_dir.join("rank_similarity_matrix.png"),
        "Pairwise ranking similarity between accuracy values",
        "Accuracy (column index)",
        "Accuracy",
        &accuracy_labels,
        &pairwise,
        1.0,
    )?;

    // How often a cheap evaluation reports a perfect (zero) score.
    let zero_rates: Vec<f64> = groups.iter().map(|g| zero_score_rate(&g.scores)).collect();
    let zero_rows: Vec<LabeledValueRow> = accuracy_labels
        .iter()
        .zip(&zero_rates)
        .map(|(label, &value)| LabeledValueRow {
            label: label.clone(),
            value,
        })
        .collect();
    write_csv_file("exact-fit rate", arg.out_dir.join("exact_fit_rate.csv"), &zero_rows)?;
    render_bars(
        &arg.out_dir.join("exact_fit_rate.png"),
        "Presence of zero-error scores",
        "Accuracy",
        "Fraction of zero scores",
        &accuracy_labels,
        &zero_rates,
    )?;

    eprintln!("Wrote symbolic-regression figures to {}", arg.out_dir.display());
    Ok(())
}
