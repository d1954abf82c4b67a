use std::path::PathBuf;

use anyhow::Context;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use evalcost_harness::table::format_bracketed;
use evalcost_stats::ranking::rank_similarity;

use crate::{
    analysis::{
        best_item_indices, band_over_groups, extra_evaluations, pairwise_similarity,
        ranking_matrix, subset_similarity,
    },
    figures::{band::render_band, bars::render_bars, heatmap::render_heatmap, lines::render_lines},
    schema::{
        figures::{LabeledValueRow, SimilarityMatrixRow, SimilarityRow},
        turbines::ResolutionSummaryRow,
    },
    util::{ensure_dir, read_csv_file, write_csv_file},
};

const DEFAULT_BOOTSTRAP_ITERATIONS: usize = 1000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TurbinesFiguresArg {
    /// Directory holding the turbines tables
    #[arg(long, default_value = "results/data/turbines")]
    data_dir: PathBuf,
    /// Directory the figures are written to
    #[arg(long, default_value = "results/figures/turbines")]
    out_dir: PathBuf,
    /// Bootstrap resamples per confidence band point
    #[arg(long, default_value_t = DEFAULT_BOOTSTRAP_ITERATIONS)]
    bootstrap_iterations: usize,
    /// Seed of the bootstrap resampling
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[expect(clippy::cast_precision_loss, clippy::too_many_lines)]
pub(crate) fn run(arg: &TurbinesFiguresArg) -> anyhow::Result<()> {
    ensure_dir(&arg.out_dir)?;

    let mut rows: Vec<ResolutionSummaryRow> =
        read_csv_file("resolution summary", arg.data_dir.join("resolution_summary.csv"))?;
    rows.sort_by_key(|row| row.n_sections);
    anyhow::ensure!(!rows.is_empty(), "resolution summary table is empty");
    let reference = rows.len() - 1;

    let section_labels: Vec<String> = rows.iter().map(|row| row.n_sections.to_string()).collect();
    let mut rng = Pcg64::seed_from_u64(arg.seed);

    // Evaluation time vs resolution, with a bootstrap band.
    let time_groups: Vec<(f64, Vec<f64>)> = rows
        .iter()
        .map(|row| Ok((row.n_sections as f64, row.times()?)))
        .collect::<Result<_, anyhow::Error>>()?;
    let time_band = band_over_groups(&time_groups, arg.bootstrap_iterations, &mut rng)?;
    write_csv_file("evaluation time band", arg.out_dir.join("evaluation_time.csv"), &time_band)?;
    render_band(
        &arg.out_dir.join("evaluation_time.png"),
        "Evaluation time depending on N",
        "N",
        "Time per evaluation (s)",
        &time_band,
    )?;

    // Extra evaluations affordable in the reference-time budget.
    let totals: Vec<f64> = rows.iter().map(|row| row.total_time).collect();
    let per_eval: Vec<f64> = rows.iter().map(|row| row.time_per_eval).collect();
    let extra = extra_evaluations(&totals, &per_eval, reference);
    let extra_rows: Vec<LabeledValueRow> = section_labels
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
        "Extra evaluations in the time required by maximum N",
        "N",
        "Number of extra evaluations",
        &section_labels,
        &extra,
    )?;

    // Design rankings per resolution, columns ordered by the reference.
    let rankings: Vec<Vec<usize>> = rows
        .iter()
        .map(|row| row.rank_positions().map_err(anyhow::Error::from))
        .collect::<Result<_, _>>()?;
    let design_count = rankings[reference].len();
    let matrix = ranking_matrix(&rankings, reference);
    let matrix_values: Vec<Vec<f64>> = matrix
        .iter()
        .map(|row| row.iter().map(|&rank| rank as f64).collect())
        .collect();
    render_heatmap(
        &arg.out_dir.join("ranking_heatmap.png"),
        "Comparing rankings depending on N",
        "Turbine design (ordered by reference ranking)",
        "N",
        &section_labels,
        &matrix_values,
        (design_count - 1).max(1) as f64,
    )?;

    // Best-design score loss per resolution, against reference scores.
    let reference_scores = rows[reference]
        .scores()
        .context("reference row has no scores")?;
    let best_reference_score = reference_scores.iter().copied().fold(f64::MIN, f64::max);
    let score_loss: Vec<f64> = rankings
        .iter()
        .map(|ranking| {
            let chosen = ranking
                .iter()
                .enumerate()
                .max_by_key(|&(_, rank)| rank)
                .map(|(design, _)| design)
                .expect("rankings are non-empty");
            (best_reference_score - reference_scores[chosen]) / best_reference_score
        })
        .collect();
    let loss_rows: Vec<LabeledValueRow> = section_labels
        .iter()
        .zip(&score_loss)
        .map(|(label, &value)| LabeledValueRow {
            label: label.clone(),
            value,
        })
        .collect();
    write_csv_file("score loss", arg.out_dir.join("score_loss.csv"), &loss_rows)?;
    render_bars(
        &arg.out_dir.join("score_loss.png"),
        "Loss of score quality depending on N",
        "N",
        "Score loss (fraction of reference best)",
        &section_labels,
        &score_loss,
    )?;

    // Similarity to the reference ranking: full, best half, best tenth.
    let best_half = best_item_indices(&rankings[reference], 0.5, true);
    let best_tenth = best_item_indices(&rankings[reference], 0.1, true);
    let mut similarity_rows = Vec::with_capacity(rows.len());
    for (row, ranking) in rows.iter().zip(&rankings) {
        similarity_rows.push(SimilarityRow {
            group: row.n_sections as f64,
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
        "N",
        "1 - normalized tau Kendall",
        &similarity_series,
    )?;

    // Pairwise similarity between every resolution pair.
    let pairwise = pairwise_similarity(&rankings)?;
    let matrix_rows: Vec<SimilarityMatrixRow> = rows
        .iter()
        .zip(&pairwise)
        .map(|(row, similarities)| SimilarityMatrixRow {
            group: row.n_sections as f64,
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
        "Pairwise ranking similarity between resolutions",
        "N (column index)",
        "N",
        &section_labels,
        &pairwise,
        1.0,
    )?;

    eprintln!("Wrote turbine figures to {}", arg.out_dir.display());
    Ok(())
}
