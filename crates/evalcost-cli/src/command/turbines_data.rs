use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;

use evalcost_stats::ranking::rank_by_score;
use evalcost_turbines::{
    design::design_catalog,
    simulate::{DEFAULT_SECTION_GRID, simulate_timed},
};

use crate::{
    schema::turbines::{DesignEvaluationRow, ResolutionSummaryRow, TurbinesManifest},
    util::{ensure_dir, save_json, write_csv_file},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TurbinesDataArg {
    /// Directory the tables are written to
    #[arg(long, default_value = "results/data/turbines")]
    out_dir: PathBuf,
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn run(arg: &TurbinesDataArg) -> anyhow::Result<()> {
    ensure_dir(&arg.out_dir)?;

    let catalog = design_catalog();
    let reference_sections = *DEFAULT_SECTION_GRID.last().unwrap();
    eprintln!(
        "Scoring {} designs at {} resolutions...",
        catalog.len(),
        DEFAULT_SECTION_GRID.len()
    );

    let mut summary_rows = Vec::with_capacity(DEFAULT_SECTION_GRID.len());
    let mut evaluation_rows = Vec::with_capacity(DEFAULT_SECTION_GRID.len() * catalog.len());
    for &n_sections in &DEFAULT_SECTION_GRID {
        let mut scores = Vec::with_capacity(catalog.len());
        let mut times = Vec::with_capacity(catalog.len());
        for (index, design) in catalog.iter().enumerate() {
            let timed = simulate_timed(design, n_sections)
                .with_context(|| format!("failed to score design {index} at N={n_sections}"))?;
            scores.push(timed.score);
            times.push(timed.seconds);
            evaluation_rows.push(DesignEvaluationRow {
                accuracy: n_sections as f64 / reference_sections as f64,
                n_sections,
                design: index,
                score: timed.score,
                time: timed.seconds,
            });
        }

        // Rank positions per design; the best design holds the highest one.
        let ranking = rank_by_score(&scores);
        summary_rows.push(ResolutionSummaryRow::new(n_sections, &scores, &ranking, &times));
        eprintln!("  N={n_sections}: done");
    }

    let summary_path = arg.out_dir.join("resolution_summary.csv");
    write_csv_file("resolution summary", &summary_path, &summary_rows)?;
    let evaluations_path = arg.out_dir.join("design_evaluations.csv");
    write_csv_file("design evaluations", &evaluations_path, &evaluation_rows)?;

    let manifest = TurbinesManifest {
        created_at: Utc::now(),
        section_grid: DEFAULT_SECTION_GRID.to_vec(),
        design_count: catalog.len(),
    };
    save_json("manifest", arg.out_dir.join("manifest.json"), &manifest)?;

    eprintln!(
        "Wrote {} summary rows -> {}",
        summary_rows.len(),
        summary_path.display()
    );
    Ok(())
}
