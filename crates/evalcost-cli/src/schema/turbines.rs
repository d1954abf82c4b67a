use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use evalcost_harness::table::{ParseBracketedError, format_bracketed, parse_bracketed};

/// Summary of scoring the whole catalog at one resolution.
///
/// The list-valued columns hold one entry per design, serialized as
/// bracketed text inside the cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionSummaryRow {
    /// Blade sections the quadrature ran with.
    pub n_sections: usize,
    /// Per-design scores, bracketed.
    pub all_scores: String,
    /// Per-design rank positions, bracketed; the best design carries the
    /// highest position.
    pub ranking: String,
    /// Per-design evaluation times in seconds, bracketed.
    pub all_times: String,
    /// Total evaluation time across the catalog, in seconds.
    pub total_time: f64,
    /// Mean evaluation time, in seconds.
    pub time_per_eval: f64,
}

impl ResolutionSummaryRow {
    /// Builds a row from per-design results.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(n_sections: usize, scores: &[f64], ranking: &[usize], times: &[f64]) -> Self {
        let total_time: f64 = times.iter().sum();
        Self {
            n_sections,
            all_scores: format_bracketed(scores),
            ranking: format_bracketed(ranking),
            all_times: format_bracketed(times),
            total_time,
            time_per_eval: total_time / times.len() as f64,
        }
    }

    /// Parses the per-design scores back out of the cell.
    pub fn scores(&self) -> Result<Vec<f64>, ParseBracketedError> {
        parse_bracketed(&self.all_scores)
    }

    /// Parses the per-design rank positions back out of the cell.
    pub fn rank_positions(&self) -> Result<Vec<usize>, ParseBracketedError> {
        parse_bracketed(&self.ranking)
    }

    /// Parses the per-design times back out of the cell.
    pub fn times(&self) -> Result<Vec<f64>, ParseBracketedError> {
        parse_bracketed(&self.all_times)
    }
}

/// One design evaluated at one resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignEvaluationRow {
    /// Resolution as a fraction of the reference section count.
    pub accuracy: f64,
    /// Blade sections the quadrature ran with.
    pub n_sections: usize,
    /// Index of the design within the catalog.
    pub design: usize,
    /// Power coefficient.
    pub score: f64,
    /// Evaluation wall time in seconds.
    pub time: f64,
}

/// Run parameters of a `turbines-data` invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurbinesManifest {
    pub created_at: DateTime<Utc>,
    /// Section counts swept, ascending.
    pub section_grid: Vec<usize>,
    /// Number of catalog designs scored at each resolution.
    pub design_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_row_round_trips_its_lists() {
        let scores = [0.41, 0.37, 0.44];
        let ranking = [1, 0, 2];
        let times = [0.002, 0.003, 0.0025];
        let row = ResolutionSummaryRow::new(25, &scores, &ranking, &times);

        assert_eq!(row.scores().unwrap(), scores);
        assert_eq!(row.rank_positions().unwrap(), ranking);
        assert_eq!(row.times().unwrap(), times);
    }

    #[test]
    fn test_summary_row_aggregates_times() {
        let row = ResolutionSummaryRow::new(10, &[0.5], &[0], &[1.0, 2.0, 3.0]);
        assert!((row.total_time - 6.0).abs() < 1e-12);
        assert!((row.time_per_eval - 2.0).abs() < 1e-12);
    }
}
