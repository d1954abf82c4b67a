use serde::Serialize;

/// One labeled bar of a bar chart, written next to the image.
#[derive(Debug, Clone, Serialize)]
pub struct LabeledValueRow {
    pub label: String,
    pub value: f64,
}

/// Similarity of one group's ranking to the reference ranking.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityRow {
    /// Group key (section count or accuracy value).
    pub group: f64,
    /// Similarity over the full ranking.
    pub full: f64,
    /// Similarity restricted to the best half of the reference ranking.
    pub best_half: f64,
    /// Similarity restricted to the best tenth of the reference ranking.
    pub best_tenth: f64,
}

/// One row of a pairwise similarity matrix, values bracketed.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityMatrixRow {
    pub group: f64,
    pub similarities: String,
}
