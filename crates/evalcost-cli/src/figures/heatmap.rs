use std::path::Path;

use plotters::prelude::*;

use crate::figures::{FIGURE_SIZE, heat_color};

/// Renders a matrix as a cell grid colored by value.
///
/// Row `i` of `matrix` is drawn as the `i`-th row from the top; cell colors
/// interpolate from light (0) to dark (`max_value`).
///
/// # Panics
///
/// Panics if `row_labels` and `matrix` differ in length or `max_value` is
/// not positive.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_heatmap(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    row_labels: &[String],
    matrix: &[Vec<f64>],
    max_value: f64,
) -> anyhow::Result<()> {
    assert_eq!(row_labels.len(), matrix.len(), "one label per matrix row");
    assert!(max_value > 0.0, "max_value must be positive");
    if matrix.is_empty() {
        return Ok(());
    }

    let rows = matrix.len();
    let cols = matrix[0].len();

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..cols as f64, 0.0..rows as f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_labels(rows)
        .y_label_formatter(&|y| {
            // Rows are drawn top-down; label the row whose band covers y.
            let row = y.floor() as usize;
            if *y >= 0.0 && row < rows {
                row_labels[rows - 1 - row].clone()
            } else {
                String::new()
            }
        })
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(matrix.iter().enumerate().flat_map(|(row, row_values)| {
        row_values.iter().enumerate().map(move |(col, &value)| {
            // First matrix row at the top of the chart.
            let y_top = (rows - row) as f64;
            Rectangle::new(
                [(col as f64 + 0.02, y_top - 0.98), (col as f64 + 0.98, y_top - 0.02)],
                heat_color(value / max_value).filled(),
            )
        })
    }))?;

    root.present()?;
    Ok(())
}
