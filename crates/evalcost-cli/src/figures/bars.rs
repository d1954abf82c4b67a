use std::path::Path;

use plotters::prelude::*;

use crate::figures::FIGURE_SIZE;

/// Renders one bar per labeled category.
///
/// # Panics
///
/// Panics if `labels` and `values` differ in length.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_bars(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    values: &[f64],
) -> anyhow::Result<()> {
    assert_eq!(labels.len(), values.len(), "one label per bar");
    if values.is_empty() {
        return Ok(());
    }

    let y_max = values.iter().copied().fold(0.0f64, f64::max).max(1e-9);
    let n = values.len() as f64;

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..(n - 0.5), 0.0..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|x| {
            let index = x.round();
            if (x - index).abs() < 1e-6 && index >= 0.0 && (index as usize) < labels.len() {
                labels[index as usize].clone()
            } else {
                String::new()
            }
        })
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, &value)| {
        let center = i as f64;
        Rectangle::new(
            [(center - 0.3, 0.0), (center + 0.3, value)],
            BLUE.mix(0.6).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
