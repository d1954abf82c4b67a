use std::path::Path;

use plotters::prelude::*;

use crate::figures::FIGURE_SIZE;

/// Renders one labeled line per series on shared axes.
pub fn render_lines(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[(String, Vec<(f64, f64)>)],
) -> anyhow::Result<()> {
    let points = || series.iter().flat_map(|(_, s)| s.iter().copied());
    if points().next().is_none() {
        return Ok(());
    }

    let x_min = points().map(|(x, _)| x).fold(f64::INFINITY, f64::min);
    let x_max = points().map(|(x, _)| x).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points().map(|(_, y)| y).fold(f64::INFINITY, f64::min);
    let y_max = points().map(|(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    let pad = ((y_max - y_min).abs() * 0.1).max(1e-9);

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))?;

    chart.configure_mesh().x_desc(x_desc).y_desc(y_desc).draw()?;

    for (index, (label, line)) in series.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        chart
            .draw_series(LineSeries::new(line.iter().copied(), color.stroke_width(2)))?
            .label(label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.4))
        .background_style(WHITE.mix(0.85))
        .draw()?;

    root.present()?;
    Ok(())
}
