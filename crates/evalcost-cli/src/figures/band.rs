use std::path::Path;

use plotters::prelude::*;

use crate::{analysis::BandPoint, figures::FIGURE_SIZE};

/// Renders a mean line with its bootstrap confidence band.
pub fn render_band(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    band: &[BandPoint],
) -> anyhow::Result<()> {
    if band.is_empty() {
        return Ok(());
    }

    let x_min = band.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let x_max = band.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let y_min = band.iter().map(|p| p.lower).fold(f64::INFINITY, f64::min);
    let y_max = band.iter().map(|p| p.upper).fold(f64::NEG_INFINITY, f64::max);
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

    // Band polygon: upper edge left to right, lower edge back.
    let mut polygon: Vec<(f64, f64)> = band.iter().map(|p| (p.x, p.upper)).collect();
    polygon.extend(band.iter().rev().map(|p| (p.x, p.lower)));
    chart.draw_series(std::iter::once(Polygon::new(polygon, BLUE.mix(0.25).filled())))?;

    chart.draw_series(LineSeries::new(
        band.iter().map(|p| (p.x, p.mean)),
        BLUE.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}
