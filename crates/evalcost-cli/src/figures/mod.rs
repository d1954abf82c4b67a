//! Plotters-based figure rendering.
//!
//! Every renderer writes a PNG; the figure commands write the derived
//! series as CSV next to each image so the numbers behind a chart stay
//! inspectable.

use plotters::style::RGBColor;

pub mod band;
pub mod bars;
pub mod heatmap;
pub mod lines;

pub const FIGURE_SIZE: (u32, u32) = (1200, 700);

/// Two-stop color ramp for heatmap cells, light for 0.0 to deep blue for 1.0.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn heat_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |from: f64, to: f64| (from + (to - from) * t).round() as u8;
    RGBColor(lerp(245.0, 23.0), lerp(247.0, 74.0), lerp(250.0, 148.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_color_endpoints() {
        assert_eq!(heat_color(0.0), RGBColor(245, 247, 250));
        assert_eq!(heat_color(1.0), RGBColor(23, 74, 148));
    }

    #[test]
    fn test_heat_color_clamps_out_of_range() {
        assert_eq!(heat_color(-2.0), heat_color(0.0));
        assert_eq!(heat_color(5.0), heat_color(1.0));
    }
}
