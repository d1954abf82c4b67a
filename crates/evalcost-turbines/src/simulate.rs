//! Blade-element surrogate scoring.
//!
//! The score of a design is a power coefficient obtained by midpoint-rule
//! integration of a per-section power contribution along the blade. The
//! section count N controls quadrature granularity: the integrand is smooth,
//! so scores converge as N grows while coarse N both cheapens and perturbs
//! them.

use std::f64::consts::PI;

use evalcost_harness::stopwatch::Stopwatch;

use crate::design::TurbineDesign;

/// Betz limit: upper bound on any power coefficient.
pub const BETZ_LIMIT: f64 = 16.0 / 27.0;

/// Section counts the turbine study sweeps.
pub const DEFAULT_SECTION_GRID: [usize; 10] = [5, 10, 15, 20, 25, 30, 40, 50, 75, 100];

/// Lift-curve slope of the section airfoil (thin-airfoil 2π).
const LIFT_SLOPE: f64 = 2.0 * PI;

/// Width of the smooth stall roll-off, in radians of attack angle.
const STALL_WIDTH: f64 = 0.3;

/// Error returned for a resolution the quadrature cannot run at.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("simulation needs at least one blade section")]
pub struct ZeroSectionsError;

/// Score plus the wall time the evaluation took.
#[derive(Debug, Clone, Copy)]
pub struct TimedScore {
    /// Power coefficient of the design.
    pub score: f64,
    /// Evaluation wall time in seconds.
    pub seconds: f64,
}

/// Scores a design by integrating over `n_sections` blade sections.
///
/// Returns a power coefficient in `[0, BETZ_LIMIT)`. The same design and
/// section count always produce the same score.
///
/// # Errors
///
/// Returns [`ZeroSectionsError`] when `n_sections` is zero.
#[expect(clippy::cast_precision_loss)]
pub fn simulate(design: &TurbineDesign, n_sections: usize) -> Result<f64, ZeroSectionsError> {
    if n_sections == 0 {
        return Err(ZeroSectionsError);
    }

    let span = design.rotor_radius - design.hub_radius;
    let dr = span / n_sections as f64;

    let mut raw_power = 0.0;
    for section in 0..n_sections {
        let r = design.hub_radius + (section as f64 + 0.5) * dr;
        raw_power += section_contribution(design, r) * dr / design.rotor_radius;
    }

    // Soft-limit the dimensionless power so coefficients stay below Betz.
    Ok((BETZ_LIMIT * (1.0 - (-raw_power).exp())).max(0.0))
}

/// Scores a design and measures the evaluation wall time.
///
/// # Errors
///
/// Returns [`ZeroSectionsError`] when `n_sections` is zero.
pub fn simulate_timed(
    design: &TurbineDesign,
    n_sections: usize,
) -> Result<TimedScore, ZeroSectionsError> {
    let stopwatch = Stopwatch::start();
    let score = simulate(design, n_sections)?;
    Ok(TimedScore {
        score,
        seconds: stopwatch.elapsed_secs(),
    })
}

/// Dimensionless power contribution of the blade section at radius `r`.
fn section_contribution(design: &TurbineDesign, r: f64) -> f64 {
    let t = (r - design.hub_radius) / (design.rotor_radius - design.hub_radius);
    let chord = lerp(design.chord_root, design.chord_tip, t);
    let twist = lerp(design.twist_root, design.twist_tip, t);

    let local_speed_ratio = design.tip_speed_ratio * r / design.rotor_radius;
    // Ideal inflow angle for the local speed ratio.
    let inflow = (2.0 / (3.0 * local_speed_ratio)).atan();
    let attack = inflow - twist - design.pitch;

    // Thin-airfoil lift with a smooth stall roll-off away from small angles.
    let lift = LIFT_SLOPE * attack * (-(attack / STALL_WIDTH).powi(2) / 2.0).exp();

    let solidity = f64::from(design.blade_count) * chord / (2.0 * PI * r);

    // Prandtl tip-loss factor, zero at the tip.
    let loss_exponent =
        -f64::from(design.blade_count) / 2.0 * (design.rotor_radius - r) / (r * inflow.sin());
    let tip_loss = 2.0 / PI * loss_exponent.exp().acos();

    solidity * lift * local_speed_ratio.powi(2) * tip_loss * (r / design.rotor_radius)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use crate::design::design_catalog;

    use super::*;

    #[test]
    fn test_zero_sections_is_rejected() {
        let design = design_catalog()[0];
        assert!(simulate(&design, 0).is_err());
    }

    #[test]
    fn test_scores_respect_the_betz_limit() {
        for design in design_catalog() {
            let score = simulate(&design, 100).unwrap();
            assert!(score >= 0.0, "negative power coefficient");
            assert!(score < BETZ_LIMIT, "score exceeds the Betz limit");
        }
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let design = design_catalog()[3];
        assert_eq!(simulate(&design, 25).unwrap(), simulate(&design, 25).unwrap());
    }

    #[test]
    fn test_scores_converge_with_section_count() {
        for design in design_catalog() {
            let fine = simulate(&design, 400).unwrap();
            let finer = simulate(&design, 800).unwrap();
            assert!(
                (fine - finer).abs() < 1e-3,
                "quadrature should have converged by 400 sections"
            );
        }
    }

    #[test]
    fn test_coarse_resolution_perturbs_the_score() {
        let design = design_catalog()[0];
        let coarse = simulate(&design, 5).unwrap();
        let converged = simulate(&design, 800).unwrap();
        assert_ne!(coarse, converged);
    }

    #[test]
    fn test_converged_scores_are_spread_out() {
        let scores: Vec<f64> = design_catalog()
            .iter()
            .map(|d| simulate(d, 400).unwrap())
            .collect();
        for i in 0..scores.len() {
            for j in (i + 1)..scores.len() {
                assert!(
                    (scores[i] - scores[j]).abs() > 1e-9,
                    "designs {i} and {j} score identically"
                );
            }
        }
    }

    #[test]
    fn test_timed_variant_reports_a_nonnegative_duration() {
        let design = design_catalog()[1];
        let timed = simulate_timed(&design, 50).unwrap();
        assert_eq!(timed.score, simulate(&design, 50).unwrap());
        assert!(timed.seconds >= 0.0);
    }
}
