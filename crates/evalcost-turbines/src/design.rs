/// Geometry and operating point of one turbine design.
///
/// Chord and twist vary linearly from root to tip; all angles are in
/// radians, all lengths in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineDesign {
    /// Number of blades.
    pub blade_count: u32,
    /// Rotor radius at the blade tip.
    pub rotor_radius: f64,
    /// Radius where the blade root starts.
    pub hub_radius: f64,
    /// Chord length at the root.
    pub chord_root: f64,
    /// Chord length at the tip.
    pub chord_tip: f64,
    /// Twist angle at the root.
    pub twist_root: f64,
    /// Twist angle at the tip.
    pub twist_tip: f64,
    /// Collective pitch offset.
    pub pitch: f64,
    /// Tip speed ratio of the operating point.
    pub tip_speed_ratio: f64,
}

/// The ten designs every turbine experiment scores.
///
/// The catalog spans two- and three-bladed rotors across a range of radii,
/// planforms, and operating points so that the converged scores are spread
/// out rather than clustered.
#[must_use]
pub fn design_catalog() -> Vec<TurbineDesign> {
    vec![
        TurbineDesign {
            blade_count: 3,
            rotor_radius: 45.0,
            hub_radius: 1.5,
            chord_root: 3.2,
            chord_tip: 1.0,
            twist_root: 0.32,
            twist_tip: 0.02,
            pitch: 0.00,
            tip_speed_ratio: 7.0,
        },
        TurbineDesign {
            blade_count: 3,
            rotor_radius: 52.0,
            hub_radius: 1.8,
            chord_root: 3.6,
            chord_tip: 1.2,
            twist_root: 0.28,
            twist_tip: 0.01,
            pitch: 0.02,
            tip_speed_ratio: 7.5,
        },
        TurbineDesign {
            blade_count: 2,
            rotor_radius: 40.0,
            hub_radius: 1.2,
            chord_root: 2.8,
            chord_tip: 0.9,
            twist_root: 0.35,
            twist_tip: 0.03,
            pitch: -0.01,
            tip_speed_ratio: 8.5,
        },
        TurbineDesign {
            blade_count: 3,
            rotor_radius: 60.0,
            hub_radius: 2.0,
            chord_root: 4.1,
            chord_tip: 1.4,
            twist_root: 0.30,
            twist_tip: 0.00,
            pitch: 0.01,
            tip_speed_ratio: 6.5,
        },
        TurbineDesign {
            blade_count: 3,
            rotor_radius: 48.0,
            hub_radius: 1.6,
            chord_root: 2.9,
            chord_tip: 1.1,
            twist_root: 0.25,
            twist_tip: 0.04,
            pitch: 0.03,
            tip_speed_ratio: 7.2,
        },
        TurbineDesign {
            blade_count: 2,
            rotor_radius: 55.0,
            hub_radius: 1.7,
            chord_root: 3.4,
            chord_tip: 1.0,
            twist_root: 0.33,
            twist_tip: 0.02,
            pitch: -0.02,
            tip_speed_ratio: 9.0,
        },
        TurbineDesign {
            blade_count: 3,
            rotor_radius: 42.0,
            hub_radius: 1.3,
            chord_root: 3.0,
            chord_tip: 1.3,
            twist_root: 0.27,
            twist_tip: 0.05,
            pitch: 0.04,
            tip_speed_ratio: 6.8,
        },
        TurbineDesign {
            blade_count: 3,
            rotor_radius: 50.0,
            hub_radius: 1.5,
            chord_root: 3.8,
            chord_tip: 0.8,
            twist_root: 0.36,
            twist_tip: 0.01,
            pitch: 0.00,
            tip_speed_ratio: 7.8,
        },
        TurbineDesign {
            blade_count: 2,
            rotor_radius: 47.0,
            hub_radius: 1.4,
            chord_root: 2.6,
            chord_tip: 1.2,
            twist_root: 0.24,
            twist_tip: 0.03,
            pitch: 0.02,
            tip_speed_ratio: 8.0,
        },
        TurbineDesign {
            blade_count: 3,
            rotor_radius: 58.0,
            hub_radius: 1.9,
            chord_root: 3.3,
            chord_tip: 1.5,
            twist_root: 0.29,
            twist_tip: 0.02,
            pitch: -0.01,
            tip_speed_ratio: 7.4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_holds_ten_designs() {
        assert_eq!(design_catalog().len(), 10);
    }

    #[test]
    fn test_catalog_designs_are_distinct() {
        let catalog = design_catalog();
        for i in 0..catalog.len() {
            for j in (i + 1)..catalog.len() {
                assert_ne!(catalog[i], catalog[j], "designs {i} and {j} coincide");
            }
        }
    }

    #[test]
    fn test_catalog_geometry_is_sane() {
        for design in design_catalog() {
            assert!(design.hub_radius > 0.0);
            assert!(design.rotor_radius > design.hub_radius);
            assert!(design.chord_root >= design.chord_tip);
            assert!(design.twist_root >= design.twist_tip);
            assert!(design.tip_speed_ratio > 0.0);
            assert!(design.blade_count >= 2);
        }
    }
}
