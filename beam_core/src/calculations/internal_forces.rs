//! Internal Force Sampler
//!
//! Shear and bending moment at evenly spaced stations, from the support
//! reactions plus each load's Macaulay-bracket contribution.
//!
//! ## Sign Convention
//! - Positive shear: left side up, right side down
//! - Positive moment: sagging (tension on bottom fiber)
//!
//! At a station exactly under a point load the load is already counted, so the
//! shear reported there is the value just right of the load.

use serde::{Deserialize, Serialize};

use super::equilibrium::ReactionSet;
use crate::loads::Load;

/// Results at a single station along the span
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationSample {
    /// Distance from the left support (m)
    pub position_m: f64,
    /// Internal shear (kN)
    pub shear_kn: f64,
    /// Internal bending moment (kN·m, sagging positive)
    pub moment_knm: f64,
    /// Slope of the elastic curve (rad)
    pub slope_rad: f64,
    /// Deflection (mm, positive downward)
    pub deflection_mm: f64,
}

/// Station positions `x_i = L·i/N` for `i = 0..=N`
///
/// `intervals` is the number of equal spacings, so `intervals + 1` stations
/// come back: the first exactly 0, the last exactly `span`. With an even
/// count midspan is always a station.
pub fn station_positions(span: f64, intervals: usize) -> Vec<f64> {
    let n = intervals.max(1);
    (0..=n).map(|i| span * i as f64 / n as f64).collect()
}

/// Internal shear (kN) at section `x`
pub fn shear_at(reactions: &ReactionSet, loads: &[Load], x: f64) -> f64 {
    reactions.left_force_kn - loads.iter().map(|l| l.contribution(x).0).sum::<f64>()
}

/// Internal bending moment (kN·m) at section `x`
pub fn moment_at(reactions: &ReactionSet, loads: &[Load], x: f64) -> f64 {
    reactions.left_moment_knm + reactions.left_force_kn * x
        - loads.iter().map(|l| l.contribution(x).1).sum::<f64>()
}

/// Sample shear and moment over `intervals` equal spacings of the span
///
/// Slope and deflection are left at zero for the deflection integrator to fill.
pub fn sample_internal_forces(
    reactions: &ReactionSet,
    loads: &[Load],
    span: f64,
    intervals: usize,
) -> Vec<StationSample> {
    station_positions(span, intervals)
        .into_iter()
        .map(|x| {
            let (shear_delta, moment_delta) = loads
                .iter()
                .map(|l| l.contribution(x))
                .fold((0.0, 0.0), |(v, m), (dv, dm)| (v + dv, m + dm));

            StationSample {
                position_m: x,
                shear_kn: reactions.left_force_kn - shear_delta,
                moment_knm: reactions.left_moment_knm + reactions.left_force_kn * x - moment_delta,
                slope_rad: 0.0,
                deflection_mm: 0.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::equilibrium::{solve_cantilever, solve_simply_supported};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_station_positions_hit_both_ends() {
        let xs = station_positions(7.3, 10);
        assert_eq!(xs.len(), 11);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[10], 7.3);
        assert_relative_eq!(xs[5], 3.65, max_relative = 1e-12);
    }

    #[test]
    fn test_coarse_sampling_still_hits_midspan_peak() {
        // Fewest accepted intervals must not miss a midspan point load
        let loads = [Load::point(10.0, 5.0)];
        let r = solve_simply_supported(10.0, &loads);
        let stations = sample_internal_forces(&r, &loads, 10.0, 10);
        assert_eq!(stations[5].position_m, 5.0);
        assert_relative_eq!(stations[5].moment_knm, 25.0);
    }

    #[test]
    fn test_simply_supported_udl_diagram() {
        // 8 m, 5 kN/m: V(0) = 20, M(4) = wL²/8 = 40
        let loads = [Load::distributed(5.0, 0.0, 8.0)];
        let r = solve_simply_supported(8.0, &loads);
        let stations = sample_internal_forces(&r, &loads, 8.0, 100);

        assert_relative_eq!(stations[0].shear_kn, 20.0, max_relative = 1e-12);
        assert_relative_eq!(stations[50].moment_knm, 40.0, max_relative = 1e-12);
        assert_abs_diff_eq!(stations[100].moment_knm, 0.0, epsilon = 1e-9);
        assert_relative_eq!(stations[100].shear_kn, -20.0, max_relative = 1e-12);
    }

    #[test]
    fn test_shear_jump_at_point_load() {
        let loads = [Load::point(10.0, 5.0)];
        let r = solve_simply_supported(10.0, &loads);
        assert_relative_eq!(shear_at(&r, &loads, 4.99), 5.0);
        assert_relative_eq!(shear_at(&r, &loads, 5.0), -5.0);
        assert_relative_eq!(moment_at(&r, &loads, 5.0), 25.0);
    }

    #[test]
    fn test_cantilever_root_and_tip() {
        let loads = [Load::point(10.0, 4.0)];
        let r = solve_cantilever(&loads);
        let stations = sample_internal_forces(&r, &loads, 4.0, 10);
        assert_relative_eq!(stations[0].moment_knm, -40.0);
        assert_abs_diff_eq!(stations[10].moment_knm, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_couple_step_in_moment() {
        // Clockwise 20 kN·m at midspan of a 10 m simple span
        let loads = [Load::moment(20.0, 5.0)];
        let r = solve_simply_supported(10.0, &loads);
        assert_relative_eq!(moment_at(&r, &loads, 4.999), -10.0, max_relative = 1e-3);
        assert_relative_eq!(moment_at(&r, &loads, 5.0), 10.0);
        assert_abs_diff_eq!(moment_at(&r, &loads, 10.0), 0.0, epsilon = 1e-9);
    }
}
