//! Deflection Integrator
//!
//! Slope and deflection by double trapezoidal integration of curvature
//! `κ = −M/EI` over the sampled stations, followed by a boundary correction.
//!
//! Moments are converted to N·mm and positions to mm, so with EI in N·mm² the
//! slope comes out in radians and deflection in mm (positive downward).
//!
//! | Boundary          | Integration start        | Correction                         |
//! |-------------------|--------------------------|------------------------------------|
//! | Pinned both ends  | θ(0) = 0, y(0) = 0       | subtract the chord `y_N·x/L`       |
//! | Fixed left        | θ(0) = 0, y(0) = 0       | none                               |
//!
//! Fixed–fixed beams use the pinned correction; the fixed-end moments already
//! in the diagram make the corrected curve close to the true clamped shape.

use serde::{Deserialize, Serialize};

use super::internal_forces::StationSample;
use crate::equations::CURVATURE_SIGN;
use crate::units::{KilonewtonMeters, Meters, Millimeters, NewtonMillimeters};

/// Kinematic boundary condition imposed on the integrated curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeflectionBoundary {
    /// Zero deflection at both ends
    PinnedBothEnds,
    /// Zero slope and deflection at the left end
    FixedLeft,
}

/// Fill `slope_rad` and `deflection_mm` on every station in place
///
/// `flexural_rigidity_nmm2` is E (MPa) × I (mm⁴). Stations must be in order
/// along the span, starting at 0 and ending at `span_m`.
pub fn apply_deflection(
    stations: &mut [StationSample],
    span_m: f64,
    flexural_rigidity_nmm2: f64,
    boundary: DeflectionBoundary,
) {
    let Some(first) = stations.first_mut() else {
        return;
    };
    first.slope_rad = 0.0;
    first.deflection_mm = 0.0;

    let curvature = |s: &StationSample| {
        let moment: NewtonMillimeters = KilonewtonMeters(s.moment_knm).into();
        // κ = −M/EI with downward-positive deflection
        CURVATURE_SIGN * moment.value() / flexural_rigidity_nmm2
    };
    let position_mm = |s: &StationSample| Millimeters::from(Meters(s.position_m)).value();

    for i in 1..stations.len() {
        let (prev, next) = (stations[i - 1], stations[i]);
        let h = position_mm(&next) - position_mm(&prev);

        let slope = prev.slope_rad + 0.5 * (curvature(&prev) + curvature(&next)) * h;
        let deflection = prev.deflection_mm + 0.5 * (prev.slope_rad + slope) * h;

        stations[i].slope_rad = slope;
        stations[i].deflection_mm = deflection;
    }

    if boundary == DeflectionBoundary::PinnedBothEnds {
        let span_mm = Millimeters::from(Meters(span_m)).value();
        let end = stations.last().map_or(0.0, |s| s.deflection_mm);
        let chord_slope = end / span_mm;

        for s in stations.iter_mut() {
            s.deflection_mm -= chord_slope * position_mm(s);
            s.slope_rad -= chord_slope;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::equilibrium::{solve_cantilever, solve_simply_supported};
    use crate::calculations::internal_forces::sample_internal_forces;
    use crate::loads::Load;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EI: f64 = 200_000.0 * 8.0e7;

    #[test]
    fn test_simply_supported_udl_midspan() {
        // δ = 5wL⁴/(384EI), w in N/mm, L in mm
        let (w, l) = (10.0, 6.0);
        let loads = [Load::distributed(w, 0.0, l)];
        let r = solve_simply_supported(l, &loads);
        let mut stations = sample_internal_forces(&r, &loads, l, 100);
        apply_deflection(&mut stations, l, EI, DeflectionBoundary::PinnedBothEnds);

        let expected = 5.0 * w * (l * 1000.0).powi(4) / (384.0 * EI);
        assert_relative_eq!(stations[50].deflection_mm, expected, max_relative = 1e-3);
        assert_abs_diff_eq!(stations[0].deflection_mm, 0.0);
        assert_abs_diff_eq!(stations[100].deflection_mm, 0.0, epsilon = 1e-9);
        // Symmetric: zero slope at midspan
        assert_abs_diff_eq!(stations[50].slope_rad, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cantilever_tip_point_load() {
        // δ = PL³/(3EI)
        let (p, l) = (5.0, 3.0);
        let loads = [Load::point(p, l)];
        let r = solve_cantilever(&loads);
        let mut stations = sample_internal_forces(&r, &loads, l, 200);
        apply_deflection(&mut stations, l, EI, DeflectionBoundary::FixedLeft);

        let expected = p * 1000.0 * (l * 1000.0).powi(3) / (3.0 * EI);
        let tip = stations.last().unwrap();
        assert_relative_eq!(tip.deflection_mm, expected, max_relative = 1e-3);
        assert!(tip.slope_rad > 0.0);
        assert_eq!(stations[0].deflection_mm, 0.0);
        assert_eq!(stations[0].slope_rad, 0.0);
    }

    #[test]
    fn test_no_stations_is_noop() {
        let mut none: Vec<StationSample> = Vec::new();
        apply_deflection(&mut none, 1.0, EI, DeflectionBoundary::FixedLeft);
        assert!(none.is_empty());
    }
}
