//! # Equilibrium Solver
//!
//! Support reactions for the four single-span configurations. Each support type
//! is an independent strategy; nothing is shared between calls.
//!
//! | Support              | Left  | Right  | Degree of indeterminacy |
//! |----------------------|-------|--------|-------------------------|
//! | Simply supported     | Pin   | Roller | 0                       |
//! | Cantilever           | Fixed | Free   | 0                       |
//! | Fixed–fixed          | Fixed | Fixed  | 2 (fixed-end moments)   |
//! | Propped cantilever   | Fixed | Roller | 1 (unit-load compatibility) |
//!
//! Reaction forces are positive upward. Support moments are the internal bending
//! moment at the support (sagging positive), so gravity loads give negative values.
//!
//! Inputs are assumed validated by [`crate::calculations::beam::Beam::validate`].

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::deflection::{apply_deflection, DeflectionBoundary};
use super::internal_forces::sample_internal_forces;
use crate::equations::{fem_applied_moment, fem_partial_uniform, fem_point_load, fem_uniform_full};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{total_moment_about_left, total_vertical_force, Load};

/// Number of point loads a partial-span distributed load is split into for its
/// fixed-end moments
pub const FEM_MICRO_SEGMENTS: usize = 100;

/// Relative tolerance for treating a distributed load as covering the full span
const FULL_SPAN_TOLERANCE: f64 = 1e-9;

// =============================================================================
// SUPPORT TYPE
// =============================================================================

/// Support configuration of a single-span beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SupportType {
    /// Pin at left, roller at right
    #[default]
    #[serde(alias = "simple")]
    SimplySupported,

    /// Fixed at left, free at right
    Cantilever,

    /// Fixed at both ends
    #[serde(alias = "fixed")]
    FixedFixed,

    /// Fixed at left, roller at right
    #[serde(alias = "propped")]
    ProppedCantilever,
}

impl SupportType {
    /// All available support types for UI selection
    pub const ALL: [SupportType; 4] = [
        SupportType::SimplySupported,
        SupportType::Cantilever,
        SupportType::FixedFixed,
        SupportType::ProppedCantilever,
    ];

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportType::SimplySupported => "Simply Supported",
            SupportType::Cantilever => "Cantilever",
            SupportType::FixedFixed => "Fixed-Fixed",
            SupportType::ProppedCantilever => "Propped Cantilever",
        }
    }

    /// Tag used in JSON and on the command line
    pub fn tag(&self) -> &'static str {
        match self {
            SupportType::SimplySupported => "simply_supported",
            SupportType::Cantilever => "cantilever",
            SupportType::FixedFixed => "fixed_fixed",
            SupportType::ProppedCantilever => "propped_cantilever",
        }
    }

    /// Returns true if the left support restrains rotation
    pub fn fixed_left(&self) -> bool {
        !matches!(self, SupportType::SimplySupported)
    }

    /// Returns true if the right end has a vertical support
    pub fn supported_right(&self) -> bool {
        !matches!(self, SupportType::Cantilever)
    }

    /// Returns true if the right support restrains rotation
    pub fn fixed_right(&self) -> bool {
        matches!(self, SupportType::FixedFixed)
    }

    /// Redundant reactions beyond static equilibrium
    pub fn degree_of_indeterminacy(&self) -> u8 {
        match self {
            SupportType::SimplySupported | SupportType::Cantilever => 0,
            SupportType::ProppedCantilever => 1,
            SupportType::FixedFixed => 2,
        }
    }

    /// Boundary conditions the deflection integrator must satisfy
    pub fn deflection_boundary(&self) -> DeflectionBoundary {
        match self {
            SupportType::SimplySupported | SupportType::FixedFixed => {
                DeflectionBoundary::PinnedBothEnds
            }
            SupportType::Cantilever | SupportType::ProppedCantilever => {
                DeflectionBoundary::FixedLeft
            }
        }
    }
}

impl fmt::Display for SupportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SupportType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match tag.as_str() {
            "simply_supported" | "simple" => Ok(SupportType::SimplySupported),
            "cantilever" => Ok(SupportType::Cantilever),
            "fixed_fixed" | "fixed" => Ok(SupportType::FixedFixed),
            "propped_cantilever" | "propped" => Ok(SupportType::ProppedCantilever),
            _ => Err(CalcError::unsupported("beam_type", s)),
        }
    }
}

// =============================================================================
// REACTION SET
// =============================================================================

/// Support reactions for a single span
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReactionSet {
    /// Left vertical reaction (kN, positive upward)
    pub left_force_kn: f64,
    /// Right vertical reaction (kN, positive upward)
    pub right_force_kn: f64,
    /// Internal moment at the left support (kN·m); zero unless fixed
    pub left_moment_knm: f64,
    /// Internal moment at the right support (kN·m); zero unless fixed
    pub right_moment_knm: f64,
}

impl ReactionSet {
    /// Sum of vertical reactions (kN, positive upward)
    pub fn total_force(&self) -> f64 {
        self.left_force_kn + self.right_force_kn
    }
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Stiffness and resolution needed by the compatibility-based strategy
#[derive(Debug, Clone, Copy)]
pub struct Flexure {
    /// Flexural rigidity EI (N·mm²)
    pub flexural_rigidity_nmm2: f64,
    /// Station intervals used for the compatibility deflections
    pub station_count: usize,
}

/// Solve reactions for the given support configuration
pub fn solve_reactions(
    support: SupportType,
    span: f64,
    loads: &[Load],
    flexure: Flexure,
) -> CalcResult<ReactionSet> {
    debug!("solving {} reactions for {} loads over {} m", support.tag(), loads.len(), span);
    match support {
        SupportType::SimplySupported => Ok(solve_simply_supported(span, loads)),
        SupportType::Cantilever => Ok(solve_cantilever(loads)),
        SupportType::FixedFixed => Ok(solve_fixed_fixed(span, loads)),
        SupportType::ProppedCantilever => solve_propped_cantilever(span, loads, flexure),
    }
}

/// Pin + roller: moments about the left support, then vertical balance
pub fn solve_simply_supported(span: f64, loads: &[Load]) -> ReactionSet {
    let right = total_moment_about_left(loads) / span;
    let left = total_vertical_force(loads) - right;

    ReactionSet {
        left_force_kn: left,
        right_force_kn: right,
        ..Default::default()
    }
}

/// Fixed left, free right: the root carries everything
pub fn solve_cantilever(loads: &[Load]) -> ReactionSet {
    ReactionSet {
        left_force_kn: total_vertical_force(loads),
        right_force_kn: 0.0,
        // Load moments are clockwise about the root; the root resists with hogging
        left_moment_knm: -total_moment_about_left(loads),
        right_moment_knm: 0.0,
    }
}

/// Fixed-end moments accumulated over all loads, `(Ma, Mb)`
pub fn fixed_end_moments(span: f64, loads: &[Load]) -> (f64, f64) {
    loads.iter().fold((0.0, 0.0), |(ma, mb), load| {
        let (dma, dmb) = match *load {
            Load::Point { magnitude, position } => fem_point_load(magnitude, position, span),
            Load::Distributed { magnitude, start, end } => {
                let full = start.abs() <= FULL_SPAN_TOLERANCE * span
                    && (end - span).abs() <= FULL_SPAN_TOLERANCE * span;
                if full {
                    fem_uniform_full(magnitude, span)
                } else {
                    fem_partial_uniform(magnitude, start, end, span, FEM_MICRO_SEGMENTS)
                }
            }
            Load::Moment { magnitude, position } => fem_applied_moment(magnitude, position, span),
        };
        trace!("{} load FEM contribution: Ma += {:.6}, Mb += {:.6}", load.display_name(), dma, dmb);
        (ma + dma, mb + dmb)
    })
}

/// Fixed both ends: superposed fixed-end moments, then statics with Ma/Mb as end moments
pub fn solve_fixed_fixed(span: f64, loads: &[Load]) -> ReactionSet {
    let (ma, mb) = fixed_end_moments(span, loads);

    // Moments about the left support: Rb·L = Σ(load moments) + Ma − Mb
    let right = (total_moment_about_left(loads) + ma - mb) / span;
    let left = total_vertical_force(loads) - right;

    ReactionSet {
        left_force_kn: left,
        right_force_kn: right,
        left_moment_knm: ma,
        right_moment_knm: mb,
    }
}

/// Tip deflection (mm, downward) of a cantilever carrying `loads`
fn cantilever_tip_deflection(span: f64, loads: &[Load], flexure: Flexure) -> f64 {
    let reactions = solve_cantilever(loads);
    let mut stations = sample_internal_forces(&reactions, loads, span, flexure.station_count);
    apply_deflection(
        &mut stations,
        span,
        flexure.flexural_rigidity_nmm2,
        DeflectionBoundary::FixedLeft,
    );
    stations.last().map_or(0.0, |s| s.deflection_mm)
}

/// Fixed left, roller right: unit-load compatibility on the released cantilever
///
/// 1. Tip deflection of the cantilever under the actual loads, `δ_loads`
/// 2. Tip deflection under a unit downward tip load, `δ_unit`
/// 3. The tip load that closes the gap is `−δ_loads/δ_unit` (negative, i.e. upward)
/// 4. Cantilever statics with that extra tip load gives the final reactions
pub fn solve_propped_cantilever(
    span: f64,
    loads: &[Load],
    flexure: Flexure,
) -> CalcResult<ReactionSet> {
    let delta_loads = cantilever_tip_deflection(span, loads, flexure);
    let delta_unit = cantilever_tip_deflection(span, &[Load::point(1.0, span)], flexure);

    if !delta_unit.is_finite() || delta_unit == 0.0 {
        return Err(CalcError::calculation_failed(
            "Propped cantilever",
            format!("Unit tip deflection is {}; check span and flexural rigidity", delta_unit),
        ));
    }

    let prop_load = -delta_loads / delta_unit;
    debug!(
        "propped compatibility: δ_loads = {:.6} mm, δ_unit = {:.6e} mm/kN, prop = {:.6} kN",
        delta_loads, delta_unit, -prop_load
    );

    let mut released = loads.to_vec();
    released.push(Load::point(prop_load, span));
    let cantilever = solve_cantilever(&released);

    Ok(ReactionSet {
        left_force_kn: cantilever.left_force_kn,
        right_force_kn: -prop_load,
        left_moment_knm: cantilever.left_moment_knm,
        right_moment_knm: 0.0,
    })
}
