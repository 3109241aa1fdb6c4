//! # Beam Loads
//!
//! Fully-specified loads acting on a single span, and their Macaulay-bracket
//! contributions to internal shear and moment.
//!
//! # Overview
//!
//! - [`Load`] - Point load, uniformly distributed load, or applied couple
//! - [`RawLoad`] / [`normalize_loads`] - Caller-supplied loads with optional
//!   fields, validated and completed against the span
//!
//! All magnitudes follow the crate sign convention (see [`crate::equations`]):
//! forces positive downward, couples positive clockwise.
//!
//! # Units
//!
//! Positions in metres; point loads in kN; distributed loads in kN/m; couples in kN·m.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::Load;
//!
//! let udl = Load::distributed(5.0, 0.0, 6.0);
//! assert_eq!(udl.vertical_force(), 30.0);
//! assert_eq!(udl.moment_about_left(), 90.0);
//! ```

pub mod normalize;

pub use normalize::{normalize_loads, RawLoad};

use serde::{Deserialize, Serialize};

use crate::equations::{macaulay, COUPLE_TO_SAGGING, LOAD_DOWNWARD};
use crate::errors::{require_finite, CalcError, CalcResult};

/// A single load on the beam
///
/// ## JSON Format
///
/// ```json
/// { "type": "point", "magnitude": 10.0, "position": 2.5 }
/// { "type": "distributed", "magnitude": 4.0, "start": 0.0, "end": 6.0 }
/// { "type": "moment", "magnitude": 12.0, "position": 3.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Load {
    /// Concentrated force (kN) at a position (m from left support)
    Point { magnitude: f64, position: f64 },

    /// Uniform line load (kN/m) between two positions (m from left support)
    Distributed { magnitude: f64, start: f64, end: f64 },

    /// Applied couple (kN·m, clockwise positive) at a position (m from left support)
    Moment { magnitude: f64, position: f64 },
}

impl Load {
    /// Create a point load
    pub fn point(magnitude: f64, position: f64) -> Self {
        Load::Point { magnitude, position }
    }

    /// Create a uniform load between `start` and `end`
    pub fn distributed(magnitude: f64, start: f64, end: f64) -> Self {
        Load::Distributed { magnitude, start, end }
    }

    /// Create an applied couple
    pub fn moment(magnitude: f64, position: f64) -> Self {
        Load::Moment { magnitude, position }
    }

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Load::Point { .. } => "Point",
            Load::Distributed { .. } => "Distributed",
            Load::Moment { .. } => "Moment",
        }
    }

    /// Magnitude as supplied (kN, kN/m or kN·m)
    pub fn magnitude(&self) -> f64 {
        match *self {
            Load::Point { magnitude, .. }
            | Load::Distributed { magnitude, .. }
            | Load::Moment { magnitude, .. } => magnitude,
        }
    }

    /// Resultant vertical force (kN, positive downward)
    ///
    /// Couples carry no net force.
    pub fn vertical_force(&self) -> f64 {
        match *self {
            Load::Point { magnitude, .. } => LOAD_DOWNWARD * magnitude,
            Load::Distributed { magnitude, start, end } => {
                LOAD_DOWNWARD * magnitude * (end - start)
            }
            Load::Moment { .. } => 0.0,
        }
    }

    /// Moment of the load about the left support (kN·m, clockwise positive)
    ///
    /// - Point: `P·a`
    /// - Distributed: `(w·length)·centroid`
    /// - Couple: its magnitude
    pub fn moment_about_left(&self) -> f64 {
        match *self {
            Load::Point { magnitude, position } => LOAD_DOWNWARD * magnitude * position,
            Load::Distributed { start, end, .. } => self.vertical_force() * (start + end) / 2.0,
            Load::Moment { magnitude, .. } => COUPLE_TO_SAGGING * magnitude,
        }
    }

    /// Contribution to internal forces at section `x`
    ///
    /// Returns `(shear_delta, moment_delta)`, the amounts this load removes from
    /// the left-reaction shear `R` and moment `M_left + R·x`. Only the part of the
    /// load left of the section counts (Macaulay convention, active once `x ≥ a`).
    ///
    /// - Point: `(P, P⟨x−a⟩)`
    /// - Distributed: covered length `c = min(x, end) − start`, giving
    ///   `(w·c, w·c·(x − start − c/2))`
    /// - Couple: `(0, −M0⟨x−a⟩⁰)`; a clockwise couple raises the sagging moment
    pub fn contribution(&self, x: f64) -> (f64, f64) {
        match *self {
            Load::Point { magnitude, position } => {
                let p = LOAD_DOWNWARD * magnitude;
                (p * macaulay(x, position, 0), p * macaulay(x, position, 1))
            }
            Load::Distributed { magnitude, start, end } => {
                if x <= start {
                    return (0.0, 0.0);
                }
                let covered = x.min(end) - start;
                let force = LOAD_DOWNWARD * magnitude * covered;
                let arm = x - (start + covered / 2.0);
                (force, force * arm)
            }
            Load::Moment { magnitude, position } => {
                (0.0, -COUPLE_TO_SAGGING * magnitude * macaulay(x, position, 0))
            }
        }
    }

    /// Validate the load against a span (m)
    ///
    /// `index` is used only to name the offending field in errors.
    pub fn validate(&self, span: f64, index: usize) -> CalcResult<()> {
        let field = |name: &str| format!("loads[{}].{}", index, name);

        require_finite(&field("magnitude"), self.magnitude())?;

        match *self {
            Load::Point { position, .. } | Load::Moment { position, .. } => {
                check_within_span(&field("position"), position, span)?;
            }
            Load::Distributed { start, end, .. } => {
                check_within_span(&field("start"), start, span)?;
                check_within_span(&field("end"), end, span)?;
                if start >= end {
                    return Err(CalcError::invalid_input(
                        field("end"),
                        end.to_string(),
                        format!("Distributed load end must exceed its start ({} m)", start),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn check_within_span(field: &str, value: f64, span: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < 0.0 || value > span {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Position must lie within the span [0, {}] m", span),
        ));
    }
    Ok(())
}

/// Sum of vertical load (kN, positive downward)
pub fn total_vertical_force(loads: &[Load]) -> f64 {
    loads.iter().map(Load::vertical_force).sum()
}

/// Sum of load moments about the left support (kN·m, clockwise positive)
pub fn total_moment_about_left(loads: &[Load]) -> f64 {
    loads.iter().map(Load::moment_about_left).sum()
}
