//! # Structural Engineering Equations
//!
//! Closed-form structural mechanics formulas used by the beam engine.
//! Keeping them in one place makes the formulas easy to check against
//! references and keeps the sign convention in a single location.
//!
//! ## Modules
//!
//! - [`beam`] - Fixed-end moments and Macaulay bracket helpers
//! - [`section`] - Cross-section properties (I, S, A)
//!
//! ## Sign Conventions
//!
//! Every formula in the crate follows this convention:
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Applied moments**: Positive clockwise
//! - **Reactions**: Forces positive upward
//! - **Support moments**: Reported as the internal bending moment at the support,
//!   so a fixed support under gravity load reports a negative (hogging) value
//! - **Internal moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Deflection**: Positive downward
//!
//! With these definitions a clockwise couple `M0` applied at `a` raises the
//! internal moment by `M0` for every section with `x ≥ a`.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Tables 8.1 and 8.1c
//! - Structural Analysis by R.C. Hibbeler

pub mod beam;
pub mod section;

/// Multiplier turning a load magnitude into a downward force (loads are positive down)
pub const LOAD_DOWNWARD: f64 = 1.0;

/// Change in internal sagging moment per unit clockwise applied couple
pub const COUPLE_TO_SAGGING: f64 = 1.0;

/// Curvature of the downward-positive deflection line per unit M/EI
///
/// A sagging moment bends the beam concave-up, which is a negative second
/// derivative when deflection is measured downward.
pub const CURVATURE_SIGN: f64 = -1.0;

// Re-export commonly used items
pub use beam::{
    fem_applied_moment,
    fem_partial_uniform,
    fem_point_load,
    fem_uniform_full,
    macaulay,
};

pub use section::{
    circular_area,
    circular_moment_of_inertia,
    circular_section_modulus,
    i_section_area,
    i_section_moment_of_inertia,
    i_section_modulus,
    radius_of_gyration,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_section_modulus,
};
