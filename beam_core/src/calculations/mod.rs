//! # Beam Calculations
//!
//! The analysis pipeline, leaf to root:
//!
//! - [`equilibrium`] - Support reactions, one strategy per [`SupportType`]
//! - [`internal_forces`] - Shear and moment at evenly spaced stations
//! - [`deflection`] - Slope and deflection by double trapezoidal integration
//! - [`checks`] - Stress and deflection utilization, PASS/FAIL
//! - [`beam`] - The [`Beam`] aggregate and [`analyze`]
//!
//! Each stage is a pure function of its inputs. Results are JSON-serializable.

pub mod beam;
pub mod checks;
pub mod deflection;
pub mod equilibrium;
pub mod internal_forces;

// Re-export commonly used types
pub use beam::{
    analyze, check_span, AnalysisResult, Beam, Extremum, DEFAULT_STATIONS, MAX_STATIONS,
    MIN_STATIONS,
};
pub use checks::{CheckStatus, CodeCheck, DEFLECTION_LIMIT_RATIO};
pub use deflection::DeflectionBoundary;
pub use equilibrium::{ReactionSet, SupportType, FEM_MICRO_SEGMENTS};
pub use internal_forces::StationSample;
